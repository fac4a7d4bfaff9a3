pub mod class_entry;
pub mod settings;
pub mod time;
pub mod view;
