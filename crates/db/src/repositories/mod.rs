pub mod class_entry;
pub mod settings;
