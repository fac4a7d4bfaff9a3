/// Class entry management
pub mod classes;
/// User display settings
pub mod settings;
/// Daily and weekly views
pub mod views;
