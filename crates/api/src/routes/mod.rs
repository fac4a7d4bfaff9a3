pub mod classes;
pub mod health;
pub mod settings;
pub mod views;
