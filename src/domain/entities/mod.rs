pub mod catalog;
pub mod custom_framework;
pub mod table;
