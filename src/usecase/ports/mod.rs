pub mod catalog;
pub mod repo;
