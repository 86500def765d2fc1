pub mod data_table;
pub mod input;
pub mod pagination;
pub mod stepper;
pub mod textarea;
