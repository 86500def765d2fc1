pub mod catalog_service;
pub mod framework_service;
pub mod import_service;
pub mod query_service;
