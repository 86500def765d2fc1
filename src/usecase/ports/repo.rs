use thiserror::Error;

use crate::domain::entities::custom_framework::{
    CustomFramework, CustomFrameworkId, NewCustomFramework,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("{0}")]
    Message(String),
    #[error("invalid framework: {0}")]
    Invalid(String),
}

/// Local store for frameworks created through the wizard.
pub trait FrameworkRepository: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;

    fn list_frameworks(&self) -> Result<Vec<CustomFramework>, RepoError>;
    fn create_framework(
        &self,
        framework: NewCustomFramework,
    ) -> Result<CustomFrameworkId, RepoError>;
}
