use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::catalog::{Control, Framework};
use crate::usecase::ports::repo::RepoError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("custom framework {0} no longer exists")]
    MissingFramework(i64),
    #[error(transparent)]
    Store(#[from] RepoError),
}

/// Read side of the compliance REST backend.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn frameworks(&self) -> Result<Vec<Framework>, CatalogError>;
    async fn controls(&self) -> Result<Vec<Control>, CatalogError>;
}
