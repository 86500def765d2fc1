use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::entities::catalog::{Control, Framework};
use crate::usecase::ports::catalog::{CatalogError, CatalogSource};

/// JSON client for the compliance backend (`/frameworks`, `/controls`).
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.endpoint(path);
        debug!(%url, "fetching catalog resource");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| CatalogError::Transport {
                url: url.clone(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|err| CatalogError::Transport {
            url: url.clone(),
            message: err.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|err| CatalogError::Decode {
            url,
            message: err.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn frameworks(&self) -> Result<Vec<Framework>, CatalogError> {
        self.get_json("frameworks").await
    }

    async fn controls(&self) -> Result<Vec<Control>, CatalogError> {
        self.get_json("controls").await
    }
}
