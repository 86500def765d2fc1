use std::rc::Rc;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::catalog::{FrameworkCard, FrameworkOrigin};
use crate::domain::entities::table::Row;
use crate::usecase::ports::catalog::{CatalogError, CatalogSource};
use crate::usecase::ports::repo::FrameworkRepository;

pub struct CatalogService {
    source: Rc<dyn CatalogSource>,
    repo: Arc<dyn FrameworkRepository>,
}

impl CatalogService {
    pub fn new(source: Rc<dyn CatalogSource>, repo: Arc<dyn FrameworkRepository>) -> Self {
        Self { source, repo }
    }

    /// Remote frameworks first, then the locally created ones.
    ///
    /// A failing local store only drops the custom cards; a failing backend fails the call.
    pub async fn framework_cards(&self) -> Result<Vec<FrameworkCard>, CatalogError> {
        let remote = self.source.frameworks().await?;
        let mut cards: Vec<FrameworkCard> = remote
            .iter()
            .enumerate()
            .map(|(index, framework)| FrameworkCard::from_remote(index, framework))
            .collect();

        match self.repo.list_frameworks() {
            Ok(custom) => cards.extend(custom.iter().map(FrameworkCard::from_custom)),
            Err(err) => warn!("skipping custom frameworks: {err}"),
        }

        info!(count = cards.len(), "loaded framework cards");
        Ok(cards)
    }

    pub async fn control_rows(&self, origin: FrameworkOrigin) -> Result<Vec<Row>, CatalogError> {
        let controls = match origin {
            FrameworkOrigin::Remote => self.source.controls().await?,
            FrameworkOrigin::Custom(id) => self
                .repo
                .list_frameworks()?
                .into_iter()
                .find(|framework| framework.id == id)
                .map(|framework| framework.controls)
                .ok_or(CatalogError::MissingFramework(id.0))?,
        };

        Ok(controls.iter().map(|control| control.to_row()).collect())
    }
}
