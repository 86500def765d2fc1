use std::sync::Arc;

use crate::domain::entities::catalog::Control;
use crate::domain::entities::custom_framework::{
    CustomFrameworkId, FrameworkDraft, NewCustomFramework,
};
use crate::usecase::ports::repo::{FrameworkRepository, RepoError};

pub struct FrameworkService {
    repo: Arc<dyn FrameworkRepository>,
}

impl FrameworkService {
    pub fn new(repo: Arc<dyn FrameworkRepository>) -> Self {
        Self { repo }
    }

    pub fn init(&self) -> Result<(), RepoError> {
        self.repo.init()
    }

    pub fn create_from_draft(
        &self,
        draft: &FrameworkDraft,
        controls: Vec<Control>,
    ) -> Result<CustomFrameworkId, RepoError> {
        if !draft.is_valid() {
            return Err(RepoError::Invalid(
                "name, short name and description are required".to_string(),
            ));
        }

        self.repo
            .create_framework(NewCustomFramework::from_draft(draft, controls))
    }
}
