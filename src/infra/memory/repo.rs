use std::sync::Mutex;

use crate::domain::entities::custom_framework::{
    CustomFramework, CustomFrameworkId, NewCustomFramework,
};
use crate::infra::timestamp_now;
use crate::usecase::ports::repo::{FrameworkRepository, RepoError};

/// Session-scoped store used by the web build, where no sqlite file is available.
#[derive(Default)]
pub struct MemoryRepo {
    frameworks: Mutex<Vec<CustomFramework>>,
}

impl MemoryRepo {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<CustomFramework>>, RepoError> {
        self.frameworks
            .lock()
            .map_err(|_| RepoError::Message("framework store lock poisoned".to_string()))
    }
}

impl FrameworkRepository for MemoryRepo {
    fn init(&self) -> Result<(), RepoError> {
        Ok(())
    }

    fn list_frameworks(&self) -> Result<Vec<CustomFramework>, RepoError> {
        Ok(self.lock()?.clone())
    }

    fn create_framework(
        &self,
        framework: NewCustomFramework,
    ) -> Result<CustomFrameworkId, RepoError> {
        let mut frameworks = self.lock()?;
        let next_id = frameworks.last().map(|f| f.id.0 + 1).unwrap_or(1);
        let id = CustomFrameworkId(next_id);

        frameworks.push(CustomFramework {
            id,
            name: framework.name,
            short_name: framework.short_name,
            description: framework.description,
            use_logo: framework.use_logo,
            created_at: timestamp_now(),
            controls: framework.controls,
        });

        Ok(id)
    }
}
