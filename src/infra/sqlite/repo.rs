use std::path::PathBuf;

use crate::domain::entities::custom_framework::{
    CustomFramework, CustomFrameworkId, NewCustomFramework,
};
use crate::infra::sqlite::queries::{create_framework, list_frameworks};
use crate::infra::sqlite::schema::init_db;
use crate::infra::timestamp_now;
use crate::usecase::ports::repo::{FrameworkRepository, RepoError};

pub struct SqliteRepo {
    pub db_path: PathBuf,
}

impl FrameworkRepository for SqliteRepo {
    fn init(&self) -> Result<(), RepoError> {
        init_db(&self.db_path).map_err(|err| RepoError::Message(format!("{err:#}")))
    }

    fn list_frameworks(&self) -> Result<Vec<CustomFramework>, RepoError> {
        init_db(&self.db_path)
            .and_then(|_| list_frameworks(&self.db_path))
            .map_err(|err| RepoError::Message(format!("{err:#}")))
    }

    fn create_framework(
        &self,
        framework: NewCustomFramework,
    ) -> Result<CustomFrameworkId, RepoError> {
        let framework_id = create_framework(&self.db_path, &framework, &timestamp_now())
            .map_err(|err| RepoError::Message(format!("{err:#}")))?;

        Ok(CustomFrameworkId(framework_id))
    }
}
