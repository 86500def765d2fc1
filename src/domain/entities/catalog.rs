use serde::{Deserialize, Serialize};

use crate::domain::entities::custom_framework::{CustomFramework, CustomFrameworkId};
use crate::domain::entities::table::{CellValue, Row};

pub const CONTROL_ID_KEY: &str = "controlId";
pub const CATEGORY_KEY: &str = "category";
pub const CATEGORY_KEY_KEY: &str = "categoryKey";
pub const DESCRIPTION_KEY: &str = "description";

/// A framework as served by `GET /frameworks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Framework {
    #[serde(default)]
    pub id: Option<CellValue>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// A control item as served by `GET /controls` or imported from a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    #[serde(default)]
    pub control_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub category_key: String,
    #[serde(default)]
    pub description: String,
}

impl Control {
    pub fn to_row(&self) -> Row {
        Row::new()
            .with(CONTROL_ID_KEY, self.control_id.as_str())
            .with(CATEGORY_KEY, self.category.as_str())
            .with(CATEGORY_KEY_KEY, self.category_key.as_str())
            .with(DESCRIPTION_KEY, self.description.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkOrigin {
    Remote,
    Custom(CustomFrameworkId),
}

/// Sidebar entry, built from either a remote framework or a locally stored one.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkCard {
    pub key: String,
    pub title: String,
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
    pub origin: FrameworkOrigin,
}

impl FrameworkCard {
    pub fn from_remote(index: usize, framework: &Framework) -> Self {
        let key = framework
            .id
            .as_ref()
            .map(ToString::to_string)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| index.to_string());

        Self {
            key,
            title: framework.title.clone(),
            name: framework.name.clone(),
            description: framework.description.clone(),
            logo: framework.logo.clone().filter(|logo| !logo.is_empty()),
            origin: FrameworkOrigin::Remote,
        }
    }

    pub fn from_custom(framework: &CustomFramework) -> Self {
        Self {
            key: format!("custom-{}", framework.id.0),
            title: framework.short_name.clone(),
            name: framework.name.clone(),
            description: framework.description.clone(),
            logo: None,
            origin: FrameworkOrigin::Custom(framework.id),
        }
    }
}
