use crate::domain::entities::catalog::Control;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomFrameworkId(pub i64);

impl From<i64> for CustomFrameworkId {
    fn from(value: i64) -> Self {
        CustomFrameworkId(value)
    }
}

impl From<CustomFrameworkId> for i64 {
    fn from(value: CustomFrameworkId) -> Self {
        value.0
    }
}

/// Step-one form of the custom framework wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameworkDraft {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub use_logo: bool,
    pub template_name: Option<String>,
}

impl FrameworkDraft {
    pub fn is_valid(&self) -> bool {
        [&self.name, &self.short_name, &self.description]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomFramework {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub use_logo: bool,
    pub controls: Vec<Control>,
}

impl NewCustomFramework {
    pub fn from_draft(draft: &FrameworkDraft, controls: Vec<Control>) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            short_name: draft.short_name.trim().to_string(),
            description: draft.description.trim().to_string(),
            use_logo: draft.use_logo,
            controls,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFramework {
    pub id: CustomFrameworkId,
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub use_logo: bool,
    pub created_at: String,
    pub controls: Vec<Control>,
}
