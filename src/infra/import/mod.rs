pub mod csv;
pub mod xlsx;

use anyhow::{bail, Result};

use crate::domain::entities::catalog::Control;

/// Positions of the template columns inside a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateColumns {
    control_id: usize,
    category: Option<usize>,
    category_key: Option<usize>,
    description: Option<usize>,
}

fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

impl TemplateColumns {
    pub fn locate<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h.as_ref())).collect();
        let find = |names: &[&str]| normalized.iter().position(|h| names.contains(&h.as_str()));

        let Some(control_id) = find(&["controlid", "id"]) else {
            bail!("template header must contain a control id column")
        };

        Ok(Self {
            control_id,
            category: find(&["category", "controlcategory"]),
            category_key: find(&["categorykey"]),
            description: find(&["description", "controldescription"]),
        })
    }

    /// Builds a control from one data row; rows without a control id are skipped.
    pub fn build_control<S: AsRef<str>>(&self, cells: &[S]) -> Option<Control> {
        let cell = |idx: Option<usize>| {
            idx.and_then(|idx| cells.get(idx))
                .map(|value| value.as_ref().trim().to_string())
                .unwrap_or_default()
        };

        let control_id = cell(Some(self.control_id));
        if control_id.is_empty() {
            return None;
        }

        let category = cell(self.category);
        let mut category_key = cell(self.category_key);
        if category_key.is_empty() {
            category_key = derive_category_key(&category);
        }

        Some(Control {
            control_id,
            category,
            category_key,
            description: cell(self.description),
        })
    }
}

/// Known category labels map to their short keys; anything else becomes a slug.
pub fn derive_category_key(category: &str) -> String {
    match category.trim() {
        "Business Contact Information" => "bci".to_string(),
        "Technical & Org. Measures" => "tom".to_string(),
        other => other
            .split(|c: char| !c.is_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-"),
    }
}
