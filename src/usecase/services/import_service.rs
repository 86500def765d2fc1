use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::domain::entities::catalog::Control;
use crate::infra::import::csv::parse_csv_controls;
use crate::infra::import::xlsx::parse_xlsx_controls;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unsupported template format: {0} (expected .csv or .xlsx)")]
    UnsupportedFormat(String),
    #[error("{0:#}")]
    Parse(#[from] anyhow::Error),
}

pub const TEMPLATE_EXTENSIONS: [&str; 2] = ["csv", "xlsx"];

/// Reads control items from an uploaded template, picking the parser by file extension.
pub fn import_control_template(file_name: &str, bytes: &[u8]) -> Result<Vec<Control>, ImportError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    let controls = match ext.as_str() {
        "csv" => parse_csv_controls(bytes)?,
        "xlsx" => parse_xlsx_controls(bytes)?,
        _ => return Err(ImportError::UnsupportedFormat(file_name.to_string())),
    };

    info!(file = file_name, count = controls.len(), "imported control template");
    Ok(controls)
}
