use anyhow::{bail, Context, Result};

use crate::domain::entities::catalog::Control;
use crate::infra::import::TemplateColumns;

pub fn parse_csv_controls(bytes: &[u8]) -> Result<Vec<Control>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let headers = reader
        .headers()
        .context("failed to read headers from csv template")?
        .clone();

    if headers.is_empty() {
        bail!("csv header is required")
    }

    let header_names: Vec<&str> = headers.iter().collect();
    let columns = TemplateColumns::locate(&header_names)?;

    let mut controls = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to parse csv record {}", row_idx + 1))?;
        let cells: Vec<&str> = record.iter().collect();
        if let Some(control) = columns.build_control(&cells) {
            controls.push(control);
        }
    }

    Ok(controls)
}
