use std::io::Cursor;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};

use crate::domain::entities::catalog::Control;
use crate::infra::import::TemplateColumns;

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Reads controls from the first sheet; its first row is the header.
pub fn parse_xlsx_controls(bytes: &[u8]) -> Result<Vec<Control>> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes.to_vec()))
        .context("failed to open xlsx template")?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("xlsx template has no sheets"))?
        .context("failed to read first sheet of xlsx template")?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<String>>());

    let headers = rows
        .next()
        .ok_or_else(|| anyhow!("xlsx template is empty"))?;
    let columns = TemplateColumns::locate(&headers)?;

    Ok(rows.filter_map(|row| columns.build_control(&row)).collect())
}
