//! # Metadata Sheet Module
//!
//! Loads the column-metadata sheet that describes the data entity the
//! scaffold is generated for. Sheets are the exported spreadsheet in CSV
//! form, or a JSON array of records; the format is chosen by file
//! extension.
//!
//! Validation happens here, at the caller side of the generator boundary:
//! the sheet must have a `Column Name` header, must contain at least one
//! row, and no row may have a blank name. The generator itself stays total
//! and never re-validates.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Header/field under which column names are supplied
pub const COLUMN_NAME_FIELD: &str = "Column Name";

/// One column descriptor from the metadata sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Name of the data-entity attribute this column describes
    #[serde(rename = "Column Name")]
    pub name: String,
}

/// Load and validate a metadata sheet
///
/// Dispatches on the file extension: `.csv` is parsed with headers, any
/// other extension is parsed as a JSON array of records.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, the
/// `Column Name` header is missing, the sheet has no rows, or a row has a
/// blank name.
pub fn load_sheet(path: &Path) -> anyhow::Result<Vec<ColumnMeta>> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let columns = if is_csv {
        load_csv(path)?
    } else {
        load_json(path)?
    };

    if columns.is_empty() {
        bail!("metadata sheet {path:?} has no rows");
    }
    for (idx, column) in columns.iter().enumerate() {
        if column.name.trim().is_empty() {
            bail!("metadata sheet {path:?} row {} has a blank column name", idx + 1);
        }
    }
    Ok(columns)
}

fn load_csv(path: &Path) -> anyhow::Result<Vec<ColumnMeta>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open metadata sheet {path:?}"))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from {path:?}"))?;
    if !headers.iter().any(|h| h == COLUMN_NAME_FIELD) {
        bail!("metadata sheet {path:?} must contain a '{COLUMN_NAME_FIELD}' column");
    }

    let mut columns = Vec::new();
    for record in reader.deserialize() {
        let column: ColumnMeta =
            record.with_context(|| format!("invalid row in metadata sheet {path:?}"))?;
        columns.push(column);
    }
    Ok(columns)
}

fn load_json(path: &Path) -> anyhow::Result<Vec<ColumnMeta>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read metadata sheet {path:?}"))?;
    let columns: Vec<ColumnMeta> = serde_json::from_str(&content).with_context(|| {
        format!("metadata sheet {path:?} must be a JSON array of records with a '{COLUMN_NAME_FIELD}' field")
    })?;
    Ok(columns)
}

/// Extract the ordered column names for generation
pub fn column_names(columns: &[ColumnMeta]) -> Vec<String> {
    columns.iter().map(|c| c.name.clone()).collect()
}
