use std::fs;
use std::path::{Path, PathBuf};

use anyhow::bail;
use tracing::warn;

use super::templates::{generate_scaffold, write_scaffold};
use crate::metadata::{column_names, load_sheet};
use crate::stack::StackSelection;

/// Fixed name of the generated scaffold file
pub const GENERATED_FILE_NAME: &str = "generated_interface_template.py";

/// Generate a scaffold file from a metadata sheet
///
/// Loads and validates the sheet, checks the stack selection, renders the
/// scaffold, and writes [`GENERATED_FILE_NAME`] into `output_dir` (the
/// current directory when `None`). Returns the path of the written file.
///
/// Selection values outside the recognized tables are logged as warnings
/// and their section is emitted without a code fragment; with `strict` they
/// are an error instead.
///
/// # Errors
///
/// Returns an error if the sheet fails validation, `strict` rejects an
/// unrecognized selection, or rendering/writing fails.
pub fn generate_scaffold_from_sheet(
    sheet_path: &Path,
    output_dir: Option<&Path>,
    selection: &StackSelection,
    force: bool,
    strict: bool,
) -> anyhow::Result<PathBuf> {
    let columns = load_sheet(sheet_path)?;

    let unrecognized = selection.unrecognized();
    if !unrecognized.is_empty() {
        if strict {
            let fields: Vec<String> = unrecognized
                .iter()
                .map(|(field, value)| format!("{field}='{value}'"))
                .collect();
            bail!("unrecognized stack selection(s): {}", fields.join(", "));
        }
        for (field, value) in &unrecognized {
            warn!(field, value, "unrecognized stack selection, section will have no code fragment");
        }
    }

    let base_dir = output_dir.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(base_dir)?;

    let contents = generate_scaffold(&column_names(&columns), selection)?;
    let path = base_dir.join(GENERATED_FILE_NAME);
    write_scaffold(&path, &contents, force)?;
    Ok(path)
}
