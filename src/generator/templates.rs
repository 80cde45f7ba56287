use askama::Template;
use std::fs;
use std::path::Path;

use crate::stack::StackSelection;

/// Template data for the scaffold source file
///
/// Fragment fields are pre-resolved from the stack selection; an empty
/// string means the selection was not recognized and the section is emitted
/// without a code block.
#[derive(Template)]
#[template(path = "scaffold.py.txt", escape = "none")]
pub struct ScaffoldTemplate {
    /// Interface type display name
    pub interface_type: String,
    /// Frontend display name
    pub frontend: String,
    /// Backend display name
    pub backend: String,
    /// Database display name
    pub database: String,
    /// Data-fetch method display name
    pub data_fetch: String,
    /// Metadata column names, in input order
    pub columns: Vec<String>,
    /// Backend-setup boilerplate (empty when unrecognized)
    pub backend_fragment: String,
    /// Frontend-setup boilerplate (empty when unrecognized)
    pub frontend_fragment: String,
    /// Data-fetch boilerplate (empty when unrecognized)
    pub data_fetch_fragment: String,
    /// Closing interface-type comment (empty when unrecognized)
    pub interface_note: String,
}

impl ScaffoldTemplate {
    /// Resolve the template data for one generation run
    pub fn new(columns: &[String], selection: &StackSelection) -> Self {
        ScaffoldTemplate {
            interface_type: selection.interface_type.name().to_string(),
            frontend: selection.frontend.name().to_string(),
            backend: selection.backend.name().to_string(),
            database: selection.database.name().to_string(),
            data_fetch: selection.data_fetch.name().to_string(),
            columns: columns.to_vec(),
            backend_fragment: selection
                .backend
                .fragment(&selection.database)
                .unwrap_or_default(),
            frontend_fragment: selection
                .frontend
                .fragment()
                .map(str::to_string)
                .unwrap_or_default(),
            data_fetch_fragment: selection
                .data_fetch
                .fragment()
                .map(str::to_string)
                .unwrap_or_default(),
            interface_note: selection
                .interface_type
                .note()
                .map(str::to_string)
                .unwrap_or_default(),
        }
    }
}

/// Strategy boundary for scaffold generation
///
/// The template implementation is deterministic; implementations that
/// delegate to an external collaborator keep the same contract and surface
/// their failures through the `Result`.
pub trait ScaffoldGenerator {
    /// Produce the scaffold text for the given columns and selection
    fn generate(&self, columns: &[String], selection: &StackSelection) -> anyhow::Result<String>;
}

/// Deterministic template-based scaffold generator
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateGenerator;

impl ScaffoldGenerator for TemplateGenerator {
    fn generate(&self, columns: &[String], selection: &StackSelection) -> anyhow::Result<String> {
        Ok(ScaffoldTemplate::new(columns, selection).render()?)
    }
}

/// Render the scaffold text for the given columns and selection
///
/// Convenience wrapper over [`TemplateGenerator`].
///
/// # Errors
///
/// Returns an error only if template rendering fails
pub fn generate_scaffold(
    columns: &[String],
    selection: &StackSelection,
) -> anyhow::Result<String> {
    TemplateGenerator.generate(columns, selection)
}

/// Write a scaffold file
///
/// Skips the write when the file already exists, unless `force` is set.
///
/// # Errors
///
/// Returns an error if file writing fails
pub fn write_scaffold(path: &Path, contents: &str, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        println!("⚠️  Skipping existing scaffold file: {path:?}");
        return Ok(());
    }
    fs::write(path, contents)?;
    println!("✅ Generated scaffold: {path:?}");
    Ok(())
}
