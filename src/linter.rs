//! # Metadata Sheet Linter
//!
//! Checks a metadata sheet for problems before it is fed to the scaffold
//! generator, and reports them with severities instead of stopping at the
//! first failure the way [`crate::metadata::load_sheet`] does.
//!
//! ## Checks Performed
//!
//! 1. **Missing header** - the `Column Name` header/field must be present
//! 2. **Empty sheet** - at least one row is required
//! 3. **Blank names** - a row with an empty name cannot be scaffolded
//! 4. **Duplicate names** - repeated columns usually indicate a bad export
//! 5. **Untrimmed names** - surrounding whitespace survives into output
//! 6. **Name casing** - names land in generated code, snake_case travels best
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ifacegen::linter::{lint_sheet, LintSeverity};
//!
//! let issues = lint_sheet(Path::new("metadata.csv"))?;
//! for issue in &issues {
//!     eprintln!("[{:?}] {}: {}", issue.severity, issue.location, issue.message);
//! }
//! ```

use crate::metadata::COLUMN_NAME_FIELD;
use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;

#[cfg(test)]
mod tests;

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error - generation would be rejected
    Error,
    /// Warning - may produce a surprising scaffold but won't block generation
    Warning,
    /// Info - best practice suggestion
    Info,
}

/// A lint issue found in a metadata sheet
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g. "row:3", "sheet")
    pub location: String,
    /// Severity of the issue
    pub severity: LintSeverity,
    /// Type of lint issue (e.g. "blank_column_name")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Create a new lint issue
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint a metadata sheet file
///
/// # Arguments
///
/// * `sheet_path` - Path to the metadata sheet (CSV or JSON)
///
/// # Returns
///
/// A vector of lint issues found in the sheet
pub fn lint_sheet(sheet_path: &Path) -> anyhow::Result<Vec<LintIssue>> {
    let mut issues = Vec::new();
    let names = match read_raw_names(sheet_path)? {
        Some(names) => names,
        None => {
            issues.push(
                LintIssue::new(
                    "sheet",
                    LintSeverity::Error,
                    "missing_column_name_header",
                    format!("Sheet does not contain a '{COLUMN_NAME_FIELD}' column"),
                )
                .with_suggestion(format!("Add a '{COLUMN_NAME_FIELD}' header to the sheet")),
            );
            return Ok(issues);
        }
    };

    if names.is_empty() {
        issues.push(LintIssue::new(
            "sheet",
            LintSeverity::Error,
            "empty_sheet",
            "Sheet contains no rows",
        ));
        return Ok(issues);
    }

    let mut seen: HashSet<String> = HashSet::new();
    for (idx, name) in names.iter().enumerate() {
        let location = format!("row:{}", idx + 1);

        if name.trim().is_empty() {
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Error,
                "blank_column_name",
                "Row has a blank column name",
            ));
            continue;
        }

        if name != name.trim() {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "untrimmed_column_name",
                    format!("Column name '{name}' has surrounding whitespace"),
                )
                .with_suggestion(format!("Rename to '{}'", name.trim())),
            );
        }

        if !seen.insert(name.trim().to_string()) {
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Warning,
                "duplicate_column_name",
                format!("Column name '{}' appears more than once", name.trim()),
            ));
        }

        let trimmed = name.trim();
        if !is_snake_case(trimmed) {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Info,
                    "column_name_casing",
                    format!("Column name '{trimmed}' is not snake_case"),
                )
                .with_suggestion(format!("Consider renaming to: {}", to_snake_case(trimmed))),
            );
        }
    }

    Ok(issues)
}

/// Read the raw column names without the strict validation of
/// [`crate::metadata::load_sheet`]. Returns `None` when the
/// `Column Name` header/field is absent entirely.
fn read_raw_names(sheet_path: &Path) -> anyhow::Result<Option<Vec<String>>> {
    let is_csv = sheet_path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        let mut reader = csv::Reader::from_path(sheet_path)
            .with_context(|| format!("failed to open metadata sheet {sheet_path:?}"))?;
        let headers = reader
            .headers()
            .with_context(|| format!("failed to read headers from {sheet_path:?}"))?;
        let Some(name_idx) = headers.iter().position(|h| h == COLUMN_NAME_FIELD) else {
            return Ok(None);
        };
        let mut names = Vec::new();
        for record in reader.records() {
            let record =
                record.with_context(|| format!("invalid row in metadata sheet {sheet_path:?}"))?;
            names.push(record.get(name_idx).unwrap_or_default().to_string());
        }
        Ok(Some(names))
    } else {
        let content = std::fs::read_to_string(sheet_path)
            .with_context(|| format!("failed to read metadata sheet {sheet_path:?}"))?;
        let rows: Vec<serde_json::Value> = serde_json::from_str(&content)
            .with_context(|| format!("metadata sheet {sheet_path:?} must be a JSON array"))?;
        let mut names = Vec::new();
        let mut any_present = false;
        for row in &rows {
            match row.get(COLUMN_NAME_FIELD).and_then(|v| v.as_str()) {
                Some(name) => {
                    any_present = true;
                    names.push(name.to_string());
                }
                None => names.push(String::new()),
            }
        }
        if !rows.is_empty() && !any_present {
            return Ok(None);
        }
        Ok(Some(names))
    }
}

/// Check if a string is snake_case
pub(crate) fn is_snake_case(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    if !s
        .chars()
        .next()
        .map(|c| c.is_lowercase() || c == '_')
        .unwrap_or(false)
    {
        return false;
    }
    s.chars()
        .all(|c| c.is_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Convert a string to snake_case
pub(crate) fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let chars = s.chars();

    for ch in chars {
        if ch.is_uppercase() {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            result.push(ch.to_lowercase().next().unwrap_or(ch));
        } else if ch.is_lowercase() || ch.is_ascii_digit() {
            result.push(ch);
        } else if ch == '-' || ch == ' ' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Print lint issues in a formatted way
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .collect();
    let warnings: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Warning)
        .collect();
    let infos: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Info)
        .collect();

    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        errors.len(),
        warnings.len(),
        infos.len()
    );

    if !errors.is_empty() {
        println!("❌ Errors (must fix):");
        for issue in &errors {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {suggestion}");
            }
        }
        println!();
    }

    if !warnings.is_empty() {
        println!("⚠️  Warnings (should fix):");
        for issue in &warnings {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {suggestion}");
            }
        }
        println!();
    }

    if !infos.is_empty() {
        println!("ℹ️  Info (best practices):");
        for issue in &infos {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {suggestion}");
            }
        }
        println!();
    }
}

/// Exit with error code if there are any error-level lint issues
pub fn fail_if_errors(issues: &[LintIssue]) {
    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .collect();
    if !errors.is_empty() {
        print_lint_issues(issues);
        std::process::exit(1);
    }
}
