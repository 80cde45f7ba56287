#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for the metadata sheet linter

use crate::linter::{is_snake_case, lint_sheet, to_snake_case, LintSeverity};
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper to create a temp CSV sheet and run lint_sheet on it
fn lint_csv(content: &str) -> Vec<crate::linter::LintIssue> {
    let mut temp = NamedTempFile::with_suffix(".csv").expect("create temp file");
    temp.write_all(content.as_bytes()).expect("write sheet");
    temp.flush().expect("flush");
    lint_sheet(temp.path()).expect("lint sheet")
}

#[test]
fn test_lint_clean_sheet() {
    let issues = lint_csv("Column Name\nid\nname\ncreated_at\n");
    assert!(issues.is_empty(), "expected no issues, got {issues:?}");
}

#[test]
fn test_lint_missing_header() {
    let issues = lint_csv("Field\nid\nname\n");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "missing_column_name_header");
    assert_eq!(issues[0].severity, LintSeverity::Error);
    assert!(issues[0].suggestion.is_some());
}

#[test]
fn test_lint_empty_sheet() {
    let issues = lint_csv("Column Name\n");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "empty_sheet");
    assert_eq!(issues[0].severity, LintSeverity::Error);
}

#[test]
fn test_lint_blank_name() {
    let issues = lint_csv("Column Name,Type\nid,int\n,text\nname,text\n");
    let blank: Vec<_> = issues
        .iter()
        .filter(|i| i.kind == "blank_column_name")
        .collect();
    assert_eq!(blank.len(), 1);
    assert_eq!(blank[0].location, "row:2");
    assert_eq!(blank[0].severity, LintSeverity::Error);
}

#[test]
fn test_lint_duplicate_names() {
    let issues = lint_csv("Column Name\nid\nname\nid\n");
    let dups: Vec<_> = issues
        .iter()
        .filter(|i| i.kind == "duplicate_column_name")
        .collect();
    assert_eq!(dups.len(), 1);
    assert_eq!(dups[0].location, "row:3");
    assert_eq!(dups[0].severity, LintSeverity::Warning);
}

#[test]
fn test_lint_casing_suggestion() {
    let issues = lint_csv("Column Name\nCreatedAt\n");
    let casing: Vec<_> = issues
        .iter()
        .filter(|i| i.kind == "column_name_casing")
        .collect();
    assert_eq!(casing.len(), 1);
    assert_eq!(casing[0].severity, LintSeverity::Info);
    assert_eq!(
        casing[0].suggestion.as_deref(),
        Some("Consider renaming to: created_at")
    );
}

#[test]
fn test_lint_untrimmed_name() {
    // Quote the field so csv preserves the padding
    let issues = lint_csv("Column Name\n\" id \"\n");
    let untrimmed: Vec<_> = issues
        .iter()
        .filter(|i| i.kind == "untrimmed_column_name")
        .collect();
    assert_eq!(untrimmed.len(), 1);
    assert_eq!(untrimmed[0].severity, LintSeverity::Warning);
}

#[test]
fn test_lint_json_sheet() {
    let mut temp = NamedTempFile::with_suffix(".json").expect("create temp file");
    temp.write_all(br#"[{"Column Name": "id"}, {"Column Name": "UserName"}]"#)
        .expect("write sheet");
    temp.flush().expect("flush");
    let issues = lint_sheet(temp.path()).expect("lint sheet");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "column_name_casing");
}

#[test]
fn test_lint_json_missing_field() {
    let mut temp = NamedTempFile::with_suffix(".json").expect("create temp file");
    temp.write_all(br#"[{"Field": "id"}]"#).expect("write sheet");
    temp.flush().expect("flush");
    let issues = lint_sheet(temp.path()).expect("lint sheet");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "missing_column_name_header");
}

#[test]
fn test_snake_case_helpers() {
    assert!(is_snake_case("user_id"));
    assert!(is_snake_case("id2"));
    assert!(!is_snake_case("UserId"));
    assert!(!is_snake_case(""));
    assert_eq!(to_snake_case("UserId"), "user_id");
    assert_eq!(to_snake_case("Created At"), "created_at");
    assert_eq!(to_snake_case("already_snake"), "already_snake");
}
