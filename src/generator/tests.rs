#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::stack::StackSelection;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("gen_test_{}_{}", std::process::id(), nanos));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn reference_selection() -> StackSelection {
    StackSelection::from_inputs("ReactJS", "Flask", "SQLite", "REST API", "Display Data")
}

#[test]
fn test_generate_is_deterministic() {
    let columns = vec!["id".to_string(), "name".to_string()];
    let selection = reference_selection();
    let first = generate_scaffold(&columns, &selection).unwrap();
    let second = generate_scaffold(&columns, &selection).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_columns_emitted_in_order() {
    let columns = vec![
        "zeta".to_string(),
        "alpha".to_string(),
        "mid".to_string(),
    ];
    let code = generate_scaffold(&columns, &reference_selection()).unwrap();
    let zeta = code.find("# - zeta").unwrap();
    let alpha = code.find("# - alpha").unwrap();
    let mid = code.find("# - mid").unwrap();
    assert!(zeta < alpha && alpha < mid);
}

#[test]
fn test_empty_columns_still_renders() {
    let code = generate_scaffold(&[], &reference_selection()).unwrap();
    assert!(code.contains("# Metadata columns:"));
    assert!(!code.contains("# - "));
    assert!(code.contains("# Backend setup (Flask with SQLite)"));
}

#[test]
fn test_section_headers_always_present() {
    let selection = StackSelection::from_inputs("Nope", "Nope", "Nope", "Nope", "Nope");
    let code = generate_scaffold(&["id".to_string()], &selection).unwrap();
    assert_eq!(code.matches("# Backend setup (Nope with Nope)").count(), 1);
    assert_eq!(code.matches("# Frontend setup (Nope)").count(), 1);
    assert_eq!(code.matches("# Data fetching method: Nope").count(), 1);
}

#[test]
fn test_write_scaffold_respects_force() {
    let dir = temp_dir();
    let path = dir.join(GENERATED_FILE_NAME);

    write_scaffold(&path, "first", true).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "first");

    // Without force the existing file is kept
    write_scaffold(&path, "second", false).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "first");

    write_scaffold(&path, "second", true).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "second");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_generate_from_sheet_writes_fixed_file_name() {
    let dir = temp_dir();
    let sheet = dir.join("metadata.csv");
    fs::write(&sheet, "Column Name\nid\nname\n").unwrap();

    let out = generate_scaffold_from_sheet(&sheet, Some(&dir), &reference_selection(), true, false)
        .unwrap();
    assert_eq!(out.file_name().unwrap(), GENERATED_FILE_NAME);

    let code = fs::read_to_string(&out).unwrap();
    assert!(code.contains("# - id"));
    assert!(code.contains("# - name"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_generate_from_sheet_strict_rejects_unknown_selection() {
    let dir = temp_dir();
    let sheet = dir.join("metadata.csv");
    fs::write(&sheet, "Column Name\nid\n").unwrap();

    let selection =
        StackSelection::from_inputs("ReactJS", "Other", "SQLite", "REST API", "Display Data");
    let err = generate_scaffold_from_sheet(&sheet, Some(&dir), &selection, true, true)
        .unwrap_err();
    assert!(err.to_string().contains("backend='Other'"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_generate_from_sheet_rejects_invalid_sheet() {
    let dir = temp_dir();
    let sheet = dir.join("metadata.csv");
    fs::write(&sheet, "Field\nid\n").unwrap();

    let err =
        generate_scaffold_from_sheet(&sheet, Some(&dir), &reference_selection(), true, false)
            .unwrap_err();
    assert!(err.to_string().contains("Column Name"));

    fs::remove_dir_all(&dir).unwrap();
}
