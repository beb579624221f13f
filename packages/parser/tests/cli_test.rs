//! End-to-end tests for the `kodeks-parser` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn kodeks_parser() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kodeks-parser"));
    cmd.env_remove("KODEKS_TITLE_DELIMITER")
        .env_remove("KODEKS_SQL_STYLE")
        .env_remove("KODEKS_CODE_NAME")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_parse_writes_all_outputs() {
    let out = tempdir().unwrap();

    kodeks_parser()
        .arg("parse")
        .arg(fixture("civil_code.txt"))
        .arg("--output")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Articles: 5"))
        .stdout(predicate::str::contains("Warnings: 1"));

    for name in [
        "civil_code.json",
        "civil_code.sql",
        "civil_code.yaml",
        "civil_code.xlsx",
        "civil_code_parts.csv",
        "civil_code_subClauses.csv",
    ] {
        assert!(out.path().join(name).exists(), "missing {name}");
    }
}

#[test]
fn test_parse_scoped_sql() {
    let out = tempdir().unwrap();

    kodeks_parser()
        .arg("parse")
        .arg(fixture("civil_code.txt"))
        .args(["-o"])
        .arg(out.path())
        .args(["--sql-style", "scoped", "--code-name", "Гражданский кодекс"])
        .assert()
        .success();

    let sql = fs::read_to_string(out.path().join("civil_code.sql")).unwrap();
    assert!(sql.contains("DELETE FROM SubClauses;"));
    assert!(sql.contains("INSERT INTO Codes (Name) VALUES (N'Гражданский кодекс');"));
}

#[test]
fn test_tree_prints_hierarchy() {
    kodeks_parser()
        .arg("tree")
        .arg(fixture("civil_code.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Part 1. Общая часть / Жалпы бөлім"))
        .stdout(predicate::str::contains("\n  Article 1. Отношения"));
}

#[test]
fn test_unsupported_extension_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("kodeks.docx");
    fs::write(&path, "ЧАСТЬ 1. Общая").unwrap();

    kodeks_parser()
        .arg("tree")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Unsupported document format"));
}

#[test]
fn test_invalid_delimiter_fails() {
    kodeks_parser()
        .arg("tree")
        .arg(fixture("civil_code.txt"))
        .args(["--title-delimiter", "dash"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'dash'"))
        .stderr(predicate::str::contains("slash"));
}

#[test]
fn test_help_lists_choices() {
    kodeks_parser()
        .args(["parse", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("possible values: slash, parenthesis"))
        .stdout(predicate::str::contains("possible values: flat, scoped"));
}

#[test]
fn test_invalid_env_delimiter_fails() {
    kodeks_parser()
        .env("KODEKS_TITLE_DELIMITER", "dash")
        .arg("tree")
        .arg(fixture("civil_code.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid title delimiter"));
}
