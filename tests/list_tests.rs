//! Integration tests for add and list commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::workjournal_cmd;

fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    workjournal_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

fn add(root: &Path, category: &str, date: &str, text: &str) {
    workjournal_cmd()
        .current_dir(root)
        .args(["add", "-c", category, "-d", date, text])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"));
}

fn list(root: &Path, extra: &[&str]) -> String {
    let output = workjournal_cmd()
        .current_dir(root)
        .arg("list")
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_list_no_entries() {
    let temp = init_journal();

    workjournal_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No entries found\n");
}

#[test]
fn test_add_and_list_groups_by_week() {
    let temp = init_journal();

    add(temp.path(), "work", "2024-01-01", "Planned sprint");
    add(temp.path(), "learning", "2024-01-03", "Read about traits");
    add(temp.path(), "work", "2024-01-08", "Released v2");

    let stdout = list(temp.path(), &[]);

    assert_eq!(
        stdout,
        "Week of December 31, 2023\n\
         \x20 Work\n\
         \x20   - Planned sprint\n\
         \x20 Learning\n\
         \x20   - Read about traits\n\
         \n\
         Week of January 7, 2024\n\
         \x20 Work\n\
         \x20   - Released v2\n"
    );
}

#[test]
fn test_list_with_date_range() {
    let temp = init_journal();

    add(temp.path(), "work", "2024-01-01", "early");
    add(temp.path(), "other", "2024-01-10", "middle");
    add(temp.path(), "learning", "2024-02-01", "late");

    let stdout = list(temp.path(), &["--from", "2024-01-05", "--to", "2024-01-31"]);

    assert!(stdout.contains("middle"));
    assert!(!stdout.contains("early"));
    assert!(!stdout.contains("late"));
}

#[test]
fn test_list_reversed_range_fails() {
    let temp = init_journal();

    workjournal_cmd()
        .current_dir(temp.path())
        .args(["list", "--from", "2024-02-01", "--to", "2024-01-01"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("date range"));
}

#[test]
fn test_add_joins_words_and_defaults_to_today() {
    let temp = init_journal();

    workjournal_cmd()
        .current_dir(temp.path())
        .args(["add", "-c", "Other", "picked", "up", "groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded other entry #1"));

    assert!(list(temp.path(), &[]).contains("    - picked up groceries\n"));
}

#[test]
fn test_add_blank_text_reports_missing_fields() {
    let temp = init_journal();

    workjournal_cmd()
        .current_dir(temp.path())
        .args(["add", "-c", "work", "-d", "2024-01-01", "   "])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Missing fields: text"));

    assert_eq!(list(temp.path(), &[]), "No entries found\n");
}

#[test]
fn test_add_invalid_category() {
    let temp = init_journal();

    workjournal_cmd()
        .current_dir(temp.path())
        .args(["add", "-c", "chores", "dishes"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("work, learning, other"));
}

#[test]
fn test_add_invalid_date() {
    let temp = init_journal();

    workjournal_cmd()
        .current_dir(temp.path())
        .args(["add", "-c", "work", "-d", "31-01-2024", "x"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}
