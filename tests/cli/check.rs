//! Check subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const GOOD: &str = "# Bread\n\nCrunchy.\n\n## Toast\n\nToast it.";

#[test]
fn test_check_clean_documents() {
    let temp = TempDir::new().unwrap();
    let recipes = temp.path().join("recipes");
    fs::create_dir_all(&recipes).unwrap();
    fs::write(recipes.join("bread.txt"), GOOD).unwrap();

    cargo_bin_cmd!("hearth")
        .current_dir(temp.path())
        .args(["check", "--recipes"])
        .arg(&recipes)
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 document(s) parsed cleanly"));
}

#[test]
fn test_check_fails_on_malformed_document() {
    let temp = TempDir::new().unwrap();
    let recipes = temp.path().join("recipes");
    fs::create_dir_all(&recipes).unwrap();
    fs::write(recipes.join("bread.txt"), GOOD).unwrap();
    fs::write(recipes.join("orphan.txt"), "# Soup\n\nWarm.\n\n- Water, 4 cups").unwrap();

    cargo_bin_cmd!("hearth")
        .current_dir(temp.path())
        .args(["check", "--recipes"])
        .arg(&recipes)
        .assert()
        .failure()
        .stderr(predicate::str::contains("orphan.txt"))
        .stderr(predicate::str::contains("ingredient list found before any section heading"))
        .stdout(predicate::str::contains("1 of 2 document(s) failed to parse"));
}

#[test]
fn test_check_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let recipes = temp.path().join("recipes");
    fs::create_dir_all(&recipes).unwrap();
    fs::write(recipes.join("bread.txt"), GOOD).unwrap();

    cargo_bin_cmd!("hearth")
        .current_dir(temp.path())
        .args(["check", "--recipes"])
        .arg(&recipes)
        .assert()
        .success();

    assert!(!temp.path().join("output").exists());
}
