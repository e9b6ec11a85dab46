//! Build subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BREAD: &str = "# Toasted Bread\n\nCrunchy.\n\n## Toast\n\n- Bread, 2 slices\n\nToast it.";
const PIE: &str = "# Apple Pie\n\nTart and sweet.\n\n## Bake\n\nBake it.";

fn site_dirs() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let recipes = temp.path().join("recipes");
    let output = temp.path().join("out");
    fs::create_dir_all(&recipes).unwrap();
    (temp, recipes, output)
}

#[test]
fn test_build_writes_all_pages() {
    let (temp, recipes, output) = site_dirs();
    fs::write(recipes.join("Toasted Bread.txt"), BREAD).unwrap();
    fs::write(recipes.join("Apple Pie.txt"), PIE).unwrap();

    cargo_bin_cmd!("hearth")
        .current_dir(temp.path())
        .args(["build", "--recipes"])
        .arg(&recipes)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 recipe page(s)"));

    assert!(output.join("toasted-bread.html").is_file());
    assert!(output.join("apple-pie.html").is_file());
    assert!(output.join("index.html").is_file());
    assert!(output.join("all.html").is_file());

    // The text copy is the source, verbatim.
    assert_eq!(fs::read_to_string(output.join("toasted-bread.txt")).unwrap(), BREAD);
}

#[test]
fn test_build_skips_malformed_documents() {
    let (temp, recipes, output) = site_dirs();
    fs::write(recipes.join("Toasted Bread.txt"), BREAD).unwrap();
    fs::write(recipes.join("Apple Pie.txt"), PIE).unwrap();
    fs::write(recipes.join("Broken.txt"), "# Title only\n").unwrap();

    cargo_bin_cmd!("hearth")
        .current_dir(temp.path())
        .args(["build", "--recipes"])
        .arg(&recipes)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 recipe page(s)"))
        .stdout(predicate::str::contains("Skipped 1 document(s)"))
        .stderr(predicate::str::contains("Broken.txt"));

    // The malformed document contributes nothing, anywhere.
    assert!(!output.join("broken.html").exists());
    let index = fs::read_to_string(output.join("index.html")).unwrap();
    assert!(index.contains("Toasted Bread"));
    assert!(index.contains("Apple Pie"));
    assert!(!index.contains("Broken"));
}

#[test]
fn test_build_index_is_sorted_case_insensitively() {
    let (temp, recipes, output) = site_dirs();
    fs::write(
        recipes.join("banana.txt"),
        "# banana bread\n\nSweet.\n\n## Bake\n\nBake it.",
    )
    .unwrap();
    fs::write(recipes.join("pie.txt"), PIE).unwrap();

    cargo_bin_cmd!("hearth")
        .current_dir(temp.path())
        .args(["build", "--recipes"])
        .arg(&recipes)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let index = fs::read_to_string(output.join("index.html")).unwrap();
    let apple = index.find("Apple Pie").unwrap();
    let banana = index.find("banana bread").unwrap();
    assert!(apple < banana);
}

#[test]
fn test_build_copies_resources() {
    let (temp, recipes, output) = site_dirs();
    fs::write(recipes.join("pie.txt"), PIE).unwrap();
    let resources = temp.path().join("resources");
    fs::create_dir_all(resources.join("fonts")).unwrap();
    fs::write(resources.join("style.css"), "body { margin: 2rem; }").unwrap();
    fs::write(resources.join("fonts").join("serif.woff2"), "@").unwrap();

    cargo_bin_cmd!("hearth")
        .current_dir(temp.path())
        .args(["build", "--recipes"])
        .arg(&recipes)
        .arg("--output")
        .arg(&output)
        .arg("--resources")
        .arg(&resources)
        .assert()
        .success();

    assert!(output.join("style.css").is_file());
    assert!(output.join("fonts").join("serif.woff2").is_file());
}

#[test]
fn test_build_missing_recipes_dir_fails() {
    let temp = TempDir::new().unwrap();

    cargo_bin_cmd!("hearth")
        .current_dir(temp.path())
        .args(["build", "--recipes", "does-not-exist"])
        .assert()
        .failure();
}

#[test]
fn test_build_reads_config_file() {
    let (temp, recipes, _) = site_dirs();
    fs::write(recipes.join("pie.txt"), PIE).unwrap();
    fs::write(
        temp.path().join("hearth.toml"),
        "recipes_dir = \"recipes\"\noutput_dir = \"site\"\nsite_title = \"Test Kitchen\"",
    )
    .unwrap();

    cargo_bin_cmd!("hearth")
        .current_dir(temp.path())
        .arg("build")
        .assert()
        .success();

    let index = fs::read_to_string(temp.path().join("site").join("index.html")).unwrap();
    assert!(index.contains("Test Kitchen"));
}
