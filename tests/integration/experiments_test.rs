//! Integration tests for `sjphy list` and `sjphy init`

use predicates::prelude::*;
use std::fs;

use crate::helpers::{Project, PROMPT_LINES};

const DATA: &str = "voltage: [1.2, 1.4, 1.6]\nresistance: 100\n";

#[test]
fn list_numbers_experiments_and_data_status() {
    let project = Project::new();
    let bridge = project.add_experiment("实验2-5.非平衡电桥的应用");
    project.add_experiment("实验1-1.示波器");
    fs::write(bridge.join("data.yaml"), DATA).unwrap();
    fs::create_dir_all(project.experiments_dir().join("notes")).unwrap();

    let output = project.sjphy().arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2, "{}", stdout);
    assert!(lines[0].contains("1. 实验1-1.示波器"));
    assert!(lines[0].contains("no data"));
    assert!(lines[1].contains("2. 实验2-5.非平衡电桥的应用"));
    assert!(lines[1].contains("✓ data.yaml"));
}

#[test]
fn list_without_experiments_dir_fails() {
    let project = Project::new();
    fs::remove_dir(project.experiments_dir()).unwrap();
    project
        .sjphy()
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Experiments directory not found"));
}

#[test]
fn init_prints_prompt_and_writes_pasted_data() {
    let project = Project::new();
    let dir = project.add_experiment("bridge");

    let output = project
        .sjphy()
        .args(["init", "bridge"])
        .write_stdin(DATA)
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    // No clipboard tool on PATH, so the prompt is printed instead
    assert!(stdout.contains(&PROMPT_LINES.concat()));
    assert!(stdout.contains("https://aistudio.google.com"));
    assert!(stdout.contains("✓ data.yaml written"));
    assert!(stdout.contains("Open main.ipynb and run all cells."));
    assert_eq!(fs::read_to_string(dir.join("data.yaml")).unwrap(), DATA);
}

#[test]
fn init_by_number_and_substring() {
    let project = Project::new();
    project.add_experiment("a-optics");
    let bridge = project.add_experiment("b-bridge");

    project
        .sjphy()
        .args(["init", "2"])
        .write_stdin("x: 1\n")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(bridge.join("data.yaml")).unwrap(), "x: 1\n");

    project
        .sjphy()
        .args(["init", "--force", "bri"])
        .write_stdin("x: 2\n")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(bridge.join("data.yaml")).unwrap(), "x: 2\n");
}

#[test]
fn init_warns_on_invalid_yaml_but_keeps_it() {
    let project = Project::new();
    let dir = project.add_experiment("bridge");

    let output = project
        .sjphy()
        .args(["init", "bridge"])
        .write_stdin("key: [unclosed\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("is not valid YAML"));
    assert_eq!(
        fs::read_to_string(dir.join("data.yaml")).unwrap(),
        "key: [unclosed\n"
    );
}

#[test]
fn init_existing_data_needs_terminal_or_force() {
    let project = Project::new();
    let dir = project.add_experiment("bridge");
    fs::write(dir.join("data.yaml"), DATA).unwrap();

    project
        .sjphy()
        .args(["init", "bridge"])
        .write_stdin("other: 1\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a terminal"));
    // Untouched when the question could not be asked
    assert_eq!(fs::read_to_string(dir.join("data.yaml")).unwrap(), DATA);

    project
        .sjphy()
        .args(["init", "bridge", "--force"])
        .write_stdin("other: 1\n")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(dir.join("data.yaml")).unwrap(), "other: 1\n");
}

#[test]
fn init_ambiguous_query_lists_candidates() {
    let project = Project::new();
    project.add_experiment("bridge-dc");
    project.add_experiment("bridge-ac");

    project
        .sjphy()
        .args(["init", "bridge"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bridge-ac, bridge-dc"));
}

#[test]
fn init_with_broken_notebook_keeps_existing_data() {
    let project = Project::new();
    let dir = project.add_experiment("bridge");
    fs::write(dir.join("main.ipynb"), r#"{"cells": []}"#).unwrap();
    fs::write(dir.join("data.yaml"), DATA).unwrap();

    project
        .sjphy()
        .args(["init", "bridge", "--force"])
        .write_stdin("other: 1\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("has no prompt in cell 1"));
    assert_eq!(fs::read_to_string(dir.join("data.yaml")).unwrap(), DATA);
}

#[test]
fn empty_data_file_is_listed_as_no_data() {
    let project = Project::new();
    let dir = project.add_experiment("bridge");
    fs::write(dir.join("data.yaml"), "").unwrap();

    project
        .sjphy()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("no data"))
        .stdout(predicate::str::contains("✓").not());
}
