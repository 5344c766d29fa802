//! Integration tests for `sjphy me`

use predicates::prelude::*;

use crate::helpers::Project;

#[test]
fn show_without_profile_fails() {
    Project::new()
        .sjphy()
        .args(["me", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Profile not found"))
        .stderr(predicate::str::contains("sjphy me set"));
}

#[test]
fn show_pads_student_id() {
    let project = Project::new();
    project.write_profile("student_name: Ada\nstudent_id: 12345678901\n");
    project
        .sjphy()
        .args(["me", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("012345678901"));
}

#[test]
fn set_retries_until_id_is_valid() {
    let project = Project::new();
    let output = project
        .sjphy()
        .args(["me", "set"])
        .write_stdin("  张三  \nabc\n1234\n523030910001\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Invalid input. Please try again.").count(), 2);
    assert!(stdout.contains("me.yaml saved"));

    let saved: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(project.root().join("me.yaml")).unwrap())
            .unwrap();
    assert_eq!(saved["student_name"].as_str(), Some("张三"));
    assert_eq!(saved["student_id"].as_u64(), Some(523030910001));
}

#[test]
fn set_with_closed_input_fails() {
    Project::new()
        .sjphy()
        .args(["me", "set"])
        .write_stdin("Ada\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input closed"));
}
