//! Integration tests for top-level CLI behavior

use predicates::prelude::*;

use crate::helpers::Project;

#[test]
fn help_lists_commands() {
    Project::new()
        .sjphy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("open"))
        .stdout(predicate::str::contains("--root"));
}

#[test]
fn version_flag() {
    Project::new()
        .sjphy()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sjphy "));
}

#[test]
fn unknown_command_is_usage_error() {
    Project::new()
        .sjphy()
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn about_prints_plain_banner() {
    let output = Project::new().sjphy().arg("about").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("End-to-end physics experiment calculator"));
    assert!(stdout.contains("About SJPHY"));
    assert!(!stdout.contains('\x1b'), "NO_COLOR output must be plain");
}

#[test]
fn completions_for_bash() {
    Project::new()
        .sjphy()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_sjphy"));
}

#[test]
fn menu_without_terminal_fails_cleanly() {
    let project = Project::new();
    project.write_profile("student_id: 123456789012\nstudent_name: Ada\n");
    project
        .sjphy()
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Standard input is not a terminal"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_show_prints_defaults() {
    let project = Project::new();
    project
        .sjphy()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not created yet"))
        .stdout(predicate::str::contains("notebook = \"main.ipynb\""))
        .stdout(predicate::str::contains("panel_width = 60"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_file_overrides_layout() {
    let project = Project::new();
    let config = project.config_file();
    std::fs::create_dir_all(config.parent().unwrap()).unwrap();
    std::fs::write(&config, "[experiments]\nnotebook = \"analysis.ipynb\"\n").unwrap();

    let dir = project.experiments_dir().join("optics");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("analysis.ipynb"), crate::helpers::notebook_json()).unwrap();
    project.add_experiment("bridge");

    let output = project.sjphy().arg("list").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("optics"));
    assert!(!stdout.contains("bridge"), "bridge has no analysis.ipynb: {}", stdout);
}
