//! Shared fixtures: a throwaway project root and config directory.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PROMPT_LINES: &[&str] = &[
    "Read the attached lab report photo.\n",
    "Answer with one YAML code block.",
];

/// Notebook with a markdown title cell and the prompt in cell 1.
pub fn notebook_json() -> String {
    serde_json::json!({
        "cells": [
            {"cell_type": "markdown", "metadata": {}, "source": ["# Bridge"]},
            {"cell_type": "markdown", "metadata": {}, "source": PROMPT_LINES},
            {"cell_type": "code", "metadata": {}, "outputs": [], "source": ["import yaml"]}
        ],
        "metadata": {},
        "nbformat": 4,
        "nbformat_minor": 5
    })
    .to_string()
}

pub struct Project {
    root: TempDir,
    home: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let project = Self {
            root: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        };
        fs::create_dir_all(project.experiments_dir()).unwrap();
        project
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn experiments_dir(&self) -> PathBuf {
        self.root.path().join("experiments")
    }

    /// Add an experiment directory with a notebook.
    pub fn add_experiment(&self, name: &str) -> PathBuf {
        let dir = self.experiments_dir().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("main.ipynb"), notebook_json()).unwrap();
        dir
    }

    pub fn write_profile(&self, content: &str) {
        fs::write(self.root.path().join("me.yaml"), content).unwrap();
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.path().join("sjphy").join("config.toml")
    }

    /// `sjphy --root <tmp>` with colours off, no clipboard tools on PATH
    /// and the config directory redirected into the fixture.
    pub fn sjphy(&self) -> Command {
        let mut cmd = Command::cargo_bin("sjphy").unwrap();
        cmd.arg("--root")
            .arg(self.root.path())
            .env("NO_COLOR", "1")
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path())
            .env("PATH", "")
            .env_remove("WAYLAND_DISPLAY")
            .env_remove("SJPHY_LOG");
        cmd
    }
}
