//! Subcommand handlers.

pub mod about;
pub mod config;
pub mod init;
pub mod list;
pub mod me;
pub mod menu;
pub mod open;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use sjphy::experiment::{self, Experiment};
use sjphy::prompt::{select, SelectStyle};
use sjphy::{Config, ProfileStore};

/// Project root plus the loaded configuration.
pub struct Workspace {
    pub root: PathBuf,
    pub config: Config,
}

impl Workspace {
    /// Load the config and resolve the project root (current directory by default).
    pub fn open(root: Option<PathBuf>) -> Result<Self> {
        let root = match root {
            Some(root) => root,
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        let config = Config::load()?;
        tracing::debug!(root = %root.display(), "workspace opened");
        Ok(Self { root, config })
    }

    pub fn experiments_dir(&self) -> PathBuf {
        self.root.join(&self.config.experiments.dir)
    }

    pub fn experiments(&self) -> Result<Vec<Experiment>> {
        Ok(experiment::discover(&self.experiments_dir(), &self.config.experiments)?)
    }

    pub fn profile(&self) -> ProfileStore {
        ProfileStore::new(self.root.join(&self.config.profile.file))
    }

    pub fn panel_width(&self) -> usize {
        self.config.ui.panel_width
    }

    /// Find an experiment by query, or let the user pick one.
    pub fn pick_experiment(&self, query: Option<&str>, prompt: &str) -> Result<Experiment> {
        let experiments = self.experiments()?;
        if let Some(query) = query {
            return Ok(experiment::resolve(&experiments, query)?.clone());
        }
        if experiments.is_empty() {
            anyhow::bail!("No experiments found in {}", self.experiments_dir().display());
        }
        let names: Vec<&str> = experiments.iter().map(|e| e.name.as_str()).collect();
        let index = select(prompt, &names, 0, SelectStyle::List)?;
        Ok(experiments[index].clone())
    }
}

/// Display path relative to the workspace root when possible.
pub fn relative<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
