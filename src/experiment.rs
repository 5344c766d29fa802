//! Experiment discovery and notebook prompt extraction.
//!
//! An experiment is a directory under the experiments root holding a
//! notebook. One of the notebook's cells carries the prompt that is handed
//! to a multimodal AI model together with a photo of the lab report; the
//! model answers with a YAML block that becomes the experiment's data file.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::ExperimentsConfig;

/// Errors from experiment lookup and file access.
#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    #[error("Experiments directory not found: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("No experiment matches '{0}'")]
    NotFound(String),

    #[error("'{query}' matches several experiments: {}", .candidates.join(", "))]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },

    #[error("Notebook {} is not valid JSON: {source}", .path.display())]
    Notebook {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Notebook {} has no prompt in cell {cell}", .path.display())]
    PromptCell { path: PathBuf, cell: usize },

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> ExperimentError + '_ {
    move |source| ExperimentError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// One experiment directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiment {
    /// Directory name, e.g. `实验2-5.非平衡电桥的应用`
    pub name: String,
    pub dir: PathBuf,
    pub notebook: PathBuf,
    pub data_file: PathBuf,
}

impl Experiment {
    fn new(dir: PathBuf, layout: &ExperimentsConfig) -> Option<Self> {
        let name = dir.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            name,
            notebook: dir.join(&layout.notebook),
            data_file: dir.join(&layout.data_file),
            dir,
        })
    }

    /// Whether the data file has been written. An empty file (left by an
    /// interrupted `init`) does not count.
    pub fn has_data(&self) -> bool {
        fs::metadata(&self.data_file)
            .map(|m| m.is_file() && m.len() > 0)
            .unwrap_or(false)
    }

    /// The AI prompt stored in notebook cell `cell`.
    pub fn prompt(&self, cell: usize) -> Result<String, ExperimentError> {
        let raw = fs::read_to_string(&self.notebook).map_err(io_error(&self.notebook))?;
        extract_prompt(&raw, cell).map_err(|e| match e {
            PromptSource::Json(source) => ExperimentError::Notebook {
                path: self.notebook.clone(),
                source,
            },
            PromptSource::Missing => ExperimentError::PromptCell {
                path: self.notebook.clone(),
                cell,
            },
        })
    }

    /// Replace the data file's content.
    pub fn write_data(&self, content: &str) -> Result<(), ExperimentError> {
        fs::write(&self.data_file, content).map_err(io_error(&self.data_file))?;
        tracing::debug!(path = %self.data_file.display(), bytes = content.len(), "data written");
        Ok(())
    }
}

/// Why a prompt could not be taken from notebook JSON.
#[derive(Debug)]
pub enum PromptSource {
    Json(serde_json::Error),
    Missing,
}

/// Pull the source text of cell `cell` out of notebook JSON.
///
/// Cell sources are either a single string or a list of line strings.
pub fn extract_prompt(notebook_json: &str, cell: usize) -> Result<String, PromptSource> {
    let notebook: Value = serde_json::from_str(notebook_json).map_err(PromptSource::Json)?;
    let source = notebook
        .get("cells")
        .and_then(|cells| cells.get(cell))
        .and_then(|cell| cell.get("source"))
        .ok_or(PromptSource::Missing)?;

    match source {
        Value::String(text) => Ok(text.clone()),
        Value::Array(lines) => lines
            .iter()
            .map(|line| line.as_str().ok_or(PromptSource::Missing))
            .collect(),
        _ => Err(PromptSource::Missing),
    }
}

/// Every experiment directory under `root` that holds a notebook, by name.
pub fn discover(root: &Path, layout: &ExperimentsConfig) -> Result<Vec<Experiment>, ExperimentError> {
    if !root.is_dir() {
        return Err(ExperimentError::MissingRoot(root.to_path_buf()));
    }

    let mut experiments = Vec::new();
    for entry in fs::read_dir(root).map_err(io_error(root))? {
        let entry = entry.map_err(io_error(root))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        match Experiment::new(path, layout) {
            Some(exp) if exp.notebook.is_file() => experiments.push(exp),
            Some(exp) => tracing::debug!(dir = %exp.dir.display(), "skipping, no notebook"),
            None => {}
        }
    }

    experiments.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(count = experiments.len(), root = %root.display(), "experiments discovered");
    Ok(experiments)
}

/// Find one experiment by exact name, 1-based index, or unique substring.
pub fn resolve<'a>(experiments: &'a [Experiment], query: &str) -> Result<&'a Experiment, ExperimentError> {
    if let Some(exp) = experiments.iter().find(|e| e.name == query) {
        return Ok(exp);
    }

    if let Ok(n) = query.parse::<usize>() {
        if n >= 1 && n <= experiments.len() {
            return Ok(&experiments[n - 1]);
        }
    }

    let matches: Vec<&Experiment> = experiments
        .iter()
        .filter(|e| e.name.contains(query))
        .collect();
    match matches.as_slice() {
        [] => Err(ExperimentError::NotFound(query.to_string())),
        [one] => Ok(*one),
        many => Err(ExperimentError::Ambiguous {
            query: query.to_string(),
            candidates: many.iter().map(|e| e.name.clone()).collect(),
        }),
    }
}
