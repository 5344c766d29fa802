//! Opening experiment notebooks in Jupyter.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::config::JupyterConfig;

#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    #[error("'{0}' not found. Install Jupyter (pip install notebook) or set [jupyter] command in the config")]
    NotInstalled(String),

    #[error("{command} exited with {status}")]
    Failed { command: String, status: ExitStatus },

    #[error("Failed to run {command}: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Runs `<command> <args...> <notebook>` from the notebook's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JupyterLauncher {
    command: String,
    args: Vec<String>,
}

impl JupyterLauncher {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn from_config(config: &JupyterConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }

    /// Build the command without running it.
    ///
    /// The notebook is passed by file name and the working directory is its
    /// parent, so relative paths inside the notebook (e.g. `data.yaml`)
    /// resolve against the experiment directory.
    pub fn command(&self, notebook: &Path) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args);
        match (notebook.parent(), notebook.file_name()) {
            (Some(dir), Some(file)) if !dir.as_os_str().is_empty() => {
                cmd.current_dir(dir).arg(file);
            }
            _ => {
                cmd.arg(notebook);
            }
        }
        cmd
    }

    /// Start Jupyter and wait until the user shuts it down.
    pub fn launch(&self, notebook: &Path) -> Result<(), NotebookError> {
        tracing::debug!(command = %self.command, notebook = %notebook.display(), "launching notebook");
        let status = self
            .command(notebook)
            .status()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => NotebookError::NotInstalled(self.command.clone()),
                _ => NotebookError::Io {
                    command: self.command.clone(),
                    source,
                },
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(NotebookError::Failed {
                command: self.command.clone(),
                status,
            })
        }
    }
}
