//! Open command handler

use anyhow::Result;

use sjphy::current_theme;
use sjphy::notebook::JupyterLauncher;

use super::{relative, Workspace};

pub fn handle(workspace: &Workspace, experiment: Option<&str>) -> Result<()> {
    let exp = workspace.pick_experiment(experiment, "Open which experiment?")?;
    open_notebook(workspace, &exp.notebook)
}

/// Launch Jupyter for `notebook` and wait for it to exit.
pub fn open_notebook(workspace: &Workspace, notebook: &std::path::Path) -> Result<()> {
    let theme = current_theme();
    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {}",
            relative(&workspace.root, notebook).display()
        ))
    );
    JupyterLauncher::from_config(&workspace.config.jupyter).launch(notebook)?;
    Ok(())
}
