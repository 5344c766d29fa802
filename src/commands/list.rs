//! List command handler

use anyhow::Result;

use sjphy::current_theme;

use super::{relative, Workspace};

pub fn handle(workspace: &Workspace) -> Result<()> {
    let theme = current_theme();
    let experiments = workspace.experiments()?;

    if experiments.is_empty() {
        println!(
            "{}",
            theme.secondary_text(&format!(
                "No experiments found in {}",
                workspace.experiments_dir().display()
            ))
        );
        return Ok(());
    }

    for (i, exp) in experiments.iter().enumerate() {
        let status = if exp.has_data() {
            theme.success_text(&format!(
                "✓ {}",
                relative(&exp.dir, &exp.data_file).display()
            ))
        } else {
            theme.secondary_text("no data")
        };
        println!("{:>3}. {}  {}", i + 1, theme.accent_text(&exp.name), status);
    }
    Ok(())
}
