//! Config subcommands handler

use anyhow::{Context, Result};

use sjphy::{current_theme, Config};

/// Show current configuration as TOML, with its location.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    let path = Config::config_path()?;
    let origin = if path.exists() {
        format!("# {}", path.display())
    } else {
        format!("# {} (not created yet, showing defaults)", path.display())
    };
    println!("{}", theme.secondary_text(&origin));
    println!("{}", theme.primary_text(&config.to_toml()?));
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    // Ensure config exists
    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;
    if !status.success() {
        anyhow::bail!("{} exited with {}", editor, status);
    }

    // Catch syntax errors while the user still remembers the edit
    Config::load()?;
    Ok(())
}
