//! Init command handler
//!
//! Copies the experiment's AI prompt, collects the model's YAML answer and
//! writes it to the data file.

use anyhow::Result;
use std::io;

use sjphy::clipboard::{ClipboardError, Copy};
use sjphy::prompt::{panel_select, read_until_eof};
use sjphy::{current_theme, Experiment};

use super::{open, relative, Workspace};

const AI_SERVICES: &[(&str, &str)] = &[
    ("Google Gemini", "https://aistudio.google.com"),
    ("Deepseek", "https://chat.deepseek.com/"),
];

pub fn handle(workspace: &Workspace, experiment: Option<&str>, force: bool) -> Result<()> {
    let exp = workspace.pick_experiment(experiment, "Initialize which experiment?")?;
    let theme = current_theme();
    let data_name = relative(&exp.dir, &exp.data_file).display().to_string();

    // Read the prompt first so a broken notebook leaves existing data alone
    let prompt = exp.prompt(workspace.config.experiments.prompt_cell)?;

    if exp.has_data() && !force {
        let question = format!("⚠ {} already exists. Overwrite it?", data_name);
        if panel_select(&question, &["y", "n"], 0, workspace.panel_width())? == 1 {
            return Ok(());
        }
    }
    exp.write_data("")?;

    println!();
    println!("{}", theme.success_text(&format!("── Creating {} ──", data_name)));
    println!();

    hand_over_prompt(&prompt);

    println!("Paste the model's code block below, then press Ctrl-D to finish.");
    for (name, url) in AI_SERVICES {
        println!("- {}: {}", name, theme.accent_text(url));
    }
    println!();
    println!("{}", theme.primary_text("Paste the code block content:"));

    let data = read_until_eof(&mut io::stdin().lock())?;
    exp.write_data(&data)?;

    println!();
    if let Err(e) = serde_yaml::from_str::<serde_yaml::Value>(&data) {
        tracing::warn!(error = %e, "pasted data is not valid YAML");
        println!(
            "{}",
            theme.error_text(&format!(
                "⚠ {} was written but is not valid YAML ({}). Check the pasted text.",
                data_name, e
            ))
        );
    } else {
        println!("{}", theme.success_text(&format!("✓ {} written", data_name)));
    }
    println!();

    offer_notebook(workspace, &exp)
}

/// Put the prompt on the clipboard, or print it when no tool works.
fn hand_over_prompt(prompt: &str) {
    let theme = current_theme();
    match Copy::new().text(prompt) {
        Ok(result) => {
            println!("{}", theme.success_text(&result.message("Prompt")));
            println!(
                "Give it to a multimodal AI model together with a photo of your lab report."
            );
        }
        Err(ClipboardError::Empty) => {
            println!("{}", theme.error_text("The notebook prompt cell is empty."));
        }
        Err(e @ ClipboardError::NoToolAvailable) => {
            tracing::warn!(error = %e, "printing prompt instead of copying");
            println!("{}", theme.error_text(&e.to_string()));
            println!(
                "Copy this prompt and give it to a multimodal AI model together with a photo of your lab report:"
            );
            println!();
            println!("{}", prompt);
        }
    }
    println!();
}

/// Offer to open the notebook; only asked on a terminal.
fn offer_notebook(workspace: &Workspace, exp: &Experiment) -> Result<()> {
    let theme = current_theme();
    let notebook_name = relative(&exp.dir, &exp.notebook).display().to_string();

    if !atty::is(atty::Stream::Stdin) {
        println!("Open {} and run all cells.", notebook_name);
        return Ok(());
    }

    let question = format!("Open {} now?", notebook_name);
    if panel_select(&question, &["y", "n"], 0, workspace.panel_width())? == 0 {
        open::open_notebook(workspace, &exp.notebook)
    } else {
        println!("{}", theme.secondary_text(&format!("Open {} and run all cells.", notebook_name)));
        Ok(())
    }
}
