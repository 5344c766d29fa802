//! Development tasks for SJPHY.
//!
//! Run with `cargo run -p xtask -- <task>`.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask", about = "SJPHY development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for sjphy and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man_pages(&out),
    }
}

fn generate_man_pages(out: &PathBuf) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;

    let cmd = sjphy::cli::Cli::command();
    let root = clap_mangen::Man::new(cmd.clone());
    let mut buf = Vec::new();
    root.render(&mut buf)?;
    fs::write(out.join("sjphy.1"), buf)?;

    for sub in cmd.get_subcommands() {
        let name = format!("sjphy-{}", sub.get_name());
        let page = clap_mangen::Man::new(sub.clone());
        let mut buf = Vec::new();
        page.render(&mut buf)?;
        fs::write(out.join(format!("{}.1", name)), buf)?;
    }

    println!("Man pages written to {}", out.display());
    Ok(())
}
