//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can generate man pages from it.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sjphy")]
#[command(author, version, about = "Launcher for SJTU physics experiment notebooks")]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("SJPHY_BUILD_DATE"), ")"))]
#[command(long_about = "SJPHY copies experiment prompts for a multimodal AI model to the \
clipboard, collects the returned data block into the experiment's data file, and opens the \
analysis notebook in Jupyter.\n\nRun without a command for the interactive menu.")]
pub struct Cli {
    /// Project root holding the experiments directory and me.yaml
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive main menu (default)
    Menu,

    /// Show the SJPHY banner
    About,

    /// List experiments and whether their data file exists
    List,

    /// Copy an experiment's prompt and write its data file
    #[command(long_about = "Copy the experiment's AI prompt to the clipboard, then paste the \
code block the model answers with. The pasted text is written to the experiment's data file.\n\n\
End the paste with Ctrl-D.")]
    Init(InitArgs),

    /// Open an experiment notebook in Jupyter
    Open(OpenArgs),

    /// Student profile (me.yaml)
    #[command(subcommand)]
    Me(MeCommand),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Experiment name, 1-based number, or unique part of the name
    pub experiment: Option<String>,

    /// Overwrite an existing data file without asking
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug, Default)]
pub struct OpenArgs {
    /// Experiment name, 1-based number, or unique part of the name
    pub experiment: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum MeCommand {
    /// Print the stored profile
    Show,
    /// Enter name and student ID interactively
    Set,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Open configuration file in $EDITOR
    Edit,
}
