//! sjphy binary entry point.

mod commands;

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sjphy::cli::{Cli, Commands, ConfigCommand, MeCommand};
use sjphy::current_theme;

use commands::Workspace;

fn init_logging(verbose: bool) {
    let default = if verbose { "sjphy=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SJPHY_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Commands::Menu);

    // Commands that need neither the config nor the project root
    match command {
        Commands::About => return commands::about::handle(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "sjphy", &mut io::stdout());
            return Ok(());
        }
        Commands::Config(ConfigCommand::Show) => return commands::config::handle_show(),
        Commands::Config(ConfigCommand::Edit) => return commands::config::handle_edit(),
        _ => {}
    }

    let workspace = Workspace::open(cli.root)?;
    match command {
        Commands::Menu => commands::menu::handle(&workspace),
        Commands::List => commands::list::handle(&workspace),
        Commands::Init(args) => commands::init::handle(&workspace, args.experiment.as_deref(), args.force),
        Commands::Open(args) => commands::open::handle(&workspace, args.experiment.as_deref()),
        Commands::Me(MeCommand::Show) => commands::me::handle_show(&workspace),
        Commands::Me(MeCommand::Set) => commands::me::handle_set(&workspace),
        Commands::About | Commands::Completions { .. } | Commands::Config(_) => Ok(()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = sjphy::prompt::install_interrupt_handler() {
        tracing::warn!(error = %e, "could not install interrupt handler");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let theme = current_theme();
            eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}
