//! Skill tree reporting entry point.
//!
//! Binary name: `skilltree`
//!
//! Parses CLI arguments, loads settings and the skills document, builds the
//! graph once, then dispatches to the requested report.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only report lines.
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,skilltree=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "skilltree", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.config.as_deref(), cli.skills.as_deref())?;

    match cli.command {
        Commands::Children { name } => {
            cli::query::children(&state, &name, cli.json)?;
        }
        Commands::Tree { root } => {
            cli::query::tree(&state, &root, cli.json)?;
        }
        Commands::Rank { limit } => {
            cli::query::rank(&state, limit, cli.json)?;
        }
        Commands::Show { name } => {
            cli::query::show(&state, &name, cli.json)?;
        }
        Commands::Check => {
            cli::check::check(&state, cli.json)?;
        }
        Commands::Report => {
            cli::report::report(&state, cli.json)?;
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
