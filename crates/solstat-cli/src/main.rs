mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::log::LogKind;

fn main() -> Result<()> {
    // Initialize logging; reports may go to stdout, so logs use stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("solstat=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load(&cli.config)?;
    debug!("Report config: {:?}", config);

    match cli.command {
        Command::Stats { source, sort } => commands::stats::run(&source, sort, config),
        Command::FullLog { source } => commands::log::run(&source, LogKind::Full, config),
        Command::SessionLog { source } => commands::log::run(&source, LogKind::Session, config),
    }
}
