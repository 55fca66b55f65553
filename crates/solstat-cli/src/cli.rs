use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use solstat_core::SortKey;

#[derive(Parser)]
#[command(name = "solstat")]
#[command(about = "Solitaire statistics and game log reports")]
#[command(version)]
pub struct Cli {
    /// Report configuration file
    #[arg(short, long, global = true, default_value = "solstat.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the statistics table of a player
    Stats {
        #[command(flatten)]
        source: ReportSource,

        /// Sort order: name, played, won, lost, time, moves or percent
        #[arg(short, long, value_parser = SortKey::parse)]
        sort: Option<SortKey>,
    },
    /// Write the log of every game a player has played
    FullLog {
        #[command(flatten)]
        source: ReportSource,
    },
    /// Write the log of the games played in the current session
    SessionLog {
        #[command(flatten)]
        source: ReportSource,
    },
}

/// Where report data comes from and where the report goes
#[derive(Args)]
pub struct ReportSource {
    /// Registry snapshot (JSON)
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Player name (demo player when omitted)
    #[arg(short, long)]
    pub player: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
