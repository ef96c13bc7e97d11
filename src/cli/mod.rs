//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{OutputFormat, Season};

#[derive(Debug, Parser)]
#[clap(name = "nba-stats", about = "NBA statistics from the balldontlie API")]
pub struct NbaCli {
    /// API base URI (or set `NBA_API_URI` env var).
    #[clap(long, global = true)]
    pub api_uri: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Display all teams grouped by division
    GroupedTeams,

    /// Get the heaviest and tallest player with a specific name
    PlayersStats {
        /// Player name (substring search).
        #[clap(long, short)]
        name: String,
    },

    /// Get win/loss statistics per team for a season
    TeamsStats {
        /// Season year (e.g. 2019 for 2019-20).
        #[clap(long, short)]
        season: Season,

        /// Output format.
        #[clap(long, short, value_enum, default_value_t = OutputFormat::default())]
        output: OutputFormat,

        /// Directory that receives output.csv / output.json / output.sqlite.
        #[clap(long, default_value = ".")]
        out_dir: PathBuf,
    },
}
