//! Output format selection for exported season statistics.

use crate::error::NbaError;
use std::fmt;
use std::str::FromStr;

/// Where `teams-stats` sends its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-delimited text with a humanized header row
    Csv,
    /// Pretty-printed JSON array
    Json,
    /// `teams_stats` table in a SQLite file
    Sqlite,
    /// Human-readable lines on the console
    #[default]
    Stdout,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Sqlite => "sqlite",
            OutputFormat::Stdout => "stdout",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for OutputFormat {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "sqlite" => Ok(OutputFormat::Sqlite),
            "stdout" => Ok(OutputFormat::Stdout),
            _ => Err(NbaError::InvalidOutputFormat {
                format: s.to_string(),
            }),
        }
    }
}
