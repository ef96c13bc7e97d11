//! Error types for the NBA stats CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    /// Any failure while walking a paginated endpoint: transport, status,
    /// undecodable body or a broken `meta` block.
    #[error("Fetch from {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Malformed {kind} record: {source}")]
    MalformedRecord {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("SQLite export failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Invalid output format: {format}")]
    InvalidOutputFormat { format: String },
}

impl NbaError {
    pub(crate) fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        NbaError::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
