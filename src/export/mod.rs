//! Writers for season statistics.
//!
//! Each format consumes the aggregated [`TeamStats`] list unchanged; file
//! formats land in a caller-chosen directory under a fixed name.

pub mod delimited;
pub mod json;
pub mod sqlite;
pub mod stdout;

#[cfg(test)]
pub(crate) mod fixtures;

use std::path::{Path, PathBuf};

use log::info;

use crate::{balldontlie::TeamStats, cli::types::OutputFormat, Result};

pub const CSV_FILE: &str = "output.csv";
pub const JSON_FILE: &str = "output.json";
pub const SQLITE_FILE: &str = "output.sqlite";

type FileWriter = fn(&[TeamStats], &Path) -> Result<()>;

/// Write `stats` in `format`. Returns the file written, or `None` for stdout.
pub fn write_stats(
    stats: &[TeamStats],
    format: OutputFormat,
    out_dir: &Path,
) -> Result<Option<PathBuf>> {
    let (file_name, write): (&str, FileWriter) = match format {
        OutputFormat::Csv => (CSV_FILE, delimited::write_csv),
        OutputFormat::Json => (JSON_FILE, json::write_json),
        OutputFormat::Sqlite => (SQLITE_FILE, sqlite::write_sqlite),
        OutputFormat::Stdout => {
            stdout::write_stdout(stats, &mut std::io::stdout().lock())?;
            return Ok(None);
        }
    };

    let path = out_dir.join(file_name);
    write(stats, &path)?;

    info!("Wrote {} team rows to {}", stats.len(), path.display());
    Ok(Some(path))
}

/// `won_games_as_home_team` -> `Won Games As Home Team`
pub fn humanize(column: &str) -> String {
    column
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("team_name"), "Team Name");
        assert_eq!(humanize("won_games_as_home_team"), "Won Games As Home Team");
        assert_eq!(humanize("plain"), "Plain");
    }

    #[test]
    fn test_write_stats_file_formats_use_fixed_names() {
        let dir = tempdir().unwrap();

        for (format, name) in [
            (OutputFormat::Csv, "output.csv"),
            (OutputFormat::Json, "output.json"),
            (OutputFormat::Sqlite, "output.sqlite"),
        ] {
            let path = write_stats(&[], format, dir.path()).unwrap().unwrap();
            assert_eq!(path, dir.path().join(name));
            assert!(path.exists());
        }
    }

    #[test]
    fn test_write_stats_stdout_writes_no_file() {
        let dir = tempdir().unwrap();

        let path = write_stats(&[], OutputFormat::Stdout, dir.path()).unwrap();

        assert!(path.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
