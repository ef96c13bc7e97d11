//! Database schema and connection management

use crate::{balldontlie::TeamStats, Result};
use rusqlite::Connection;
use std::path::Path;

/// Table written by the sqlite exporter.
pub const TEAM_STATS_TABLE: &str = "teams_stats";

/// Connection to an export database
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open (or create) the database file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// In-memory database, mainly for tests
    pub fn new_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Drop and recreate `teams_stats` with one column per TeamStats field.
    ///
    /// Takes the connection (or open transaction) to run on, so callers can
    /// make the swap part of a larger atomic write.
    pub(crate) fn recreate_team_stats_table(conn: &Connection) -> Result<()> {
        let [name, won_home, won_visitor, lost_home, lost_visitor] = TeamStats::COLUMNS;

        conn.execute(&format!("DROP TABLE IF EXISTS {}", TEAM_STATS_TABLE), [])?;

        conn.execute(
            &format!(
                "CREATE TABLE {} (
                    {} TEXT NOT NULL,
                    {} INTEGER NOT NULL,
                    {} INTEGER NOT NULL,
                    {} INTEGER NOT NULL,
                    {} INTEGER NOT NULL
                )",
                TEAM_STATS_TABLE, name, won_home, won_visitor, lost_home, lost_visitor
            ),
            [],
        )?;

        Ok(())
    }
}
