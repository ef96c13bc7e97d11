//! Basic database query operations

use super::schema::{StatsDatabase, TEAM_STATS_TABLE};
use crate::{balldontlie::TeamStats, Result};
use rusqlite::{params, Row};

/// One row of `teams_stats` as read back from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTeamStats {
    pub team_name: String,
    pub won_games_as_home_team: u32,
    pub won_games_as_visitor_team: u32,
    pub lost_games_as_home_team: u32,
    pub lost_games_as_visitor_team: u32,
}

impl StoredTeamStats {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            team_name: row.get(0)?,
            won_games_as_home_team: row.get(1)?,
            won_games_as_visitor_team: row.get(2)?,
            lost_games_as_home_team: row.get(3)?,
            lost_games_as_visitor_team: row.get(4)?,
        })
    }
}

impl From<&TeamStats> for StoredTeamStats {
    fn from(stats: &TeamStats) -> Self {
        Self {
            team_name: stats.team_name().to_string(),
            won_games_as_home_team: stats.won_games_as_home_team(),
            won_games_as_visitor_team: stats.won_games_as_visitor_team(),
            lost_games_as_home_team: stats.lost_games_as_home_team(),
            lost_games_as_visitor_team: stats.lost_games_as_visitor_team(),
        }
    }
}

impl StatsDatabase {
    /// Replace the whole `teams_stats` table with `stats`, in one transaction.
    ///
    /// Returns the number of rows written.
    pub fn replace_team_stats(&mut self, stats: &[TeamStats]) -> Result<usize> {
        let columns = TeamStats::COLUMNS.join(", ");
        let tx = self.conn.transaction()?;
        Self::recreate_team_stats_table(&tx)?;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO {} ({}) VALUES (?, ?, ?, ?, ?)",
                TEAM_STATS_TABLE, columns
            ))?;

            for team in stats {
                stmt.execute(params![
                    team.team_name(),
                    team.won_games_as_home_team(),
                    team.won_games_as_visitor_team(),
                    team.lost_games_as_home_team(),
                    team.lost_games_as_visitor_team(),
                ])?;
            }
        }
        tx.commit()?;

        Ok(stats.len())
    }

    /// All rows of `teams_stats` in insertion order
    pub fn load_team_stats(&self) -> Result<Vec<StoredTeamStats>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM {} ORDER BY rowid",
            TeamStats::COLUMNS.join(", "),
            TEAM_STATS_TABLE
        ))?;

        let rows = stmt
            .query_map([], StoredTeamStats::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }
}
