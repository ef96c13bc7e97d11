//! Storage layer for the NBA stats CLI
//!
//! Thin wrapper over the SQLite file produced by `teams-stats --output sqlite`:
//! - `schema`: Database connection and schema management
//! - `queries`: Writing and reading the `teams_stats` table

pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use queries::StoredTeamStats;
pub use schema::{StatsDatabase, TEAM_STATS_TABLE};
