//! SQLite export into a freshly recreated `teams_stats` table.

use std::path::Path;

use crate::{balldontlie::TeamStats, storage::StatsDatabase, Result};

pub fn write_sqlite(stats: &[TeamStats], path: &Path) -> Result<()> {
    let mut db = StatsDatabase::open(path)?;
    db.replace_team_stats(stats)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures::sample_stats;
    use tempfile::tempdir;

    #[test]
    fn test_write_sqlite_replaces_previous_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.sqlite");

        write_sqlite(&sample_stats(), &path).unwrap();
        write_sqlite(&sample_stats(), &path).unwrap();

        let rows = StatsDatabase::open(&path).unwrap().load_team_stats().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].team_name, "Boston Celtics (BOS)");
        assert_eq!(rows[1].lost_games_as_visitor_team, 1);
    }
}
