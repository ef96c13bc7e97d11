//! Unit tests for storage functionality

use super::*;
use crate::{balldontlie::TeamStats, export::fixtures::sample_stats};
use tempfile::tempdir;

#[test]
fn test_replace_team_stats_round_trip() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let stats = sample_stats();

    let written = db.replace_team_stats(&stats).unwrap();
    assert_eq!(written, 2);

    let rows = db.load_team_stats().unwrap();
    let expected: Vec<StoredTeamStats> = stats.iter().map(StoredTeamStats::from).collect();
    assert_eq!(rows, expected);
    assert_eq!(rows[0].team_name, "Boston Celtics (BOS)");
    assert_eq!(rows[0].won_games_as_visitor_team, 1);
}

#[test]
fn test_replace_drops_previous_run() {
    let mut db = StatsDatabase::new_in_memory().unwrap();

    db.replace_team_stats(&sample_stats()).unwrap();
    db.replace_team_stats(&sample_stats()[..1]).unwrap();

    assert_eq!(db.load_team_stats().unwrap().len(), 1);
}

#[test]
fn test_uncommitted_recreate_keeps_previous_rows() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    db.replace_team_stats(&sample_stats()).unwrap();

    {
        let tx = db.conn.transaction().unwrap();
        StatsDatabase::recreate_team_stats_table(&tx).unwrap();
        // dropped without commit
    }

    let rows = db.load_team_stats().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].team_name, "Los Angeles Lakers (LAL)");
}

#[test]
fn test_replace_with_empty_stats_leaves_empty_table() {
    let mut db = StatsDatabase::new_in_memory().unwrap();

    assert_eq!(db.replace_team_stats(&[]).unwrap(), 0);
    assert!(db.load_team_stats().unwrap().is_empty());
}

#[test]
fn test_table_columns_match_field_names() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    db.replace_team_stats(&sample_stats()).unwrap();

    let mut stmt = db
        .conn
        .prepare(&format!("PRAGMA table_info({})", TEAM_STATS_TABLE))
        .unwrap();
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();

    assert_eq!(columns, TeamStats::COLUMNS.to_vec());
}

#[test]
fn test_open_creates_file_and_parent_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("output.sqlite");

    let mut db = StatsDatabase::open(&path).unwrap();
    db.replace_team_stats(&sample_stats()).unwrap();
    drop(db);

    assert!(path.exists());
    let reopened = StatsDatabase::open(&path).unwrap();
    assert_eq!(reopened.load_team_stats().unwrap().len(), 2);
}
