//! Command implementations for the NBA stats CLI

pub mod grouped_teams;
pub mod players_stats;
pub mod teams_stats;
