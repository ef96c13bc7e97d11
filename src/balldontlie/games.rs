//! Season game fetching and the per-team win/loss reduction.

use std::collections::HashMap;

use log::{info, trace};
use serde::Serialize;

use super::{
    http::ApiClient,
    types::{to_entities, to_game, Game, Team},
};
use crate::{
    cli::types::{Season, TeamId},
    Result,
};


/// Games per request for season queries (the API maximum).
pub const GAMES_PER_PAGE: u32 = 100;

/// Win/loss tallies for one team over one season.
///
/// Counters only move through [`SeasonAggregator`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamStats {
    team_name: String,
    won_games_as_home_team: u32,
    won_games_as_visitor_team: u32,
    lost_games_as_home_team: u32,
    lost_games_as_visitor_team: u32,
}

impl TeamStats {
    /// Field names in export order.
    pub const COLUMNS: [&'static str; 5] = [
        "team_name",
        "won_games_as_home_team",
        "won_games_as_visitor_team",
        "lost_games_as_home_team",
        "lost_games_as_visitor_team",
    ];

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn won_games_as_home_team(&self) -> u32 {
        self.won_games_as_home_team
    }

    pub fn won_games_as_visitor_team(&self) -> u32 {
        self.won_games_as_visitor_team
    }

    pub fn lost_games_as_home_team(&self) -> u32 {
        self.lost_games_as_home_team
    }

    pub fn lost_games_as_visitor_team(&self) -> u32 {
        self.lost_games_as_visitor_team
    }

    /// The four counters in [`TeamStats::COLUMNS`] order.
    pub fn counters(&self) -> [u32; 4] {
        [
            self.won_games_as_home_team,
            self.won_games_as_visitor_team,
            self.lost_games_as_home_team,
            self.lost_games_as_visitor_team,
        ]
    }
}

/// Streaming fold of games into one [`TeamStats`] per team id.
///
/// Results are ordered by when each team id was first seen.
#[derive(Debug, Default)]
pub struct SeasonAggregator {
    index: HashMap<TeamId, usize>,
    stats: Vec<TeamStats>,
}

impl SeasonAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one game. Ties touch no team and return `false`.
    pub fn add_game(&mut self, game: &Game) -> bool {
        if !game.is_decisive() {
            trace!("Skipping tied game {}", game.id);
            return false;
        }
        let (Some(winner), Some(loser)) = (game.winner(), game.loser()) else {
            return false;
        };

        if winner.id == game.home_team.id {
            self.entry(winner).won_games_as_home_team += 1;
        } else if winner.id == game.visitor_team.id {
            self.entry(winner).won_games_as_visitor_team += 1;
        }

        if loser.id == game.home_team.id {
            self.entry(loser).lost_games_as_home_team += 1;
        } else if loser.id == game.visitor_team.id {
            self.entry(loser).lost_games_as_visitor_team += 1;
        }

        true
    }

    /// Stats slot for `team`, created with its display name on first sight.
    fn entry(&mut self, team: &Team) -> &mut TeamStats {
        let stats = &mut self.stats;
        let slot = *self.index.entry(team.id).or_insert_with(|| {
            stats.push(TeamStats::default());
            stats.len() - 1
        });

        let entry = &mut self.stats[slot];
        if entry.team_name.is_empty() {
            entry.team_name = team.name_with_abbreviation();
        }
        entry
    }

    pub fn finish(self) -> Vec<TeamStats> {
        self.stats
    }
}

/// Reduce `games` into per-team stats; an empty or all-tied input gives an empty list.
pub fn aggregate<'a>(games: impl IntoIterator<Item = &'a Game>) -> Vec<TeamStats> {
    let mut aggregator = SeasonAggregator::new();
    for game in games {
        aggregator.add_game(game);
    }
    aggregator.finish()
}

pub async fn fetch_season_games(client: &ApiClient, season: Season) -> Result<Vec<Game>> {
    let params = vec![
        ("seasons[]".to_string(), season.to_string()),
        ("per_page".to_string(), GAMES_PER_PAGE.to_string()),
    ];
    let raw = client.fetch_all("games", params).await?;
    to_entities(raw, to_game)
}

pub async fn get_season_stats(client: &ApiClient, season: Season) -> Result<Vec<TeamStats>> {
    let games = fetch_season_games(client, season).await?;
    let stats = aggregate(&games);
    info!(
        "Season {}: {} games, {} teams with decisive results",
        season,
        games.len(),
        stats.len()
    );
    Ok(stats)
}
