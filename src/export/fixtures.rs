//! Shared TeamStats fixtures for exporter tests.

use crate::{
    balldontlie::{aggregate, Game, Team, TeamStats},
    cli::types::{GameId, Season, TeamId},
};

fn team(id: u64, abbreviation: &str, full_name: &str) -> Team {
    Team {
        id: TeamId::new(id),
        abbreviation: abbreviation.to_string(),
        city: String::new(),
        conference: String::new(),
        division: String::new(),
        full_name: full_name.to_string(),
        name: String::new(),
    }
}

fn game(id: u64, home: Team, home_score: u32, visitor: Team, visitor_score: u32) -> Game {
    Game {
        id: GameId::new(id),
        date: "2019-10-22".to_string(),
        period: 4,
        postseason: false,
        season: Season::new(2019),
        status: "Final".to_string(),
        time: None,
        home_team: home,
        home_team_score: home_score,
        visitor_team: visitor,
        visitor_team_score: visitor_score,
    }
}

/// Boston beats the Lakers at home and away: BOS `[1, 1, 0, 0]`, LAL `[0, 0, 1, 1]`.
pub(crate) fn sample_stats() -> Vec<TeamStats> {
    let boston = team(2, "BOS", "Boston Celtics");
    let lakers = team(14, "LAL", "Los Angeles Lakers");

    aggregate(&[
        game(1, boston.clone(), 110, lakers.clone(), 100),
        game(2, lakers, 95, boston, 99),
    ])
}
