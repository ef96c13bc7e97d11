//! Typed entities rebuilt from raw API records.

use crate::{
    cli::types::{GameId, PlayerId, Season, TeamId},
    core::units::{height_to_meters, weight_to_kilograms},
    error::{NbaError, Result},
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;


/// One element of a page's `data` array, before reconstruction.
pub type RawRecord = Value;

/// Envelope every paginated endpoint returns.
#[derive(Debug, Deserialize)]
pub struct Page {
    pub data: Vec<RawRecord>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub total_pages: u32,
    /// `null` on the last page, but the key itself must be present.
    #[serde(deserialize_with = "required_nullable")]
    pub next_page: Option<u32>,
}

fn required_nullable<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u32>::deserialize(deserializer)
}

/// NBA franchise. Two teams are the same team when their ids match.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub abbreviation: String,
    pub city: String,
    pub conference: String,
    pub division: String,
    pub full_name: String,
    pub name: String,
}

impl Team {
    /// `"{full_name} ({abbreviation})"`, e.g. `Boston Celtics (BOS)`.
    pub fn name_with_abbreviation(&self) -> String {
        format!("{} ({})", self.full_name, self.abbreviation)
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Team {}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub height_feet: Option<u32>,
    #[serde(default)]
    pub height_inches: Option<u32>,
    #[serde(default)]
    pub weight_pounds: Option<u32>,
    pub position: String,
    pub team: Team,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Height in meters; `None` unless both feet and inches are known.
    pub fn height_meters(&self) -> Option<f64> {
        match (self.height_feet, self.height_inches) {
            (Some(feet), Some(inches)) => Some(height_to_meters(feet, inches)),
            _ => None,
        }
    }

    pub fn weight_kilograms(&self) -> Option<f64> {
        self.weight_pounds.map(weight_to_kilograms)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Game {
    pub id: GameId,
    pub date: String,
    pub period: u32,
    pub postseason: bool,
    pub season: Season,
    pub status: String,
    #[serde(default)]
    pub time: Option<String>,
    pub home_team: Team,
    pub home_team_score: u32,
    pub visitor_team: Team,
    pub visitor_team_score: u32,
}

impl Game {
    /// Team with the strictly higher score, `None` on a tie.
    pub fn winner(&self) -> Option<&Team> {
        if self.home_team_score > self.visitor_team_score {
            Some(&self.home_team)
        } else if self.home_team_score < self.visitor_team_score {
            Some(&self.visitor_team)
        } else {
            None
        }
    }

    /// Team with the strictly lower score, `None` on a tie.
    pub fn loser(&self) -> Option<&Team> {
        if self.home_team_score < self.visitor_team_score {
            Some(&self.home_team)
        } else if self.home_team_score > self.visitor_team_score {
            Some(&self.visitor_team)
        } else {
            None
        }
    }

    pub fn is_decisive(&self) -> bool {
        self.home_team_score != self.visitor_team_score
    }
}

fn reconstruct<T: DeserializeOwned>(kind: &'static str, raw: RawRecord) -> Result<T> {
    serde_json::from_value(raw).map_err(|source| NbaError::MalformedRecord { kind, source })
}

pub fn to_team(raw: RawRecord) -> Result<Team> {
    reconstruct("team", raw)
}

/// Nested `team` is rebuilt in the same pass as the player.
pub fn to_player(raw: RawRecord) -> Result<Player> {
    reconstruct("player", raw)
}

/// Nested `home_team` and `visitor_team` are rebuilt in the same pass as the game.
pub fn to_game(raw: RawRecord) -> Result<Game> {
    reconstruct("game", raw)
}

/// Convert a whole batch; the first malformed record aborts it.
pub fn to_entities<T>(
    raws: Vec<RawRecord>,
    convert: fn(RawRecord) -> Result<T>,
) -> Result<Vec<T>> {
    raws.into_iter().map(convert).collect()
}
