//! Player search with a per-process memo, and tallest/heaviest selection.

use log::{debug, info};
use lru::LruCache;

use super::{
    http::ApiClient,
    types::{to_entities, to_player, Player},
};
use crate::Result;

/// Searches `/players` and remembers every result for the life of the value.
///
/// The memo never evicts: one CLI invocation only issues a handful of
/// distinct searches.
pub struct PlayerSearch {
    client: ApiClient,
    cache: LruCache<String, Vec<Player>>,
}

impl PlayerSearch {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cache: LruCache::unbounded(),
        }
    }

    /// All players whose name matches `name`, fetched at most once per search string.
    pub async fn search(&mut self, name: &str) -> Result<Vec<Player>> {
        if let Some(players) = self.cache.get(name) {
            debug!("Player search '{}' served from memo", name);
            return Ok(players.clone());
        }

        let raw = self
            .client
            .fetch_all("players", vec![("search".to_string(), name.to_string())])
            .await?;
        let players = to_entities(raw, to_player)?;
        info!("Player search '{}' matched {} players", name, players.len());

        self.cache.put(name.to_string(), players.clone());
        Ok(players)
    }

    pub async fn tallest(&mut self, name: &str) -> Result<Option<Player>> {
        let players = self.search(name).await?;
        Ok(select_tallest(&players).cloned())
    }

    pub async fn heaviest(&mut self, name: &str) -> Result<Option<Player>> {
        let players = self.search(name).await?;
        Ok(select_heaviest(&players).cloned())
    }

    /// Number of distinct searches remembered so far.
    pub fn cached_searches(&self) -> usize {
        self.cache.len()
    }
}

pub fn select_tallest(players: &[Player]) -> Option<&Player> {
    select_max_by(players, Player::height_meters)
}

pub fn select_heaviest(players: &[Player]) -> Option<&Player> {
    select_max_by(players, Player::weight_kilograms)
}

/// Rank with unknown measurements counted as zero, keeping the first of equal
/// maxima, then reject the pick if its own measurement is unknown or zero.
fn select_max_by<F>(players: &[Player], measure: F) -> Option<&Player>
where
    F: Fn(&Player) -> Option<f64>,
{
    let rank = |p: &Player| measure(p).unwrap_or(0.0);

    let best = players
        .iter()
        .reduce(|best, p| if rank(p) > rank(best) { p } else { best })?;

    match measure(best) {
        Some(value) if value != 0.0 => Some(best),
        _ => None,
    }
}
