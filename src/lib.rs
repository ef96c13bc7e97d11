//! NBA Stats CLI Library
//!
//! A small Rust library over the public balldontlie NBA API: it walks the
//! paginated `teams`, `players` and `games` endpoints, rebuilds typed
//! entities, and reduces a season's games into per-team win/loss tallies.
//!
//! ## Features
//!
//! - **Pagination**: [`ApiClient::fetch_all`] follows `meta.next_page` until the last page
//! - **Typed Entities**: [`Team`], [`Player`] and [`Game`] with nested teams rebuilt eagerly
//! - **Division Grouping**: stable grouping of teams by division
//! - **Season Aggregation**: wins and losses per team, split by home/visitor role
//! - **Export**: tab-delimited, JSON, SQLite or console output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats::{balldontlie::games::get_season_stats, ApiClient, Season};
//!
//! # async fn example() -> nba_stats::Result<()> {
//! let client = ApiClient::from_env(None)?;
//! let stats = get_season_stats(&client, Season::new(2019)).await?;
//!
//! for team in &stats {
//!     println!("{}: {:?}", team.team_name(), team.counters());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_API_URI=https://www.balldontlie.io/api/v1   # API base
//! export BALLDONTLIE_API_KEY=...                        # optional Authorization header
//! export NBA_STATS_LOG=debug                            # log filter (default: info)
//! ```

pub mod balldontlie;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod export;
pub mod storage;

// Re-export commonly used types
pub use balldontlie::{ApiClient, Game, Player, Team, TeamStats};
pub use cli::types::{GameId, OutputFormat, PlayerId, Season, TeamId};
pub use error::{NbaError, Result};

pub const DEFAULT_API_URI: &str = "https://www.balldontlie.io/api/v1";
pub const API_URI_ENV_VAR: &str = "NBA_API_URI";
pub const API_KEY_ENV_VAR: &str = "BALLDONTLIE_API_KEY";
pub const LOG_ENV_VAR: &str = "NBA_STATS_LOG";
