//! balldontlie API layer: pagination, entity types and the reductions
//! built on top of them.

pub mod games;
pub mod http;
pub mod players;
pub mod teams;
pub mod types;

pub use games::{aggregate, SeasonAggregator, TeamStats};
pub use http::{ApiClient, QueryParams};
pub use players::PlayerSearch;
pub use teams::{group_by_division, DivisionGroup};
pub use types::{Game, Player, Team};
