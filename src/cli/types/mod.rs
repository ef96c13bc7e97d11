//! Type-safe wrappers and enums for balldontlie data.

pub mod ids;
pub mod output;
pub mod time;

pub use ids::{GameId, PlayerId, TeamId};
pub use output::OutputFormat;
pub use time::Season;
