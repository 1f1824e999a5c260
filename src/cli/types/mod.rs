//! Type-safe wrappers and enums for Sleeper fantasy football data.

pub mod ids;
pub mod time;
pub mod trending;

pub use ids::{DraftId, LeagueId, PlayerId, UserId};
pub use time::Season;
pub use trending::TrendDirection;
