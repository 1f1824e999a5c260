//! Sleeper Fantasy Football aggregation library
//!
//! Fans out calls to the read-only Sleeper API, joins the results by id and
//! assembles composite views for a front end: a user's leagues, an enriched
//! roster, trending players, and draft boards with every pick resolved to a
//! player.
//!
//! ## Features
//!
//! - **League Overview**: Resolve a username and list its leagues for a season
//! - **Roster Detail**: Players and starters joined against the player directory
//! - **Trending Players**: Most added/dropped players with directory details
//! - **Drafts**: Draft detail, league draft listing, and live-draft resolution
//! - **HTTP Server**: The same views over a small JSON API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sleepy_ffl::{Assembler, EngineConfig, LeagueId, sleeper::SleeperClient};
//!
//! # async fn example() -> sleepy_ffl::Result<()> {
//! let config = EngineConfig::load()?;
//! let client = SleeperClient::new(&config)?;
//! let assembler = Assembler::new(Arc::new(client), config);
//!
//! let detail = assembler
//!     .roster_detail("sleeper", &LeagueId::new("289646328504385536"))
//!     .await?;
//! println!("{} players", detail.roster.total_players);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the engine at a different upstream or pin the default season:
//! ```bash
//! export SLEEPY_API_BASE_URL=http://localhost:9000/v1
//! export SLEEPY_SEASON=2024
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod engine;
pub mod error;
pub mod server;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{DraftId, LeagueId, PlayerId, Season, TrendDirection, UserId};
pub use crate::core::EngineConfig;
pub use engine::{Assembler, EngineError, ErrorBody};
pub use error::{Result, SleepyError};

/// Path to a JSON config file, overriding the per-user default location.
pub const CONFIG_ENV_VAR: &str = "SLEEPY_CONFIG";
pub const BASE_URL_ENV_VAR: &str = "SLEEPY_API_BASE_URL";
pub const SEASON_ENV_VAR: &str = "SLEEPY_SEASON";
pub const TIMEOUT_ENV_VAR: &str = "SLEEPY_TIMEOUT_SECS";
pub const BIND_ENV_VAR: &str = "SLEEPY_BIND";
