//! Aggregation and enrichment engine.
//!
//! Pure building blocks (directory index, roster resolution, enrichment,
//! draft selection) plus the [`Assembler`] that drives the upstream client
//! and composes them into the views served by the CLI and the HTTP server.

pub mod assemble;
pub mod context;
pub mod directory;
pub mod draft;
pub mod enrich;
pub mod error;
pub mod roster;
pub mod views;

pub use assemble::{Assembler, TrendingRequest};
pub use directory::{build_index, PlayerDirectory, PlayerLookup};
pub use error::{EngineError, EngineResult, ErrorBody};
pub use views::{
    DraftDetail, EnrichedPick, EnrichedPlayer, HealthView, LeagueDrafts, LeagueOverview,
    LiveDraft, OnTheClock, RosterDetail, TrendingView,
};
