//! The upstream data contract the engine is written against.

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    cli::types::{DraftId, LeagueId, Season, TrendDirection, UserId},
    sleeper::types::{
        DraftPick, DraftSummary, LeagueSummary, RawDirectory, RosterSnapshot, TrendingEntry,
        UpstreamUser,
    },
};

/// Parameters for the trending players feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingQuery {
    pub sport: String,
    pub direction: TrendDirection,
    pub lookback_hours: u32,
    pub limit: u32,
}

/// Typed, read-only fetches against the fantasy data provider.
///
/// Every method performs one logical fetch and never fails outright:
///
/// - `None` means the provider could not be reached or answered unusably
///   (transport error, timeout, unexpected status, malformed body).
/// - For single-entity lookups, `Some(None)` means the provider answered but
///   the entity does not exist.
/// - Sequence lookups decode a `null` answer as an empty sequence.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Look a user up by username or user id.
    async fn fetch_user(&self, handle: &str) -> Option<Option<UpstreamUser>>;

    async fn fetch_user_leagues(
        &self,
        user_id: &UserId,
        season: Season,
    ) -> Option<Vec<LeagueSummary>>;

    async fn fetch_league(&self, league_id: &LeagueId) -> Option<Option<LeagueSummary>>;

    async fn fetch_league_rosters(&self, league_id: &LeagueId) -> Option<Vec<RosterSnapshot>>;

    /// The full player directory. This is by far the largest payload.
    async fn fetch_player_directory(&self) -> Option<RawDirectory>;

    async fn fetch_trending(&self, query: &TrendingQuery) -> Option<Vec<TrendingEntry>>;

    async fn fetch_league_drafts(&self, league_id: &LeagueId) -> Option<Vec<DraftSummary>>;

    async fn fetch_draft(&self, draft_id: &DraftId) -> Option<Option<DraftSummary>>;

    async fn fetch_draft_picks(&self, draft_id: &DraftId) -> Option<Vec<DraftPick>>;

    /// Traded pick records, passed through without interpretation.
    async fn fetch_draft_traded_picks(&self, draft_id: &DraftId) -> Option<Vec<Value>>;
}
