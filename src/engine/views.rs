//! Response shapes handed to the front end.
//!
//! Field names are part of the front end contract; they follow Sleeper's
//! snake_case naming.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::{
    cli::types::{LeagueId, PlayerId, Season, TrendDirection, UserId},
    engine::enrich::display_name,
    sleeper::types::{
        DraftPick, DraftStatus, DraftSummary, JsonMap, LeagueSummary, PlayerRecord,
        UpstreamUser,
    },
};

/// A player id joined with its directory record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPlayer {
    pub player_id: PlayerId,
    pub name: String,
    pub position: Option<String>,
    pub team: Option<String>,
    pub injury_status: Option<String>,
    /// Only filled in for draft picks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Add/drop count, only for trending players.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl EnrichedPlayer {
    pub fn from_record(record: &PlayerRecord) -> Self {
        Self {
            player_id: record.player_id.clone(),
            name: display_name(record),
            position: record.position.clone(),
            team: record.team.clone(),
            injury_status: record.injury_status.clone(),
            age: None,
            count: None,
        }
    }

    pub fn with_age(mut self, age: Option<u32>) -> Self {
        self.age = age;
        self
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    pub user_id: UserId,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
}

impl From<UpstreamUser> for UserView {
    fn from(user: UpstreamUser) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            display_name: user.display_name,
            avatar: user.avatar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueView {
    pub league_id: LeagueId,
    pub name: String,
    pub season: Option<Season>,
    pub total_rosters: Option<u32>,
    pub roster_positions: Vec<String>,
    pub scoring_settings: BTreeMap<String, f64>,
}

impl From<LeagueSummary> for LeagueView {
    fn from(league: LeagueSummary) -> Self {
        Self {
            league_id: league.league_id,
            name: league.name,
            season: league.season,
            total_rosters: league.total_rosters,
            roster_positions: league.roster_positions,
            scoring_settings: league.scoring_settings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueOverview {
    pub user: UserView,
    pub leagues: Vec<LeagueView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterView {
    pub roster_id: u32,
    /// Count of enriched players, after unknown ids were dropped.
    pub total_players: usize,
    pub players: Vec<EnrichedPlayer>,
    pub starters: Vec<EnrichedPlayer>,
    pub settings: JsonMap,
    pub metadata: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterDetail {
    pub user: UserView,
    pub league: LeagueView,
    pub roster: RosterView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendingView {
    #[serde(rename = "type")]
    pub direction: TrendDirection,
    pub hours: u32,
    pub players: Vec<EnrichedPlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueDrafts {
    pub league_id: LeagueId,
    pub drafts: Vec<DraftSummary>,
}

/// A pick with the drafted player's projection nested under `player`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPick {
    #[serde(flatten)]
    pub pick: DraftPick,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<EnrichedPlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftDetail {
    pub draft: DraftSummary,
    pub picks: Vec<EnrichedPick>,
    pub traded_picks: Vec<Value>,
}

/// Who is due to pick next in a running draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnTheClock {
    pub pick_no: u32,
    pub round: u32,
    pub slot: u32,
    pub roster_id: Option<u32>,
}

/// Draft detail for a league's current draft, with its state lifted to the top level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveDraft {
    #[serde(flatten)]
    pub detail: DraftDetail,
    pub status: DraftStatus,
    #[serde(rename = "type")]
    pub draft_type: Option<String>,
    pub settings: JsonMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_the_clock: Option<OnTheClock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthView {
    pub status: &'static str,
    pub message: &'static str,
}

impl Default for HealthView {
    fn default() -> Self {
        Self {
            status: "healthy",
            message: "Sleepy API is running",
        }
    }
}
