//! Payload types decoded from the Sleeper read API.
//!
//! Sleeper is liberal with `null` (empty rosters, orphaned teams, drafts that
//! have not started), so most collections decode `null` as empty rather than
//! rejecting the whole payload.

use crate::cli::types::{DraftId, LeagueId, PlayerId, Season, UserId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};


/// Free-form JSON object passed through to callers untouched.
pub type JsonMap = Map<String, Value>;

/// The bulk `/players/{sport}` payload: player id -> raw player object.
pub type RawDirectory = HashMap<String, Value>;

fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ages arrive as integers, occasionally as floats or strings.
fn de_lenient_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|v| u32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UpstreamUser {
    pub user_id: UserId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Avatar id; the image lives at `https://sleepercdn.com/avatars/{avatar}`.
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LeagueSummary {
    pub league_id: LeagueId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: String,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub total_rosters: Option<u32>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub roster_positions: Vec<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub scoring_settings: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RosterSnapshot {
    pub roster_id: u32,
    /// `None` for orphaned teams.
    #[serde(default)]
    pub owner_id: Option<UserId>,
    #[serde(default)]
    pub league_id: Option<LeagueId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub players: Vec<PlayerId>,
    /// Lineup slots in roster-position order; `None` is an unfilled slot.
    #[serde(default, deserialize_with = "de_null_default")]
    pub starters: Vec<Option<PlayerId>>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub settings: JsonMap,
    #[serde(default, deserialize_with = "de_null_default")]
    pub metadata: JsonMap,
}

/// One player from the bulk directory, keyed by the directory's map key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub player_id: PlayerId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub age: Option<u32>,
    pub injury_status: Option<String>,
}

/// Directory entry as it appears on the wire. The id comes from the map key.
#[derive(Debug, Deserialize)]
pub(crate) struct RawPlayer {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    team: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_age")]
    age: Option<u32>,
    #[serde(default)]
    injury_status: Option<String>,
}

impl RawPlayer {
    pub(crate) fn into_record(self, player_id: PlayerId) -> PlayerRecord {
        PlayerRecord {
            player_id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            team: self.team,
            age: self.age,
            injury_status: self.injury_status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrendingEntry {
    pub player_id: PlayerId,
    #[serde(default)]
    pub count: u64,
}

/// Draft lifecycle as reported by Sleeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    #[serde(alias = "pending")]
    PreDraft,
    Drafting,
    Paused,
    Complete,
    /// Any status this crate does not know about.
    #[default]
    #[serde(other)]
    Other,
}

impl DraftStatus {
    /// Drafts in these states have picks worth showing.
    pub fn is_live_or_done(&self) -> bool {
        matches!(self, DraftStatus::Drafting | DraftStatus::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DraftSummary {
    pub draft_id: DraftId,
    #[serde(default)]
    pub league_id: Option<LeagueId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub status: DraftStatus,
    /// `snake`, `linear` or `auction`.
    #[serde(rename = "type", default)]
    pub draft_type: Option<String>,
    /// Creation time, epoch milliseconds.
    #[serde(default, deserialize_with = "de_null_default")]
    pub created: i64,
    #[serde(default, deserialize_with = "de_null_default")]
    pub settings: JsonMap,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub start_time: Option<i64>,
    /// user id -> draft slot
    #[serde(default)]
    pub draft_order: Option<BTreeMap<String, u32>>,
    /// draft slot (as a string key) -> roster id
    #[serde(default)]
    pub slot_to_roster_id: Option<BTreeMap<String, Option<u32>>>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub metadata: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DraftPick {
    pub pick_no: u32,
    pub round: u32,
    #[serde(default)]
    pub roster_id: Option<u32>,
    #[serde(default)]
    pub player_id: Option<PlayerId>,
    #[serde(default)]
    pub picked_by: Option<UserId>,
    #[serde(default)]
    pub is_keeper: Option<bool>,
    #[serde(default)]
    pub draft_slot: Option<u32>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub metadata: JsonMap,
}
