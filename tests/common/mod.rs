//! In-memory Sleeper stand-in shared by the integration tests.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use serde_json::{json, Value};
use sleepy_ffl::{
    sleeper::{
        types::{
            DraftPick, DraftSummary, LeagueSummary, RawDirectory, RosterSnapshot, TrendingEntry,
            UpstreamUser,
        },
        TrendingQuery, UpstreamClient,
    },
    Assembler, DraftId, EngineConfig, LeagueId, Season, UserId,
};

/// Canned upstream. A `None` field answers as "unavailable".
#[derive(Default)]
pub struct FakeSleeper {
    pub users: Option<HashMap<String, UpstreamUser>>,
    pub leagues: Option<Vec<LeagueSummary>>,
    pub league: Option<Option<LeagueSummary>>,
    pub rosters: Option<Vec<RosterSnapshot>>,
    pub directory: Option<RawDirectory>,
    pub trending: Option<Vec<TrendingEntry>>,
    pub drafts: Option<Vec<DraftSummary>>,
    pub draft: Option<Option<DraftSummary>>,
    pub picks: Option<Vec<DraftPick>>,
    pub traded_picks: Option<Vec<Value>>,

    pub directory_fetches: AtomicUsize,
    pub seasons_requested: Mutex<Vec<Season>>,
    pub trending_queries: Mutex<Vec<TrendingQuery>>,
    pub picks_requested: Mutex<Vec<DraftId>>,
}

pub fn decode<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).unwrap()
}

pub fn sleeper_user() -> UpstreamUser {
    decode(json!({
        "user_id": "U1",
        "username": "sleeper",
        "display_name": "Sleeper",
        "avatar": "abc123"
    }))
}

pub fn test_league() -> LeagueSummary {
    decode(json!({
        "league_id": "L1",
        "name": "Test League",
        "season": "2024",
        "total_rosters": 12,
        "roster_positions": ["QB", "RB", "WR", "FLEX", "BN"],
        "scoring_settings": { "rec": 1.0, "pass_td": 4.0 }
    }))
}

pub fn directory() -> RawDirectory {
    decode(json!({
        "4046": {
            "first_name": "Patrick", "last_name": "Mahomes", "position": "QB",
            "team": "KC", "age": 29, "injury_status": null
        },
        "4034": {
            "first_name": "Christian", "last_name": "McCaffrey", "position": "RB",
            "team": "SF", "age": "28", "injury_status": "Questionable"
        },
        "6794": {
            "first_name": "Justin", "last_name": "Jefferson", "position": "WR",
            "team": "MIN", "age": 25
        },
        "KC": { "first_name": "Kansas City", "last_name": "Chiefs", "position": "DEF", "team": "KC" }
    }))
}

pub fn roster(roster_id: u32, owner: &str, players: Value, starters: Value) -> RosterSnapshot {
    decode(json!({
        "roster_id": roster_id,
        "owner_id": owner,
        "league_id": "L1",
        "players": players,
        "starters": starters,
        "settings": { "wins": 3, "losses": 1 },
        "metadata": null
    }))
}

pub fn draft(id: &str, status: &str, created: i64) -> DraftSummary {
    decode(json!({
        "draft_id": id,
        "league_id": "L1",
        "status": status,
        "type": "snake",
        "created": created,
        "settings": { "teams": 2, "rounds": 3 },
        "slot_to_roster_id": { "1": 1, "2": 2 }
    }))
}

pub fn pick(pick_no: u32, roster_id: u32, player_id: &str) -> DraftPick {
    decode(json!({
        "pick_no": pick_no,
        "round": (pick_no - 1) / 2 + 1,
        "roster_id": roster_id,
        "player_id": player_id,
        "picked_by": "U1",
        "is_keeper": null,
        "metadata": { "first_name": "x" }
    }))
}

impl FakeSleeper {
    /// Everything reachable: user `sleeper` with roster 2 in league `L1`.
    pub fn healthy() -> Self {
        let user = sleeper_user();
        Self {
            users: Some(HashMap::from([
                ("sleeper".to_string(), user.clone()),
                ("U1".to_string(), user),
            ])),
            leagues: Some(vec![test_league()]),
            league: Some(Some(test_league())),
            rosters: Some(vec![
                roster(1, "U9", json!(["6794"]), json!(["6794"])),
                roster(
                    2,
                    "U1",
                    json!(["4046", "4034", "9999", "KC"]),
                    json!(["4046", "0", null, "9999", "4034"]),
                ),
            ]),
            directory: Some(directory()),
            trending: Some(decode(json!([
                { "player_id": "4034", "count": 512 },
                { "player_id": "9999", "count": 300 },
                { "player_id": "6794", "count": 101 }
            ]))),
            drafts: Some(vec![draft("D1", "drafting", 100)]),
            draft: Some(Some(draft("D1", "drafting", 100))),
            picks: Some(vec![pick(1, 1, "4046"), pick(2, 2, "9999"), pick(3, 2, "4034")]),
            traded_picks: Some(vec![json!({ "round": 2, "owner_id": 1, "previous_owner_id": 2 })]),
            ..Self::default()
        }
    }

    pub fn into_assembler(self) -> (Arc<Self>, Assembler) {
        let fake = Arc::new(self);
        let config = EngineConfig {
            default_season: Season::new(2024),
            ..EngineConfig::default()
        };
        (fake.clone(), Assembler::new(fake, config))
    }

    pub fn directory_fetches(&self) -> usize {
        self.directory_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamClient for FakeSleeper {
    async fn fetch_user(&self, handle: &str) -> Option<Option<UpstreamUser>> {
        self.users.as_ref().map(|users| users.get(handle).cloned())
    }

    async fn fetch_user_leagues(
        &self,
        _user_id: &UserId,
        season: Season,
    ) -> Option<Vec<LeagueSummary>> {
        self.seasons_requested.lock().unwrap().push(season);
        self.leagues.clone()
    }

    async fn fetch_league(&self, _league_id: &LeagueId) -> Option<Option<LeagueSummary>> {
        self.league.clone()
    }

    async fn fetch_league_rosters(&self, _league_id: &LeagueId) -> Option<Vec<RosterSnapshot>> {
        self.rosters.clone()
    }

    async fn fetch_player_directory(&self) -> Option<RawDirectory> {
        self.directory_fetches.fetch_add(1, Ordering::SeqCst);
        self.directory.clone()
    }

    async fn fetch_trending(&self, query: &TrendingQuery) -> Option<Vec<TrendingEntry>> {
        self.trending_queries.lock().unwrap().push(query.clone());
        self.trending.clone()
    }

    async fn fetch_league_drafts(&self, _league_id: &LeagueId) -> Option<Vec<DraftSummary>> {
        self.drafts.clone()
    }

    async fn fetch_draft(&self, _draft_id: &DraftId) -> Option<Option<DraftSummary>> {
        self.draft.clone()
    }

    async fn fetch_draft_picks(&self, draft_id: &DraftId) -> Option<Vec<DraftPick>> {
        self.picks_requested.lock().unwrap().push(draft_id.clone());
        self.picks.clone()
    }

    async fn fetch_draft_traded_picks(&self, _draft_id: &DraftId) -> Option<Vec<Value>> {
        self.traded_picks.clone()
    }
}
