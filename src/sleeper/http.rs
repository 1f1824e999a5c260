//! reqwest-backed [`UpstreamClient`] for the Sleeper v1 API.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    cli::types::{DraftId, LeagueId, Season, UserId},
    core::{build_client, EngineConfig},
    error::{Result, SleepyError},
    sleeper::{
        client::{TrendingQuery, UpstreamClient},
        types::{
            DraftPick, DraftSummary, LeagueSummary, RawDirectory, RosterSnapshot, TrendingEntry,
            UpstreamUser,
        },
    },
};


#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: Client,
    base: Url,
    sport: String,
}

impl SleeperClient {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Self::with_client(build_client(config)?, &config.base_url, &config.sport)
    }

    /// Use an already-built reqwest client, e.g. one pointed at a mock server.
    pub fn with_client(http: Client, base_url: &str, sport: &str) -> Result<Self> {
        let base = Url::parse(base_url.trim_end_matches('/')).map_err(|e| SleepyError::Config {
            message: format!("invalid base_url {base_url:?}: {e}"),
        })?;
        if base.cannot_be_a_base() {
            return Err(SleepyError::Config {
                message: format!("base_url {base_url:?} cannot carry a path"),
            });
        }
        Ok(Self {
            http,
            base,
            sport: sport.to_string(),
        })
    }

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET with status mapping: `Some(None)` for a 404, `None` for a
    /// transport failure or any other non-success status.
    async fn get(&self, segments: &[&str], query: &[(&str, String)]) -> Option<Option<Response>> {
        let url = self.endpoint(segments);
        debug!(%url, "upstream fetch");

        let response = match self.http.get(url.clone()).query(query).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, timeout = e.is_timeout(), "upstream request failed");
                return None;
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(%url, "upstream has no such resource");
            return Some(None);
        }
        if !status.is_success() {
            warn!(%url, %status, "upstream returned an error status");
            return None;
        }
        Some(Some(response))
    }

    /// GET and decode a JSON body.
    ///
    /// `Some(None)` for a 404 or a literal `null` body, `None` for every
    /// other failure.
    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Option<Option<T>> {
        let Some(response) = self.get(segments, query).await? else {
            return Some(None);
        };
        let url = response.url().clone();

        match response.json::<Option<T>>().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(%url, error = %e, "upstream body could not be decoded");
                None
            }
        }
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Option<Vec<T>> {
        self.get_json::<Vec<T>>(segments, query)
            .await
            .map(Option::unwrap_or_default)
    }
}

#[async_trait]
impl UpstreamClient for SleeperClient {
    async fn fetch_user(&self, handle: &str) -> Option<Option<UpstreamUser>> {
        self.get_json(&["user", handle], &[]).await
    }

    async fn fetch_user_leagues(
        &self,
        user_id: &UserId,
        season: Season,
    ) -> Option<Vec<LeagueSummary>> {
        let season = season.to_string();
        self.get_list(
            &["user", user_id.as_str(), "leagues", &self.sport, &season],
            &[],
        )
        .await
    }

    async fn fetch_league(&self, league_id: &LeagueId) -> Option<Option<LeagueSummary>> {
        self.get_json(&["league", league_id.as_str()], &[]).await
    }

    async fn fetch_league_rosters(&self, league_id: &LeagueId) -> Option<Vec<RosterSnapshot>> {
        self.get_list(&["league", league_id.as_str(), "rosters"], &[])
            .await
    }

    async fn fetch_player_directory(&self) -> Option<RawDirectory> {
        // A missing directory is as useless as an unreachable one.
        let response = self.get(&["players", &self.sport], &[]).await.flatten()?;
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "player directory body could not be read");
                return None;
            }
        };

        // Several megabytes of JSON; parse it on the blocking pool.
        let parsed =
            tokio::task::spawn_blocking(move || serde_json::from_slice::<Option<RawDirectory>>(&body))
                .await;
        match parsed {
            Ok(Ok(directory)) => directory,
            Ok(Err(e)) => {
                warn!(error = %e, "player directory could not be decoded");
                None
            }
            Err(e) => {
                warn!(error = %e, "player directory decode task failed");
                None
            }
        }
    }

    async fn fetch_trending(&self, query: &TrendingQuery) -> Option<Vec<TrendingEntry>> {
        let params = [
            ("lookback_hours", query.lookback_hours.to_string()),
            ("limit", query.limit.to_string()),
        ];
        self.get_list(
            &["players", &query.sport, "trending", query.direction.as_str()],
            &params,
        )
        .await
    }

    async fn fetch_league_drafts(&self, league_id: &LeagueId) -> Option<Vec<DraftSummary>> {
        self.get_list(&["league", league_id.as_str(), "drafts"], &[])
            .await
    }

    async fn fetch_draft(&self, draft_id: &DraftId) -> Option<Option<DraftSummary>> {
        self.get_json(&["draft", draft_id.as_str()], &[]).await
    }

    async fn fetch_draft_picks(&self, draft_id: &DraftId) -> Option<Vec<DraftPick>> {
        self.get_list(&["draft", draft_id.as_str(), "picks"], &[])
            .await
    }

    async fn fetch_draft_traded_picks(&self, draft_id: &DraftId) -> Option<Vec<Value>> {
        self.get_list(&["draft", draft_id.as_str(), "traded_picks"], &[])
            .await
    }
}
