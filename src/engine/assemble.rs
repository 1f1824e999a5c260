//! Composite views: fan out upstream fetches, join, and shape the response.
//!
//! Required fetches abort the view on absence; the player directory is the
//! one supplementary input and only ever empties the enriched lists.
//! Independent fetches run concurrently, and their results are checked in a
//! fixed order so the reported error never depends on completion order.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    cli::types::{DraftId, LeagueId, Season, TrendDirection},
    core::EngineConfig,
    engine::{
        context::RequestContext,
        directory::{PlayerDirectory, PlayerLookup},
        draft::{next_pick, select_current_draft},
        enrich::{enrich, enrich_slots, project},
        error::{EngineError, EngineResult},
        roster::resolve_roster,
        views::{
            DraftDetail, EnrichedPick, EnrichedPlayer, LeagueDrafts, LeagueOverview, LeagueView,
            LiveDraft, RosterDetail, RosterView, TrendingView, UserView,
        },
    },
    sleeper::{
        client::{TrendingQuery, UpstreamClient},
        types::{DraftPick, DraftSummary},
    },
};

/// Caller-facing trending parameters; unset values come from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrendingRequest {
    pub direction: TrendDirection,
    pub hours: Option<u32>,
    pub limit: Option<u32>,
}

/// A required fetch came back empty-handed.
fn required<T>(fetched: Option<T>, what: &str) -> EngineResult<T> {
    fetched.ok_or_else(|| EngineError::unavailable(format!("Unable to fetch {what}")))
}

/// The upstream answered, but the entity is not there.
fn found<T>(entity: Option<T>, message: &str) -> EngineResult<T> {
    entity.ok_or_else(|| EngineError::not_found(message))
}

#[derive(Clone)]
pub struct Assembler {
    client: Arc<dyn UpstreamClient>,
    config: Arc<EngineConfig>,
}

impl Assembler {
    pub fn new(client: Arc<dyn UpstreamClient>, config: EngineConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn context(&self) -> RequestContext<'_> {
        RequestContext::new(self.client.as_ref())
    }

    /// A user's leagues for `season` (the configured default when `None`).
    #[instrument(skip(self))]
    pub async fn league_overview(
        &self,
        handle: &str,
        season: Option<Season>,
    ) -> EngineResult<LeagueOverview> {
        let season = season.unwrap_or(self.config.default_season);

        let user = found(required(self.client.fetch_user(handle).await, "user")?, "User not found")?;

        let leagues = required(
            self.client.fetch_user_leagues(&user.user_id, season).await,
            "leagues",
        )?;
        if leagues.is_empty() {
            return Err(EngineError::not_found("No leagues found"));
        }
        debug!(user_id = %user.user_id, %season, leagues = leagues.len(), "league overview assembled");

        Ok(LeagueOverview {
            user: UserView::from(user),
            leagues: leagues.into_iter().map(LeagueView::from).collect(),
        })
    }

    /// A user's roster in one league, with players and starters enriched.
    #[instrument(skip(self))]
    pub async fn roster_detail(
        &self,
        handle: &str,
        league_id: &LeagueId,
    ) -> EngineResult<RosterDetail> {
        let ctx = self.context();
        let client = ctx.client();

        let (user, league, rosters, directory) = tokio::join!(
            client.fetch_user(handle),
            client.fetch_league(league_id),
            client.fetch_league_rosters(league_id),
            ctx.directory(),
        );

        let user = found(required(user, "user")?, "User not found")?;
        let league = found(required(league, "league")?, "League not found")?;
        let rosters = required(rosters, "league rosters")?;

        let roster = found(
            resolve_roster(&user.user_id, &rosters),
            "User roster not found in this league",
        )?;

        let players = enrich(&roster.players, directory);
        let starters = enrich_slots(&roster.starters, directory);
        debug!(
            roster_id = roster.roster_id,
            listed = roster.players.len(),
            enriched = players.len(),
            "roster enriched"
        );

        Ok(RosterDetail {
            user: UserView::from(user),
            league: LeagueView::from(league),
            roster: RosterView {
                roster_id: roster.roster_id,
                total_players: players.len(),
                players,
                starters,
                settings: roster.settings.clone(),
                metadata: roster.metadata.clone(),
            },
        })
    }

    /// Most added or dropped players, with directory details and counts.
    #[instrument(skip(self))]
    pub async fn trending(&self, request: TrendingRequest) -> EngineResult<TrendingView> {
        let query = TrendingQuery {
            sport: self.config.sport.clone(),
            direction: request.direction,
            lookback_hours: request.hours.unwrap_or(self.config.trending_hours),
            limit: request.limit.unwrap_or(self.config.trending_limit),
        };

        let ctx = self.context();
        let (entries, directory) =
            tokio::join!(ctx.client().fetch_trending(&query), ctx.directory());

        let entries = required(entries, "trending players")?;
        let players = entries
            .iter()
            .filter_map(|entry| project(&entry.player_id, directory).map(|p| p.with_count(entry.count)))
            .collect();

        Ok(TrendingView {
            direction: query.direction,
            hours: query.lookback_hours,
            players,
        })
    }

    /// Every draft attached to a league, in upstream order.
    #[instrument(skip(self))]
    pub async fn league_drafts(&self, league_id: &LeagueId) -> EngineResult<LeagueDrafts> {
        let drafts = required(self.client.fetch_league_drafts(league_id).await, "drafts")?;
        Ok(LeagueDrafts {
            league_id: league_id.clone(),
            drafts,
        })
    }

    /// One draft by id, with picks enriched.
    #[instrument(skip(self))]
    pub async fn draft_detail(&self, draft_id: &DraftId) -> EngineResult<DraftDetail> {
        let ctx = self.context();
        let client = ctx.client();

        let (draft, picks, traded_picks, directory) = tokio::join!(
            client.fetch_draft(draft_id),
            client.fetch_draft_picks(draft_id),
            client.fetch_draft_traded_picks(draft_id),
            ctx.directory(),
        );

        let draft = found(required(draft, "draft")?, "Draft not found")?;
        let picks = required(picks, "draft picks")?;
        let traded_picks = required(traded_picks, "traded picks")?;

        Ok(assemble_draft(draft, picks, traded_picks, directory))
    }

    /// The league's current draft (see [`select_current_draft`]) with its
    /// status, type and settings lifted to the top level.
    #[instrument(skip(self))]
    pub async fn live_draft(&self, league_id: &LeagueId) -> EngineResult<LiveDraft> {
        let ctx = self.context();
        let client = ctx.client();

        let (drafts, directory) =
            tokio::join!(client.fetch_league_drafts(league_id), ctx.directory());
        let drafts = required(drafts, "drafts")?;

        let draft = found(
            select_current_draft(&drafts).cloned(),
            "No drafts found for this league",
        )?;
        debug!(draft_id = %draft.draft_id, status = ?draft.status, "selected current draft");

        let (picks, traded_picks) = tokio::join!(
            client.fetch_draft_picks(&draft.draft_id),
            client.fetch_draft_traded_picks(&draft.draft_id),
        );
        let picks = required(picks, "draft picks")?;
        let traded_picks = required(traded_picks, "traded picks")?;

        let on_the_clock = next_pick(&draft, picks.len());
        let status = draft.status;
        let draft_type = draft.draft_type.clone();
        let settings = draft.settings.clone();

        Ok(LiveDraft {
            detail: assemble_draft(draft, picks, traded_picks, directory),
            status,
            draft_type,
            settings,
            on_the_clock,
        })
    }
}

/// Attach a `player` projection (with age) to every pick the directory knows.
fn assemble_draft(
    draft: DraftSummary,
    picks: Vec<DraftPick>,
    traded_picks: Vec<Value>,
    directory: &PlayerDirectory,
) -> DraftDetail {
    let picks = picks
        .into_iter()
        .map(|pick| {
            let player = pick
                .player_id
                .as_ref()
                .and_then(|id| directory.lookup(id))
                .map(|record| EnrichedPlayer::from_record(record).with_age(record.age));
            EnrichedPick { pick, player }
        })
        .collect();

    DraftDetail {
        draft,
        picks,
        traded_picks,
    }
}
