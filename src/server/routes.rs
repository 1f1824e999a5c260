use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query, State},
    http::{request::Parts, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    cli::types::{DraftId, LeagueId, Season, TrendDirection},
    engine::{
        Assembler, DraftDetail, EngineResult, ErrorBody, HealthView, LeagueDrafts, LeagueOverview,
        LiveDraft, RosterDetail, TrendingRequest, TrendingView,
    },
};

pub(super) fn api() -> Router<Assembler> {
    Router::new()
        .route("/api/health/", get(health))
        .route("/api/sleeper/user/:username/leagues/", get(user_leagues))
        .route(
            "/api/sleeper/user/:username/league/:league_id/roster/",
            get(user_roster),
        )
        .route("/api/sleeper/trending/", get(trending))
        .route("/api/sleeper/league/:league_id/drafts/", get(league_drafts))
        .route("/api/sleeper/draft/:draft_id/", get(draft_detail))
        .route("/api/sleeper/league/:league_id/live-draft/", get(live_draft))
}

/// `Query` whose rejection carries the same `{"error": ...}` body as engine failures.
struct ApiQuery<T>(T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorBody>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err((
                rejection.status(),
                Json(ErrorBody {
                    error: rejection.body_text(),
                }),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SeasonQuery {
    season: Option<Season>,
}

#[derive(Debug, Deserialize)]
struct TrendingQueryParams {
    #[serde(rename = "type", default)]
    direction: TrendDirection,
    hours: Option<u32>,
    limit: Option<u32>,
}

async fn health() -> Json<HealthView> {
    Json(HealthView::default())
}

async fn user_leagues(
    State(assembler): State<Assembler>,
    Path(username): Path<String>,
    ApiQuery(query): ApiQuery<SeasonQuery>,
) -> EngineResult<Json<LeagueOverview>> {
    assembler
        .league_overview(&username, query.season)
        .await
        .map(Json)
}

async fn user_roster(
    State(assembler): State<Assembler>,
    Path((username, league_id)): Path<(String, LeagueId)>,
) -> EngineResult<Json<RosterDetail>> {
    assembler.roster_detail(&username, &league_id).await.map(Json)
}

async fn trending(
    State(assembler): State<Assembler>,
    ApiQuery(params): ApiQuery<TrendingQueryParams>,
) -> EngineResult<Json<TrendingView>> {
    let request = TrendingRequest {
        direction: params.direction,
        hours: params.hours,
        limit: params.limit,
    };
    assembler.trending(request).await.map(Json)
}

async fn league_drafts(
    State(assembler): State<Assembler>,
    Path(league_id): Path<LeagueId>,
) -> EngineResult<Json<LeagueDrafts>> {
    assembler.league_drafts(&league_id).await.map(Json)
}

async fn draft_detail(
    State(assembler): State<Assembler>,
    Path(draft_id): Path<DraftId>,
) -> EngineResult<Json<DraftDetail>> {
    assembler.draft_detail(&draft_id).await.map(Json)
}

async fn live_draft(
    State(assembler): State<Assembler>,
    Path(league_id): Path<LeagueId>,
) -> EngineResult<Json<LiveDraft>> {
    assembler.live_draft(&league_id).await.map(Json)
}
