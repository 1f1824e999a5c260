//! Router tests: status codes and bodies for the JSON API

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use common::FakeSleeper;
use serde_json::{json, Value};
use sleepy_ffl::server::router;
use tower::ServiceExt;

fn app(fake: FakeSleeper) -> Router {
    let (_, assembler) = fake.into_assembler();
    router(assembler)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(FakeSleeper::default()), "/api/health/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "healthy", "message": "Sleepy API is running" })
    );
}

#[tokio::test]
async fn test_user_leagues_with_season() {
    let (status, body) = get(
        app(FakeSleeper::healthy()),
        "/api/sleeper/user/sleeper/leagues/?season=2023",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["user_id"], "U1");
    assert_eq!(body["leagues"][0]["name"], "Test League");
    assert_eq!(body["leagues"][0]["season"], "2024");
}

#[tokio::test]
async fn test_unknown_user_is_404() {
    let (status, body) = get(
        app(FakeSleeper::healthy()),
        "/api/sleeper/user/ghost/leagues/",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_roster_route() {
    let (status, body) = get(
        app(FakeSleeper::healthy()),
        "/api/sleeper/user/sleeper/league/L1/roster/",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roster"]["total_players"], 3);
    assert_eq!(body["roster"]["starters"][0]["name"], "Patrick Mahomes");
    assert!(body["roster"]["players"][0].get("age").is_none());
}

#[tokio::test]
async fn test_trending_unavailable_is_503() {
    let fake = FakeSleeper {
        trending: None,
        ..FakeSleeper::healthy()
    };
    let (status, body) = get(app(fake), "/api/sleeper/trending/?type=add&hours=24&limit=10").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "error": "Unable to fetch trending players" }));
}

#[tokio::test]
async fn test_trending_route() {
    let (status, body) = get(
        app(FakeSleeper::healthy()),
        "/api/sleeper/trending/?type=drop&hours=6",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "drop");
    assert_eq!(body["hours"], 6);
    assert_eq!(body["players"][0]["count"], 512);
}

#[tokio::test]
async fn test_draft_routes() {
    let (status, body) = get(app(FakeSleeper::healthy()), "/api/sleeper/draft/D1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["picks"][0]["player"]["age"], 29);

    let (status, body) = get(app(FakeSleeper::healthy()), "/api/sleeper/league/L1/drafts/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["drafts"][0]["draft_id"], "D1");

    let (status, body) = get(
        app(FakeSleeper::healthy()),
        "/api/sleeper/league/L1/live-draft/",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "drafting");
    assert_eq!(body["on_the_clock"]["pick_no"], 4);
}

#[tokio::test]
async fn test_unreachable_upstream_is_503() {
    let (status, body) = get(
        app(FakeSleeper::default()),
        "/api/sleeper/user/sleeper/league/L1/roster/",
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().starts_with("Unable to fetch"));
}

#[tokio::test]
async fn test_bad_query_is_json_400() {
    let (status, body) = get(app(FakeSleeper::healthy()), "/api/sleeper/trending/?hours=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to deserialize query string"));

    let (status, body) = get(
        app(FakeSleeper::healthy()),
        "/api/sleeper/user/sleeper/leagues/?season=soon",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
