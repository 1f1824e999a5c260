//! JSON HTTP API over the assembler.
//!
//! Thin adapter: every route extracts its parameters, calls one
//! [`Assembler`] operation and serializes the view. Engine failures become
//! `{"error": ...}` bodies with 404 or 503.

mod routes;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::{
    engine::{Assembler, EngineError},
    Result,
};

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body())).into_response()
    }
}

/// The full application router, ready to serve.
pub fn router(assembler: Assembler) -> Router {
    routes::api()
        .with_state(assembler)
        .layer(TraceLayer::new_for_http())
        // Front end runs on its own origin.
        .layer(CorsLayer::permissive())
}

/// Serve on an already-bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, assembler: Assembler) -> Result<()> {
    axum::serve(listener, router(assembler))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("sleepy api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
