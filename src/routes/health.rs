// src/routes/health.rs
//! Liveness endpoint.
//!
//! `/health` answers without touching the snapshot, the history file or the
//! language model, so orchestrators can probe it cheaply. Like its siblings
//! it exports only a subrouter for the gateway (`mod.rs`) to merge.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Handle `GET /health`.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Subrouter with the single `GET /health` route.
///
/// Generic over the state type so it merges into any gateway router.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
