//! HTTP and WebSocket gateway.
//!
//! Each sibling module exports a subrouter over [`AppState`]; this gateway
//! merges them, attaches request tracing and CORS, and binds the state, so
//! `main.rs` never needs to know about individual endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

mod agriculture;
mod chatbot;
mod health;
mod history;
mod live;
mod sensors;

// ---

pub fn router(state: AppState) -> Router {
    // ---
    Router::new()
        .merge(sensors::router())
        .merge(history::router())
        .merge(chatbot::router())
        .merge(agriculture::router())
        .merge(live::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Unexpected handler failure, rendered as HTTP 500
/// `{"success": false, "error": "..."}`.
pub struct ApiError(anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        tracing::error!("Request failed: {:#}", self.0);
        let body = json!({ "success": false, "error": self.0.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(e: E) -> Self {
        ApiError(e.into())
    }
}
