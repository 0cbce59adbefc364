use axum::{extract::State, routing::get, Json, Router};

use crate::history::HISTORY_VIEW;
use crate::{AppState, HistoryEntry};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/api/history", get(recent))
        // Older dashboards read the history from here.
        .route("/api/sheets/data", get(recent))
}

async fn recent(State(state): State<AppState>) -> Json<Vec<HistoryEntry>> {
    // ---
    let entries = state.history.recent(HISTORY_VIEW).await;
    tracing::debug!("GET /api/history - returning {} entries", entries.len());
    Json(entries)
}
