//! Agronomy endpoints: crop analysis stub, farm health score and the
//! advisor bundle. All of them read the current snapshot only.

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use super::ApiError;
use crate::advisory::{self, farm_score, FarmScore};
use crate::analysis::{self, Diagnosis};
use crate::AppState;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/api/agriculture/analyze", post(analyze))
        .route("/api/agriculture/health-score", get(health_score))
        .route("/api/agriculture/recommendations", get(recommendations))
}

#[derive(Serialize)]
struct AnalyzeResponse {
    success: bool,
    /// Always true: no image is actually inspected.
    simulated: bool,
    analysis: Diagnosis,
}

/// Handle `POST /api/agriculture/analyze`. The uploaded body is ignored.
async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    // ---
    let snapshot = state.snapshots.get();
    let diagnosis = state.with_rng(|rng| analysis::diagnose(&snapshot, rng));
    tracing::info!(
        upload_bytes = body.len(),
        diagnosis = diagnosis.name,
        "Simulated crop analysis"
    );

    let response = AnalyzeResponse {
        success: true,
        simulated: true,
        analysis: diagnosis,
    };
    Ok(Json(serde_json::to_value(response)?))
}

/// Handle `GET /api/agriculture/health-score`.
async fn health_score(State(state): State<AppState>) -> Json<FarmScore> {
    // ---
    let result = farm_score::score(&state.snapshots.get());
    tracing::debug!("Farm health score {}", result.score);
    Json(result)
}

/// Handle `GET /api/agriculture/recommendations`.
async fn recommendations(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    // ---
    let snapshot = state.snapshots.get();
    let bundle = state.with_rng(|rng| advisory::recommend(&snapshot, rng));
    tracing::debug!(
        irrigation = ?bundle.irrigation.status,
        pest_score = bundle.pest.risk_score,
        insights = bundle.ai_insights.len(),
        "Recommendations computed"
    );
    Ok(Json(serde_json::to_value(bundle)?))
}
