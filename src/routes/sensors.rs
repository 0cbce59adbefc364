//! Sensor ingestion and the current-reading endpoint.

use axum::{body::Bytes, extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{AppState, RawSensorReading, SensorSnapshot};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/sensors", get(current).post(ingest))
}

#[derive(Serialize)]
struct IngestResponse {
    success: bool,
    data: SensorSnapshot,
}

/// Handle `GET /api/sensors`.
async fn current(State(state): State<AppState>) -> Json<SensorSnapshot> {
    Json(state.snapshots.get().as_ref().clone())
}

/// Handle `POST /api/sensors`.
///
/// Never rejects a reading: a body that is not JSON counts as an empty one,
/// and every missing or malformed field takes its neutral default.
async fn ingest(State(state): State<AppState>, body: Bytes) -> Json<IngestResponse> {
    // ---
    let value: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            warn!("POST /api/sensors - body is not JSON ({}), using defaults", e);
            Value::Null
        }
    };

    let snapshot = RawSensorReading::from_json(&value).to_snapshot(Utc::now());
    debug!("POST /api/sensors - parsed {:?}", snapshot);

    let current = state.snapshots.set(snapshot);
    state.history.append(current.as_ref().clone()).await;
    let viewers = state.broadcaster.publish(current.clone());

    info!(
        temperature = current.temperature,
        humidity = current.humidity,
        soil_moisture = current.soil_moisture,
        viewers,
        "Reading ingested"
    );

    Json(IngestResponse {
        success: true,
        data: current.as_ref().clone(),
    })
}
