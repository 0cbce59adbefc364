//! Chatbot endpoint. Always answers with HTTP 200.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde_json::Value;
use tracing::{error, info, Instrument};
use uuid::Uuid;

use crate::chat::{ChatMessage, ChatReply};
use crate::{AppState, RawSensorReading, SensorSnapshot};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/chatbot/message", post(handler))
}

/// Pieces of `{message, sensorData?, history?}` that survived parsing.
struct ChatRequest {
    message: String,
    sensor_data: Option<Value>,
    history: Vec<ChatMessage>,
}

impl ChatRequest {
    fn from_body(body: &[u8]) -> Self {
        // ---
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let sensor_data = value
            .get("sensorData")
            .filter(|v| v.as_object().is_some_and(|o| !o.is_empty()))
            .cloned();
        let history = value
            .get("history")
            .cloned()
            .and_then(|h| serde_json::from_value(h).ok())
            .unwrap_or_default();

        ChatRequest {
            message,
            sensor_data,
            history,
        }
    }

    /// Readings the answer is based on: what the UI sent, else the latest.
    fn snapshot(&self, latest: Arc<SensorSnapshot>) -> SensorSnapshot {
        match &self.sensor_data {
            Some(v) => RawSensorReading::from_json(v).to_snapshot(latest.timestamp),
            None => latest.as_ref().clone(),
        }
    }
}

/// Handle `POST /api/chatbot/message`.
///
/// The conversation runs in its own task so that even a panic in the
/// responder ends as the placeholder reply instead of a dropped connection.
async fn handler(State(state): State<AppState>, body: Bytes) -> Json<ChatReply> {
    // ---
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("chat", %request_id);

    let request = ChatRequest::from_body(&body);
    let snapshot = request.snapshot(state.snapshots.get());
    let gateway = state.chat.clone();

    info!(parent: &span, chars = request.message.chars().count(), "POST /api/chatbot/message");

    let task = tokio::spawn(
        async move {
            gateway
                .converse(&request.message, &snapshot, &request.history)
                .await
        }
        .instrument(span.clone()),
    );

    match task.await {
        Ok(reply) => Json(reply),
        Err(e) => {
            error!(parent: &span, "Chat task failed: {}", e);
            Json(ChatReply::placeholder())
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_request_parsing_is_lenient() {
        // ---
        let req = ChatRequest::from_body(b"not json");
        assert_eq!(req.message, "");
        assert!(req.sensor_data.is_none());
        assert!(req.history.is_empty());

        let req = ChatRequest::from_body(
            br#"{"message":"water?","sensorData":{},"history":[{"role":"user","content":"hi"}]}"#,
        );
        assert_eq!(req.message, "water?");
        assert!(req.sensor_data.is_none());
        assert_eq!(req.history.len(), 1);
    }

    #[test]
    fn test_sent_readings_override_latest() {
        // ---
        let latest = Arc::new(SensorSnapshot::default());

        let req = ChatRequest::from_body(br#"{"message":"x","sensorData":{"soilMoisture":18}}"#);
        let s = req.snapshot(latest.clone());
        assert_eq!(s.soil_moisture, 18.0);
        assert_eq!(s.temperature, 25.0);

        let req = ChatRequest::from_body(br#"{"message":"x"}"#);
        assert_eq!(req.snapshot(latest.clone()), *latest);
    }
}
