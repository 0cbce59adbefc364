//! External language model port and its Gemini adapter.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Config, SensorSnapshot};

// ---

/// Earlier turns the chat UI sends along, newest last.
pub const MAX_HISTORY_TURNS: usize = 10;

/// One prior chat turn, as sent by the UI (`role` is `user` or `assistant`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

/// Why the external model produced no answer. Every variant sends the
/// gateway down the offline path.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("language model is not configured")]
    NotConfigured,

    #[error("language model timed out after {0:?}")]
    Timeout(Duration),

    #[error("language model request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("language model returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("language model returned an empty reply")]
    EmptyReply,

    #[error("could not decode language model reply: {0}")]
    Decode(String),
}

/// Anything that can answer a farmer's question given the current readings.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn ask(
        &self,
        message: &str,
        snapshot: &SensorSnapshot,
        history: &[ChatMessage],
    ) -> Result<String, ModelError>;
}

// ---

/// Google Gemini `generateContent` client.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ReplyContent>,
}

#[derive(Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiClient {
    // ---
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        // ---
        let http = reqwest::Client::builder()
            .timeout(cfg.model_timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build model HTTP client: {}", e))?;

        Ok(GeminiClient {
            http,
            api_key: cfg.gemini_api_key.clone(),
            base_url: cfg.gemini_api_url.clone(),
            model: cfg.gemini_model.clone(),
            timeout: cfg.model_timeout,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn ask(
        &self,
        message: &str,
        snapshot: &SensorSnapshot,
        history: &[ChatMessage],
    ) -> Result<String, ModelError> {
        // ---
        let api_key = self.api_key.as_deref().ok_or(ModelError::NotConfigured)?;
        let prompt = build_prompt(message, snapshot, history);
        let body = GenerateRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: &prompt }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "Calling language model");

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let reply: GenerateResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ModelError::Timeout(self.timeout)
            } else {
                ModelError::Decode(e.to_string())
            }
        })?;

        extract_text(reply)
    }
}

impl GeminiClient {
    fn classify(&self, e: reqwest::Error) -> ModelError {
        if e.is_timeout() {
            ModelError::Timeout(self.timeout)
        } else {
            ModelError::Transport(e)
        }
    }
}

fn extract_text(reply: GenerateResponse) -> Result<String, ModelError> {
    // ---
    let text: String = reply
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        Err(ModelError::EmptyReply)
    } else {
        Ok(text.to_string())
    }
}

/// Advisor prompt: live readings, instructions, recent turns, the question.
pub fn build_prompt(message: &str, s: &SensorSnapshot, history: &[ChatMessage]) -> String {
    // ---
    let mut prompt = format!(
        "You are an expert agricultural advisor helping farmers in India.\n\
         \n\
         Current Farm Sensor Data (REAL-TIME):\n\
         🌡️  Temperature: {}°C\n\
         💧 Humidity: {}%\n\
         🌱 Soil Moisture: {}%\n\
         💨 Air Quality (MQ-135): {} ppm\n\
         🌫️  PM2.5: {} µg/m³\n\
         🌫️  PM10: {} µg/m³\n\
         🚰 Water Quality (TDS): {} ppm\n\
         \n\
         IMPORTANT INSTRUCTIONS:\n\
         1. Give practical, actionable farming advice based on these REAL sensor readings\n\
         2. If the farmer asks in Hindi, Punjabi, or any Indian language, reply in the SAME language\n\
         3. If the farmer asks in English, reply in English\n\
         4. Keep answers concise and farmer-friendly (2-4 sentences)\n\
         5. Reference the actual sensor values in your response\n\
         6. Focus on immediate actions the farmer can take\n",
        s.temperature, s.humidity, s.soil_moisture, s.air_quality, s.pm25, s.pm10, s.water_quality,
    );

    let recent = &history[history.len().saturating_sub(MAX_HISTORY_TURNS)..];
    if !recent.is_empty() {
        prompt.push_str("\nRecent conversation:\n");
        for turn in recent {
            let speaker = if turn.role == "user" { "Farmer" } else { "Advisor" };
            prompt.push_str(&format!("{}: {}\n", speaker, turn.content));
        }
    }

    prompt.push_str("\nFarmer's Question: ");
    prompt.push_str(message);
    prompt
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    fn turn(role: &str, content: &str) -> ChatMessage {
        ChatMessage {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    async fn spawn_fake_model(status: StatusCode, body: Value) -> String {
        // ---
        let app = Router::new().route(
            "/v1beta/models/{action}",
            post(move || {
                let body = body.clone();
                async move { (status, Json(body)) }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v1beta", addr)
    }

    fn client_for(base_url: String) -> GeminiClient {
        // ---
        let cfg = Config {
            gemini_api_key: Some("test-key".to_string()),
            gemini_api_url: base_url,
            model_timeout: Duration::from_secs(5),
            ..Config::default()
        };
        GeminiClient::from_config(&cfg).unwrap()
    }

    #[test]
    fn test_prompt_embeds_readings_and_recent_turns() {
        // ---
        let snapshot = SensorSnapshot {
            temperature: 31.5,
            soil_moisture: 22.0,
            ..SensorSnapshot::default()
        };
        let history: Vec<ChatMessage> = (0..14)
            .map(|i| turn(if i % 2 == 0 { "user" } else { "assistant" }, &format!("turn {}", i)))
            .collect();

        let prompt = build_prompt("Should I water today?", &snapshot, &history);

        assert!(prompt.contains("Temperature: 31.5°C"));
        assert!(prompt.contains("Soil Moisture: 22%"));
        assert!(!prompt.contains("turn 3\n"));
        assert!(prompt.contains("Farmer: turn 4"));
        assert!(prompt.contains("Advisor: turn 13"));
        assert!(prompt.ends_with("Farmer's Question: Should I water today?"));
    }

    #[test]
    fn test_unconfigured_client_fails_fast() {
        // ---
        let client = GeminiClient::from_config(&Config::default()).unwrap();
        let result = tokio_test::block_on(client.ask("hi", &SensorSnapshot::default(), &[]));
        assert!(matches!(result, Err(ModelError::NotConfigured)));
    }

    #[test]
    fn test_extract_text_joins_parts() {
        // ---
        let reply: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "Water "}, {"text": "tonight."}]}}]
        }))
        .unwrap();
        assert_eq!(extract_text(reply).unwrap(), "Water tonight.");

        let empty: GenerateResponse = serde_json::from_value(json!({"candidates": []})).unwrap();
        assert!(matches!(extract_text(empty), Err(ModelError::EmptyReply)));
    }

    #[tokio::test]
    async fn test_ask_returns_model_text() {
        // ---
        let base = spawn_fake_model(
            StatusCode::OK,
            json!({"candidates": [{"content": {"parts": [{"text": "  Irrigate at dawn.  "}]}}]}),
        )
        .await;

        let reply = client_for(base)
            .ask("When to irrigate?", &SensorSnapshot::default(), &[])
            .await
            .unwrap();
        assert_eq!(reply, "Irrigate at dawn.");
    }

    #[tokio::test]
    async fn test_ask_maps_quota_errors_to_status() {
        // ---
        let base = spawn_fake_model(
            StatusCode::TOO_MANY_REQUESTS,
            json!({"error": {"message": "quota exceeded"}}),
        )
        .await;

        let err = client_for(base)
            .ask("hi", &SensorSnapshot::default(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::Status { status: 429, .. }));
    }
}
