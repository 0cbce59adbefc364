use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use krishi_advisor::chat::{ChatGateway, GeminiClient};
use krishi_advisor::{routes, AppState, Config, HistoryStore};

// ---

/// A running server with its own history file and no model API key.
struct TestApp {
    addr: SocketAddr,
    dir: TempDir,
    client: Client,
}

impl TestApp {
    async fn spawn() -> Result<Self> {
        // ---
        let dir = tempfile::tempdir()?;
        let cfg = Config {
            history_file: dir.path().join("history.json"),
            advisor_seed: Some(7),
            ..Config::default()
        };

        let history = HistoryStore::open(&cfg.history_file).await;
        let chat = ChatGateway::new(Arc::new(GeminiClient::from_config(&cfg)?));
        let state = AppState::new(cfg, history, chat).await;
        let app = routes::router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(TestApp {
            addr,
            dir,
            client: Client::new(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn get(&self, path: &str) -> Result<Value> {
        Ok(self.client.get(self.url(path)).send().await?.json().await?)
    }

    async fn post_json(&self, path: &str, body: Value) -> Result<Value> {
        Ok(self.client.post(self.url(path)).json(&body).send().await?.json().await?)
    }
}

#[tokio::test]
async fn health_endpoint_is_ok() -> Result<()> {
    // ---
    let app = TestApp::spawn().await?;
    let body = app.get("/health").await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn ingestion_defaults_missing_and_malformed_fields() -> Result<()> {
    // ---
    let app = TestApp::spawn().await?;

    let resp = app
        .client
        .post(app.url("/api/sensors"))
        .body("definitely not json")
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["dht22"]["temperature"], 25.0);
    assert_eq!(body["data"]["tds"]["value"], 300.0);

    let body = app
        .post_json(
            "/api/sensors",
            json!({"temperature": "31.5", "fc28": "oops", "humidity": 72, "location": {"city": "Ludhiana"}}),
        )
        .await?;
    assert_eq!(body["data"]["dht22"]["temperature"], 31.5);
    assert_eq!(body["data"]["dht22"]["humidity"], 72.0);
    assert_eq!(body["data"]["fc28"]["value"], 50.0);
    assert_eq!(body["data"]["location"]["city"], "Ludhiana");

    let current = app.get("/api/sensors").await?;
    assert_eq!(current["dht22"]["temperature"], 31.5);
    assert_eq!(current["mq135"]["unit"], "ppm");
    Ok(())
}

#[tokio::test]
async fn history_is_flattened_and_persisted() -> Result<()> {
    // ---
    let app = TestApp::spawn().await?;
    for m in [20, 35, 60] {
        app.post_json("/api/sensors", json!({"fc28": m, "mq135": 110}))
            .await?;
    }

    let history = app.get("/api/history").await?;
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["fc28"], 20.0);
    assert_eq!(entries[2]["fc28"], 60.0);
    assert_eq!(entries[2]["mq135"], 110.0);
    assert!(entries[2]["timestamp"].is_string());

    assert_eq!(app.get("/api/sheets/data").await?, history);

    let saved: Value = serde_json::from_slice(&std::fs::read(app.dir.path().join("history.json"))?)?;
    assert_eq!(saved.as_array().unwrap().len(), 3);
    assert_eq!(saved[2]["fc28"]["value"], 60.0);
    Ok(())
}

#[tokio::test]
async fn chat_without_model_answers_in_demo_mode() -> Result<()> {
    // ---
    let app = TestApp::spawn().await?;

    let body = app
        .post_json("/api/chatbot/message", json!({"message": "How is my crop health?"}))
        .await?;
    assert_eq!(body["mode"], "demo");
    assert_eq!(body["language"], "english");
    assert_eq!(body["topic"], "health");
    assert!(!body["response"].as_str().unwrap().is_empty());

    let body = app
        .post_json(
            "/api/chatbot/message",
            json!({"message": "पानी कब दें?", "sensorData": {"soilMoisture": 20}, "history": []}),
        )
        .await?;
    assert_eq!(body["language"], "hindi");
    assert_eq!(body["topic"], "water");
    assert!(body["response"].as_str().unwrap().contains("अभी पानी दें!"));
    Ok(())
}

#[tokio::test]
async fn chat_tolerates_garbage_body() -> Result<()> {
    // ---
    let app = TestApp::spawn().await?;
    let resp = app
        .client
        .post(app.url("/api/chatbot/message"))
        .body("{{{")
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["mode"], "demo");
    Ok(())
}

#[tokio::test]
async fn recommendations_follow_current_reading() -> Result<()> {
    // ---
    let app = TestApp::spawn().await?;
    app.post_json(
        "/api/sensors",
        json!({"fc28": 25, "temperature": 30, "humidity": 70, "mq135": 50, "pm25": 10, "tds": 150}),
    )
    .await?;

    let recs = app.get("/api/agriculture/recommendations").await?;
    assert_eq!(recs["irrigation"]["status"], "critical");
    assert_eq!(recs["irrigation"]["hours_until"], 0);
    assert_eq!(recs["pest"]["status"], "high_risk");
    assert_eq!(recs["pest"]["risk_score"], 60);
    assert_eq!(recs["weather"]["rain_probability"], 40);
    assert_eq!(recs["fertilizer"]["ai_confidence"], 88);
    assert_eq!(recs["ai_insights"][0]["title"], "Soil Moisture Critical");

    let score = app.get("/api/agriculture/health-score").await?;
    assert_eq!(score["score"], 100);
    assert_eq!(score["factors"]["water_quality"], "Pure");
    Ok(())
}

#[tokio::test]
async fn analyze_is_flagged_as_simulated() -> Result<()> {
    // ---
    let app = TestApp::spawn().await?;
    let resp = app
        .client
        .post(app.url("/api/agriculture/analyze"))
        .body(vec![0u8; 256])
        .send()
        .await?;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["simulated"], true);
    let name = body["analysis"]["name"].as_str().unwrap();
    assert!(["Healthy Crop", "Early Blight", "Nutrient Deficiency", "Pest Infestation"].contains(&name));
    Ok(())
}

// ---

/// Read one unmasked server text frame.
async fn read_text_frame(stream: &mut TcpStream) -> Result<Value> {
    // ---
    let mut head = [0u8; 2];
    stream.read_exact(&mut head).await?;
    assert_eq!(head[0], 0x81, "expected a final text frame");

    let len = match head[1] & 0x7f {
        126 => stream.read_u16().await? as usize,
        127 => stream.read_u64().await? as usize,
        n => n as usize,
    };
    let mut payload = vec![0u8; len];
    stream.read_exact(&mut payload).await?;
    Ok(serde_json::from_slice(&payload)?)
}

#[tokio::test]
async fn live_channel_greets_then_streams_ingested_readings() -> Result<()> {
    // ---
    let app = TestApp::spawn().await?;
    app.post_json("/api/sensors", json!({"temperature": 26.5})).await?;

    let mut stream = TcpStream::connect(app.addr).await?;
    let handshake = format!(
        "GET /ws HTTP/1.1\r\nHost: {}\r\nUpgrade: websocket\r\nConnection: Upgrade\r\n\
         Sec-WebSocket-Key: dGhlIHNhbXBsZSBub25jZQ==\r\nSec-WebSocket-Version: 13\r\n\r\n",
        app.addr
    );
    stream.write_all(handshake.as_bytes()).await?;

    let mut response = Vec::new();
    let mut byte = [0u8; 1];
    while !response.ends_with(b"\r\n\r\n") {
        stream.read_exact(&mut byte).await?;
        response.push(byte[0]);
    }
    assert!(String::from_utf8_lossy(&response).starts_with("HTTP/1.1 101"));

    let greeting = read_text_frame(&mut stream).await?;
    assert_eq!(greeting["event"], "sensor_update");
    assert_eq!(greeting["data"]["dht22"]["temperature"], 26.5);

    app.post_json("/api/sensors", json!({"temperature": 29.0})).await?;
    let update = read_text_frame(&mut stream).await?;
    assert_eq!(update["event"], "sensor_update");
    assert_eq!(update["data"]["dht22"]["temperature"], 29.0);
    Ok(())
}
