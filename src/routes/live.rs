//! Live reading feed over WebSocket.
//!
//! A viewer gets the current snapshot right after connecting and then one
//! message per ingested reading, each shaped
//! `{"event":"sensor_update","data":<snapshot>}`. Viewers that fall behind
//! skip the readings they missed.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
    routing::get,
    Router,
};
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::{AppState, SensorSnapshot};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/ws", get(upgrade))
}

#[derive(Serialize)]
struct LiveEvent<'a> {
    event: &'static str,
    data: &'a SensorSnapshot,
}

fn frame(snapshot: &SensorSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string(&LiveEvent {
        event: "sensor_update",
        data: snapshot,
    })
}

async fn upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| stream_updates(socket, state))
}

async fn send(socket: &mut WebSocket, snapshot: &SensorSnapshot) -> anyhow::Result<()> {
    // ---
    let text = frame(snapshot)?;
    socket.send(Message::Text(text.into())).await?;
    Ok(())
}

async fn stream_updates(mut socket: WebSocket, state: AppState) {
    // ---
    // Subscribe first so nothing ingested after the greeting is lost.
    let mut updates = state.broadcaster.subscribe();
    info!("Live viewer connected");

    if let Err(e) = send(&mut socket, &state.snapshots.get()).await {
        warn!("Live viewer dropped before greeting: {:#}", e);
        return;
    }

    loop {
        tokio::select! {
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    debug!("Live viewer socket error: {}", e);
                    break;
                }
            },
            update = updates.recv() => match update {
                Ok(snapshot) => {
                    if let Err(e) = send(&mut socket, &snapshot).await {
                        debug!("Live viewer send failed: {:#}", e);
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    debug!("Live viewer lagged, skipped {} readings", skipped);
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    info!("Live viewer disconnected");
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_frame_shape() {
        // ---
        let snapshot = SensorSnapshot {
            temperature: 27.5,
            ..SensorSnapshot::default()
        };
        let v: Value = serde_json::from_str(&frame(&snapshot).unwrap()).unwrap();

        assert_eq!(v["event"], "sensor_update");
        assert_eq!(v["data"]["dht22"]["temperature"], 27.5);
        assert!(v["data"]["timestamp"].is_string());
    }
}
