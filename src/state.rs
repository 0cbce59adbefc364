//! Shared application state handed to every route.

use std::sync::{Arc, Mutex, RwLock};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::broadcast;

use crate::chat::ChatGateway;
use crate::history::HistoryStore;
use crate::{Config, SensorSnapshot};

// ---

/// Live viewers that fall further behind than this skip ahead.
const BROADCAST_CAPACITY: usize = 64;

/// Sole owner of the current snapshot. Readers get a cheap `Arc` clone and
/// writers swap the whole value, so nobody sees a half-updated reading.
pub struct SnapshotStore {
    current: RwLock<Arc<SensorSnapshot>>,
}

impl SnapshotStore {
    // ---
    pub fn new(initial: SensorSnapshot) -> Self {
        SnapshotStore {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    pub fn get(&self) -> Arc<SensorSnapshot> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn set(&self, snapshot: SensorSnapshot) -> Arc<SensorSnapshot> {
        // ---
        let next = Arc::new(snapshot);
        match self.current.write() {
            Ok(mut guard) => *guard = Arc::clone(&next),
            Err(poisoned) => *poisoned.into_inner() = Arc::clone(&next),
        }
        next
    }
}

/// Fan-out of newly ingested snapshots to live viewers.
#[derive(Clone)]
pub struct Broadcaster {
    tx: broadcast::Sender<Arc<SensorSnapshot>>,
}

impl Broadcaster {
    // ---
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Broadcaster { tx }
    }

    /// Returns how many viewers received it. Zero viewers is not an error.
    pub fn publish(&self, snapshot: Arc<SensorSnapshot>) -> usize {
        self.tx.send(snapshot).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Arc<SensorSnapshot>> {
        self.tx.subscribe()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct AppState {
    // ---
    pub config: Arc<Config>,
    pub snapshots: Arc<SnapshotStore>,
    pub history: Arc<HistoryStore>,
    pub broadcaster: Broadcaster,
    pub chat: ChatGateway,
    /// Drives the fertilizer simulation and the analysis stub.
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    // ---
    /// Build state around an opened history. The current snapshot starts
    /// from the newest persisted entry, or neutral defaults.
    pub async fn new(config: Config, history: HistoryStore, chat: ChatGateway) -> Self {
        // ---
        let initial = match history.latest().await {
            Some(last) => {
                tracing::info!("Seeding current reading from history ({})", last.timestamp_string());
                last
            }
            None => SensorSnapshot::default(),
        };

        let rng = match config.advisor_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        AppState {
            config: Arc::new(config),
            snapshots: Arc::new(SnapshotStore::new(initial)),
            history: Arc::new(history),
            broadcaster: Broadcaster::new(),
            chat,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Run `f` with exclusive use of the shared RNG.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // ---
        let mut guard = match self.rng.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::chat::GeminiClient;
    use rand::Rng;

    fn offline_gateway() -> ChatGateway {
        ChatGateway::new(Arc::new(GeminiClient::from_config(&Config::default()).unwrap()))
    }

    #[test]
    fn test_set_replaces_whole_snapshot() {
        // ---
        let store = SnapshotStore::new(SensorSnapshot::default());
        let before = store.get();

        store.set(SensorSnapshot {
            temperature: 33.0,
            ..SensorSnapshot::default()
        });

        assert_eq!(before.temperature, 25.0);
        assert_eq!(store.get().temperature, 33.0);
    }

    #[tokio::test]
    async fn test_publish_without_viewers_is_fine() {
        // ---
        let b = Broadcaster::new();
        assert_eq!(b.publish(Arc::new(SensorSnapshot::default())), 0);

        let mut rx = b.subscribe();
        assert_eq!(b.publish(Arc::new(SensorSnapshot::default())), 1);
        assert!(rx.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_state_seeds_from_history() {
        // ---
        let history = HistoryStore::in_memory();
        history
            .append(SensorSnapshot {
                soil_moisture: 12.0,
                ..SensorSnapshot::default()
            })
            .await;

        let state = AppState::new(Config::default(), history, offline_gateway()).await;
        assert_eq!(state.snapshots.get().soil_moisture, 12.0);
    }

    #[tokio::test]
    async fn test_seeded_rng_is_reproducible() {
        // ---
        let cfg = Config {
            advisor_seed: Some(5),
            ..Config::default()
        };
        let a = AppState::new(cfg.clone(), HistoryStore::in_memory(), offline_gateway()).await;
        let b = AppState::new(cfg, HistoryStore::in_memory(), offline_gateway()).await;

        let x: u64 = a.with_rng(|r| r.gen());
        let y: u64 = b.with_rng(|r| r.gen());
        assert_eq!(x, y);
    }
}
