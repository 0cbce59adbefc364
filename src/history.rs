//! Bounded reading history persisted to a flat JSON file.
//!
//! The whole log is rewritten on every append (temp file + rename). Storage
//! failures are logged and never reach the caller: ingestion keeps working
//! even when the disk does not.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::sync::Mutex;

use crate::{HistoryEntry, SensorSnapshot};

// ---

/// Entries kept; the oldest are evicted first.
pub const HISTORY_CAP: usize = 1000;

/// Entries returned by the history endpoints.
pub const HISTORY_VIEW: usize = 100;

pub struct HistoryStore {
    path: Option<PathBuf>,
    cap: usize,
    entries: Mutex<VecDeque<SensorSnapshot>>,
}

impl HistoryStore {
    // ---
    /// Load the log from `path`. A missing file starts an empty log; an
    /// unreadable or corrupt one is logged and also starts empty.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        // ---
        let path = path.into();
        let entries = match load(&path).await {
            Ok(Some(mut loaded)) => {
                let excess = loaded.len().saturating_sub(HISTORY_CAP);
                loaded.drain(..excess);
                tracing::info!("Loaded {} history entries from {}", loaded.len(), path.display());
                VecDeque::from(loaded)
            }
            Ok(None) => {
                tracing::info!("No history file at {}, starting empty", path.display());
                VecDeque::new()
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable history file {}: {:#}", path.display(), e);
                VecDeque::new()
            }
        };

        HistoryStore {
            path: Some(path),
            cap: HISTORY_CAP,
            entries: Mutex::new(entries),
        }
    }

    /// A log that is never written to disk.
    pub fn in_memory() -> Self {
        HistoryStore {
            path: None,
            cap: HISTORY_CAP,
            entries: Mutex::new(VecDeque::new()),
        }
    }

    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap.max(1);
        self
    }

    /// Append, evict past the cap, and persist, all under one lock.
    pub async fn append(&self, snapshot: SensorSnapshot) {
        // ---
        let mut entries = self.entries.lock().await;
        entries.push_back(snapshot);
        while entries.len() > self.cap {
            entries.pop_front();
        }

        if let Some(path) = &self.path {
            if let Err(e) = persist(path, &entries).await {
                tracing::error!("Failed to persist history to {}: {:#}", path.display(), e);
            }
        }
    }

    /// Up to `limit` most recent entries, oldest first, in flat form.
    pub async fn recent(&self, limit: usize) -> Vec<HistoryEntry> {
        // ---
        let entries = self.entries.lock().await;
        let skip = entries.len().saturating_sub(limit);
        entries.iter().skip(skip).map(HistoryEntry::from).collect()
    }

    pub async fn latest(&self) -> Option<SensorSnapshot> {
        self.entries.lock().await.back().cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

// ---

async fn load(path: &Path) -> Result<Option<Vec<SensorSnapshot>>> {
    // ---
    let bytes = match tokio::fs::read(path).await {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).context("read failed"),
    };
    let entries = serde_json::from_slice(&bytes).context("not a JSON array of readings")?;
    Ok(Some(entries))
}

async fn persist(path: &Path, entries: &VecDeque<SensorSnapshot>) -> Result<()> {
    // ---
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("create {}", dir.display()))?;
    }

    let json = serde_json::to_vec_pretty(entries).context("serialize history")?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json)
        .await
        .with_context(|| format!("write {}", tmp.display()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .with_context(|| format!("rename {} into place", tmp.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reading(moisture: f64) -> SensorSnapshot {
        SensorSnapshot {
            soil_moisture: moisture,
            timestamp: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            ..SensorSnapshot::default()
        }
    }

    #[tokio::test]
    async fn test_cap_evicts_oldest_first() {
        // ---
        let store = HistoryStore::in_memory().with_cap(3);
        for m in 1..=5 {
            store.append(reading(m as f64)).await;
        }

        assert_eq!(store.len().await, 3);
        let fc28: Vec<f64> = store.recent(10).await.iter().map(|e| e.fc28).collect();
        assert_eq!(fc28, vec![3.0, 4.0, 5.0]);
    }

    #[tokio::test]
    async fn test_default_cap_drops_only_the_first_entry() {
        // ---
        let store = HistoryStore::in_memory();
        for m in 0..=HISTORY_CAP {
            store.append(reading(m as f64)).await;
        }

        assert_eq!(store.len().await, HISTORY_CAP);
        let all = store.recent(HISTORY_CAP).await;
        assert_eq!(all.len(), 1000);
        assert_eq!(all[0].fc28, 1.0);
        assert_eq!(all[999].fc28, 1000.0);
    }

    #[tokio::test]
    async fn test_recent_returns_newest_slice() {
        // ---
        let store = HistoryStore::in_memory();
        for m in 0..150 {
            store.append(reading(m as f64)).await;
        }

        let view = store.recent(HISTORY_VIEW).await;
        assert_eq!(view.len(), 100);
        assert_eq!(view[0].fc28, 50.0);
        assert_eq!(view[99].fc28, 149.0);
        assert_eq!(store.latest().await.unwrap().soil_moisture, 149.0);
    }

    #[tokio::test]
    async fn test_round_trip_through_file() {
        // ---
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let store = HistoryStore::open(&path).await;
        assert!(store.is_empty().await);
        store.append(reading(12.5)).await;
        store.append(reading(40.0)).await;
        drop(store);

        let reopened = HistoryStore::open(&path).await;
        assert_eq!(reopened.len().await, 2);
        assert_eq!(reopened.latest().await.unwrap(), reading(40.0));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_empty() {
        // ---
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let store = HistoryStore::open(&path).await;
        assert!(store.is_empty().await);

        store.append(reading(30.0)).await;
        assert_eq!(HistoryStore::open(&path).await.len().await, 1);
    }

    #[tokio::test]
    async fn test_write_failure_keeps_entry_in_memory() {
        // ---
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = dir.path().join("history.json");
        std::fs::create_dir(&path).unwrap();

        let store = HistoryStore::open(&path).await;
        store.append(reading(30.0)).await;
        assert_eq!(store.len().await, 1);
    }
}
