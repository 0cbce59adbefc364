//! Farm advisory backend: sensor ingestion, bounded history, live updates,
//! rule-based agronomic advice and a multilingual farming chatbot.
//!
//! Modules follow the Explicit Module Boundary Pattern (EMBP): siblings
//! reach shared types through the crate root re-exports below rather than
//! through each other's paths.

pub mod advisory;
pub mod analysis;
pub mod chat;
pub mod classifier;
pub mod config;
pub mod history;
pub mod models;
pub mod routes;
pub mod state;

pub use config::Config;
pub use history::HistoryStore;
pub use models::{HistoryEntry, Location, RawSensorReading, SensorSnapshot};
pub use state::AppState;
