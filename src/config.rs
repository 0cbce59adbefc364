//! Configuration loader for the `krishi-advisor` service.
//!
//! Centralizes all runtime configuration values and their defaults, loading
//! from environment variables (with optional `.env` file support provided by
//! the caller). Every value has a default; only malformed values are errors.
//!
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u32 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u32>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse an optional `u64` environment variable, `None` when unset.
macro_rules! parse_env_opt_u64 {
    ($var_name:expr) => {
        env::var($var_name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
    };
}

/// Read a string environment variable with a default value.
macro_rules! env_or {
    ($var_name:expr, $default:expr) => {
        env::var($var_name).unwrap_or_else(|_| $default.to_string())
    };
}

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";
pub const DEFAULT_HISTORY_FILE: &str = "data/history.json";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL_TIMEOUT_SECS: u32 = 20;

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// JSON file the reading history is persisted to.
    pub history_file: PathBuf,

    /// Gemini API key. `None` keeps the chatbot in offline mode.
    pub gemini_api_key: Option<String>,

    /// Gemini model name, e.g. `gemini-2.0-flash`.
    pub gemini_model: String,

    /// Gemini REST base URL (no trailing slash).
    pub gemini_api_url: String,

    /// Upper bound for a single model call.
    pub model_timeout: Duration,

    /// Fixed seed for the fertilizer estimator; entropy when unset.
    pub advisor_seed: Option<u64>,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `BIND_ADDR` – listen address (default: 0.0.0.0:5001)
/// - `HISTORY_FILE` – history persistence file (default: data/history.json)
/// - `GEMINI_API_KEY` – enables the external model (default: unset)
/// - `GEMINI_MODEL` – model name (default: gemini-2.0-flash)
/// - `GEMINI_API_URL` – REST base URL
/// - `MODEL_TIMEOUT_SECS` – model call timeout (default: 20)
/// - `ADVISOR_SEED` – fixed RNG seed (default: unset)
///
/// Returns an error if any variable is present but malformed.
pub fn load_from_env() -> Result<Config> {
    // ---
    let bind_raw = env_or!("BIND_ADDR", DEFAULT_BIND_ADDR);
    let bind_addr = bind_raw
        .parse::<SocketAddr>()
        .map_err(|e| anyhow!("Invalid BIND_ADDR '{}': {}", bind_raw, e))?;

    let history_file = PathBuf::from(env_or!("HISTORY_FILE", DEFAULT_HISTORY_FILE));
    let gemini_api_key = env::var("GEMINI_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());
    let gemini_model = env_or!("GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    let gemini_api_url = env_or!("GEMINI_API_URL", DEFAULT_GEMINI_API_URL)
        .trim_end_matches('/')
        .to_string();
    let timeout_secs = parse_env_u32!("MODEL_TIMEOUT_SECS", DEFAULT_MODEL_TIMEOUT_SECS);
    let advisor_seed = parse_env_opt_u64!("ADVISOR_SEED");

    Ok(Config {
        bind_addr,
        history_file,
        gemini_api_key,
        gemini_model,
        gemini_api_url,
        model_timeout: Duration::from_secs(u64::from(timeout_secs)),
        advisor_seed,
    })
}

impl Default for Config {
    /// Offline configuration: no API key, history under `data/`.
    fn default() -> Self {
        Config {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5001)),
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_url: DEFAULT_GEMINI_API_URL.to_string(),
            model_timeout: Duration::from_secs(u64::from(DEFAULT_MODEL_TIMEOUT_SECS)),
            advisor_seed: None,
        }
    }
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    ///
    /// The API key is masked; only whether it is set and its last four
    /// characters are shown.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  BIND_ADDR          : {}", self.bind_addr);
        tracing::info!("  HISTORY_FILE       : {}", self.history_file.display());
        tracing::info!("  GEMINI_API_KEY     : {}", self.masked_api_key());
        tracing::info!("  GEMINI_MODEL       : {}", self.gemini_model);
        tracing::info!("  GEMINI_API_URL     : {}", self.gemini_api_url);
        tracing::info!("  MODEL_TIMEOUT_SECS : {}", self.model_timeout.as_secs());
        match self.advisor_seed {
            Some(seed) => tracing::info!("  ADVISOR_SEED       : {}", seed),
            None => tracing::info!("  ADVISOR_SEED       : <entropy>"),
        }
    }

    fn masked_api_key(&self) -> String {
        // ---
        match &self.gemini_api_key {
            None => "<unset, offline mode>".to_string(),
            Some(key) => {
                let chars: Vec<char> = key.chars().collect();
                let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
                format!("****{}", tail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_default_is_offline() {
        // ---
        let cfg = Config::default();
        assert!(cfg.gemini_api_key.is_none());
        assert_eq!(cfg.bind_addr.port(), 5001);
        assert_eq!(cfg.model_timeout, Duration::from_secs(20));
        assert_eq!(cfg.masked_api_key(), "<unset, offline mode>");
    }

    #[test]
    fn test_api_key_is_masked() {
        // ---
        let cfg = Config {
            gemini_api_key: Some("AIzaSyExampleKey1234".to_string()),
            ..Config::default()
        };
        let masked = cfg.masked_api_key();
        assert_eq!(masked, "****1234");
        assert!(!masked.contains("AIza"));

        let short = Config {
            gemini_api_key: Some("ab".to_string()),
            ..Config::default()
        };
        assert_eq!(short.masked_api_key(), "****ab");
    }
}
