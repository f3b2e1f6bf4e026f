// src/config/app.rs
use std::path::PathBuf;

use crate::transactions::store::DEFAULT_DATA_PATH;

pub const ENV_DATA_PATH: &str = "FINTRACK_DATA_PATH";
pub const ENV_TACTICS_PATH: &str = "FINTRACK_TACTICS_PATH";
pub const ENV_MAX_MESSAGE_CHARS: &str = "FINTRACK_MAX_MESSAGE_CHARS";
pub const ENV_METRICS: &str = "FINTRACK_METRICS";
pub const ENV_DEV_LOG: &str = "FINTRACK_DEV_LOG";
pub const ENV_LOG_FORMAT: &str = "FINTRACK_LOG_FORMAT";

pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON fixture with the synthetic transactions.
    pub data_path: PathBuf,
    /// Optional catalog override; `None` means the built-in Spanish catalog.
    pub tactics_path: Option<PathBuf>,
    /// Upper bound on `message` length, in chars.
    pub max_message_chars: usize,
    /// Expose `/metrics`.
    pub metrics_enabled: bool,
    /// Per-request analysis logs (hashed message id only).
    pub dev_log: bool,
    pub json_logs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            tactics_path: None,
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
            metrics_enabled: false,
            dev_log: false,
            json_logs: false,
        }
    }
}

impl AppConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first if a
    /// local `.env` should be honored.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to the
    /// defaults.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        let non_empty = |k: &str| get(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            data_path: non_empty(ENV_DATA_PATH)
                .map(PathBuf::from)
                .unwrap_or(d.data_path),
            tactics_path: non_empty(ENV_TACTICS_PATH).map(PathBuf::from),
            max_message_chars: parse_limit(non_empty(ENV_MAX_MESSAGE_CHARS))
                .unwrap_or(d.max_message_chars),
            metrics_enabled: flag(non_empty(ENV_METRICS)),
            dev_log: flag(non_empty(ENV_DEV_LOG)),
            json_logs: non_empty(ENV_LOG_FORMAT)
                .is_some_and(|v| v.eq_ignore_ascii_case("json")),
        }
    }
}

// parse a positive char limit; zero or garbage means "use default"
fn parse_limit(raw: Option<String>) -> Option<usize> {
    raw.and_then(|s| s.parse::<usize>().ok()).filter(|n| *n > 0)
}

fn flag(raw: Option<String>) -> bool {
    matches!(
        raw.as_deref().map(str::to_ascii_lowercase).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}
