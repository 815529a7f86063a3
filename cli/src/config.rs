//! Demo configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tally_utils::LogFormat;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for a demo run.
///
/// Loaded from a TOML file via [`DemoConfig::from_toml_file`] or built
/// programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Seed for the random vote paths. Unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Sessions to create, in order.
    #[serde(default = "default_sessions")]
    pub sessions: Vec<SessionConfig>,
}

/// One session to create at start-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub question: String,

    #[serde(default)]
    pub anonymous: bool,

    /// Opaque type tag.
    #[serde(default)]
    pub kind: u32,

    pub choices: Vec<String>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sessions() -> Vec<SessionConfig> {
    let choices: Vec<String> = ["first", "second", "third"]
        .into_iter()
        .map(String::from)
        .collect();
    vec![
        SessionConfig {
            question: "voting1Question".into(),
            anonymous: false,
            kind: 1,
            choices: choices.clone(),
        },
        SessionConfig {
            question: "voting2Question".into(),
            anonymous: false,
            kind: 1,
            choices: choices.clone(),
        },
        SessionConfig {
            question: "voting3Question".into(),
            anonymous: true,
            kind: 0,
            choices,
        },
    ]
}

// ── Impl ───────────────────────────────────────────────────────────────

impl DemoConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            seed: None,
            sessions: default_sessions(),
        }
    }
}
