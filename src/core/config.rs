use crate::sources::cloudseim::catalog::EventSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_EVENTS: i64 = 100;
pub const DEFAULT_DELAY_MS: i64 = 50;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Error while loading or parsing a config file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    MissingApiBase,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config io error: {err}"),
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
            ConfigError::MissingApiBase => {
                write!(f, "an api base is required (pass --api-base or set dispatch.api_base)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Top-level simulator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Optional RNG seed for deterministic output.
    pub seed: Option<u64>,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    /// Delivery target and pacing.
    pub dispatch: DispatchConfig,
    /// Event factory settings.
    pub source: SourceConfig,
}

impl Config {
    /// Loads a config file from TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// Delivery target and pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Base URL of the ingestion service; events go to `{api_base}/logs`.
    pub api_base: Option<String>,
    /// Number of events to send. Negative values mean none.
    pub events: i64,
    /// Pause between sends. Negative values mean no pause.
    pub delay_ms: i64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            events: DEFAULT_EVENTS,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl DispatchConfig {
    pub fn require_api_base(&self) -> Result<&str, ConfigError> {
        self.api_base
            .as_deref()
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .ok_or(ConfigError::MissingApiBase)
    }
}

/// Event factory settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Which event kinds take part in selection.
    pub event_set: EventSet,
}
