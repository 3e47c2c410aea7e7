//! TOML configuration.
//!
//! Every section and field is optional; a missing file or an empty document
//! yields the defaults. Unknown keys are rejected so typos surface at
//! startup instead of silently falling back.
//!
//! ```toml
//! [log]
//! level = "info"
//!
//! [focus]
//! settle_ms = 50
//!
//! [media]
//! poll_interval_ms = 10
//! max_polls = 100
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::platform::PollPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log: LogConfig,
    pub focus: FocusConfig,
    pub media: MediaConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Default filter for `env_logger`; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FocusConfig {
    /// Pause between focusing a window and sending keys to it.
    pub settle_ms: u64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        FocusConfig { settle_ms: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MediaConfig {
    pub poll_interval_ms: u64,
    pub max_polls: u32,
}

impl Default for MediaConfig {
    fn default() -> Self {
        let policy = PollPolicy::default();
        MediaConfig {
            poll_interval_ms: policy.interval.as_millis() as u64,
            max_polls: policy.max_polls,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.focus.settle_ms)
    }

    pub fn media_poll(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_millis(self.media.poll_interval_ms),
            max_polls: self.media.max_polls,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
