//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_ultimate::{Mark, Tier};
use tracing::{debug, info, instrument};

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Advisor tier used when a command doesn't name one.
    #[serde(default)]
    default_tier: Tier,

    /// Advisor seed. Entropy is used when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Mark that moves first in new games.
    #[serde(default = "default_first_player")]
    first_player: Mark,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_first_player() -> Mark {
    Mark::X
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_tier: Tier::default(),
            seed: None,
            first_player: default_first_player(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    ///
    /// Runs before the subscriber exists, so it does not log; call
    /// [`AppConfig::log_in_effect`] once tracing is up.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Logs the settings in effect and where they came from.
    #[instrument(skip(self, path))]
    pub fn log_in_effect(&self, path: &Path) {
        let source = if path.exists() { "file" } else { "defaults" };
        info!(
            path = %path.display(),
            source,
            tier = %self.default_tier,
            seed = ?self.seed,
            first_player = %self.first_player,
            log_filter = %self.log_filter,
            "Configuration in effect"
        );
        debug!(config = ?self, "Full configuration");
    }

    /// Loads the file if it exists, otherwise returns defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
