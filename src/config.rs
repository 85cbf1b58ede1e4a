//! Configuration loading and management.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to parse the config file.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Auto-poll scheduler timing.
///
/// The interval is the delay between scheduler ticks, not how often a single
/// channel is polled (each channel is currently polled at most once per
/// session). The enable flag itself lives on the connection's settings, not
/// here, so it can be toggled without restarting the scheduler.
#[derive(Debug, Clone, Deserialize)]
pub struct AutoPollConfig {
    /// Delay before the first tick, in milliseconds (default: 1000).
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    /// Delay between ticks, in seconds (default: 30).
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for AutoPollConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: default_initial_delay_ms(),
            interval_secs: default_interval_secs(),
        }
    }
}

impl AutoPollConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_interval_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_values_are_correct() {
        let config = AutoPollConfig::default();
        assert_eq!(config.initial_delay_ms, 1000);
        assert_eq!(config.interval_secs, 30);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: AutoPollConfig = toml::from_str("").unwrap();
        assert_eq!(config.initial_delay_ms, 1000);
        assert_eq!(config.interval_secs, 30);
    }

    #[test]
    fn partial_toml_overrides_one_field() {
        let config: AutoPollConfig = toml::from_str("interval_secs = 60").unwrap();
        assert_eq!(config.initial_delay_ms, 1000);
        assert_eq!(config.interval_secs, 60);
    }

    #[test]
    fn load_reads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "initial_delay_ms = 250\ninterval_secs = 5").unwrap();
        let config = AutoPollConfig::load(file.path()).unwrap();
        assert_eq!(config.initial_delay_ms, 250);
        assert_eq!(config.interval_secs, 5);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = AutoPollConfig::load(Path::new("/nonexistent/autopoll.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
