//! Load — config loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::ForwarderConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid interval duration '{value}': {source}")]
    InvalidInterval {
        value: String,
        source: humantime::DurationError,
    },

    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    Toml {
        path: String,
        source: Box<toml::de::Error>,
    },
}

impl ForwarderConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = std::env::var("FORWARDER_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/logdrop/forwarder.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!("Config file not found at {}, using environment variables", config_path);
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let mut file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;

        let config: ForwarderConfig = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_string(),
            source: Box::new(source),
        })?;
        Ok(config)
    }

    /// Apply environment-variable overrides for the canonical settings.
    ///
    /// A set-but-blank `INTERVAL` or `MESSAGE_PATH` counts as unset, matching
    /// producers that export the variables unconditionally.
    fn apply_overrides<F>(&mut self, get: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = get("INTERVAL") {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                self.interval =
                    humantime::parse_duration(trimmed).map_err(|source| ConfigError::InvalidInterval {
                        value: trimmed.to_string(),
                        source,
                    })?;
            }
        }
        if let Some(path) = get("MESSAGE_PATH") {
            if !path.trim().is_empty() {
                self.message_path = path;
            }
        }
        if let Some(flag) = get("DEBUG") {
            // Only the literal string "true" enables tracing.
            self.debug = flag == "true";
        }
        Ok(())
    }
}
