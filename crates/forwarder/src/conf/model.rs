//! Model — ForwarderConfig and defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_MESSAGE_PATH: &str = "./messages";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwarderConfig {
    /// Poll period between directory scans.
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    /// Directory watched for message files.
    pub message_path: String,
    /// Emit an INFO line for every intermediate decoding step.
    pub debug: bool,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            message_path: DEFAULT_MESSAGE_PATH.to_string(),
            debug: false,
        }
    }
}

impl ForwarderConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.interval.is_zero() {
            return Err("interval must be > 0".to_string());
        }
        if self.message_path.is_empty() {
            return Err("message_path must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── ForwarderConfig Defaults ─────────────────────────────────

    #[test]
    fn test_default_interval() {
        let cfg = ForwarderConfig::default();
        assert_eq!(cfg.interval, Duration::from_secs(5));
    }

    #[test]
    fn test_default_message_path() {
        let cfg = ForwarderConfig::default();
        assert_eq!(cfg.message_path, "./messages");
    }

    #[test]
    fn test_default_debug_off() {
        let cfg = ForwarderConfig::default();
        assert!(!cfg.debug);
    }

    // ── Validation ───────────────────────────────────────────────

    #[test]
    fn test_validate_default_passes() {
        assert!(ForwarderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_interval() {
        let cfg = ForwarderConfig {
            interval: Duration::ZERO,
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.contains("interval"), "Error should mention interval: {}", err);
    }

    #[test]
    fn test_validate_empty_message_path() {
        let cfg = ForwarderConfig {
            message_path: String::new(),
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.contains("message_path"), "Error should mention message_path: {}", err);
    }

    // ── Serialization Round-trip ─────────────────────────────────

    #[test]
    fn test_config_toml_round_trip() {
        let cfg = ForwarderConfig::default();
        let toml_str = toml::to_string(&cfg).expect("Should serialize to TOML");
        let deserialized: ForwarderConfig = toml::from_str(&toml_str).expect("Should deserialize from TOML");
        assert_eq!(deserialized.interval, cfg.interval);
        assert_eq!(deserialized.message_path, cfg.message_path);
    }

    #[test]
    fn test_config_deserialize_partial_toml() {
        // Only set interval; rest should use defaults via #[serde(default)]
        let toml_str = r#"interval = "30s""#;
        let cfg: ForwarderConfig = toml::from_str(toml_str).expect("Should accept partial TOML");
        assert_eq!(cfg.interval, Duration::from_secs(30));
        assert_eq!(cfg.message_path, "./messages"); // default
        assert!(!cfg.debug); // default
    }

    #[test]
    fn test_config_deserialize_humantime_minutes() {
        let toml_str = r#"interval = "1m""#;
        let cfg: ForwarderConfig = toml::from_str(toml_str).expect("Should parse humantime duration");
        assert_eq!(cfg.interval, Duration::from_secs(60));
    }
}
