//! Configuration types for xbridge

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chains::Network;
use crate::errors::ConfigError;

/// Chain data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    /// Replay file with recorded storage values (JSON)
    #[serde(default)]
    pub replay_path: Option<PathBuf>,

    /// Partial fee reported for transfer probes, in the native smallest unit
    #[serde(default = "default_probe_fee")]
    pub probe_fee: u128,
}

fn default_probe_fee() -> u128 {
    480_597_195
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            replay_path: None,
            probe_fee: default_probe_fee(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Network environment (dev, rococo, kusama, polkadot)
    pub network: Network,

    /// Data source settings
    #[serde(default)]
    pub source: SourceConfig,

    /// tracing-subscriber filter directive
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "xbridge=debug,info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: Network::Kusama,
            source: SourceConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.network, Network::Kusama);
        assert_eq!(config.source.probe_fee, 480_597_195);
        assert!(config.source.replay_path.is_none());
        assert_eq!(config.log_filter, "xbridge=debug,info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.network, config.network);
        assert_eq!(parsed.source.probe_fee, config.source.probe_fee);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig = serde_json::from_str(r#"{"network": "rococo"}"#).unwrap();
        assert_eq!(parsed.network, Network::Rococo);
        assert_eq!(parsed.source.probe_fee, 480_597_195);
        assert_eq!(parsed.log_filter, "xbridge=debug,info");
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/xbridge.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
