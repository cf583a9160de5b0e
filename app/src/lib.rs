//! xbridge application library

pub mod cli;
pub mod commands;
pub mod dto;
pub mod state;

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use xbridge_core::AppConfig;

use cli::Cli;

/// Install the global subscriber. `RUST_LOG` wins over the configured filter.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the effective configuration: file (or defaults), then CLI overrides
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => AppConfig::default(),
    };

    if let Some(network) = cli.network {
        config.network = network.into();
    }
    if let Some(replay) = &cli.replay {
        config.source.replay_path = Some(replay.clone());
    }

    Ok(config)
}

fn read_config(path: &Path) -> Result<AppConfig> {
    AppConfig::load(path).with_context(|| format!("Failed to load config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use xbridge_core::Network;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "xbridge", "--network", "dev", "--replay", "fixtures/dev.json", "routes",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();

        assert_eq!(config.network, Network::Dev);
        assert_eq!(
            config.source.replay_path.as_deref(),
            Some(Path::new("fixtures/dev.json"))
        );
        assert_eq!(config.log_filter, "xbridge=debug,info");
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::try_parse_from(["xbridge", "--config", "/nonexistent.json", "routes"])
            .unwrap();
        let err = load_config(&cli).unwrap_err();
        assert!(err.to_string().contains("/nonexistent.json"));
    }
}
