//! Application state: configuration, data source and initialized adapters

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use bridge_adapter::CrossChainAdapter;
use chain_source::{ChainDataSource, InMemorySource, ReplayFile};
use moonbeam::{MoonbeamAdapter, MoonriverAdapter};
use oak::{TuringAdapter, TuringLocalAdapter, TuringStagingAdapter};
use tracing::info;
use xbridge_core::{AppConfig, Network};
use xcm_tx::{JsonTxBuilder, TransactionBuilder};

/// Adapters of one network environment, bound to a shared data source
pub struct AppState {
    config: AppConfig,
    source: InMemorySource,
    adapters: Vec<Box<dyn CrossChainAdapter>>,
}

impl AppState {
    /// Load the configured replay file (if any) and initialize every adapter
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        let source = match &config.source.replay_path {
            Some(path) => {
                let replay = ReplayFile::load(path)
                    .with_context(|| format!("Failed to load replay {}", path.display()))?;
                info!(path = %path.display(), entries = replay.entries.len(), "Replay loaded");
                InMemorySource::from_replay(&replay)
            }
            None => InMemorySource::new(),
        };

        Self::with_source(config, source).await
    }

    /// Initialize every adapter of the configured network against `source`
    pub async fn with_source(config: AppConfig, source: InMemorySource) -> Result<Self> {
        let builder: Arc<dyn TransactionBuilder> =
            Arc::new(JsonTxBuilder::new(config.source.probe_fee));
        let mut adapters = network_adapters(config.network, builder)?;

        let shared: Arc<dyn ChainDataSource> = Arc::new(source.clone());
        for adapter in adapters.iter_mut() {
            let chain = adapter.chain().id.clone();
            adapter
                .init(Arc::clone(&shared))
                .await
                .with_context(|| format!("Failed to initialize {}", chain))?;
        }

        info!(network = %config.network, adapters = adapters.len(), "Adapters ready");

        Ok(Self {
            config,
            source,
            adapters,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn source(&self) -> &InMemorySource {
        &self.source
    }

    pub fn adapters(&self) -> impl Iterator<Item = &dyn CrossChainAdapter> {
        self.adapters.iter().map(|adapter| adapter.as_ref())
    }

    pub fn adapter(&self, chain: &str) -> Result<&dyn CrossChainAdapter> {
        self.adapters()
            .find(|adapter| adapter.chain().id.as_str() == chain)
            .ok_or_else(|| {
                anyhow!(
                    "No adapter for {} on the {} network",
                    chain,
                    self.config.network
                )
            })
    }
}

/// Source-chain adapters available in a network environment
pub fn network_adapters(
    network: Network,
    builder: Arc<dyn TransactionBuilder>,
) -> bridge_adapter::Result<Vec<Box<dyn CrossChainAdapter>>> {
    let adapters: Vec<Box<dyn CrossChainAdapter>> = match network {
        Network::Dev => vec![Box::new(TuringLocalAdapter::new(builder)?)],
        Network::Rococo => vec![Box::new(TuringStagingAdapter::new(builder)?)],
        Network::Kusama => vec![
            Box::new(TuringAdapter::new(Arc::clone(&builder))?),
            Box::new(MoonriverAdapter::new(builder)?),
        ],
        Network::Polkadot => vec![Box::new(MoonbeamAdapter::new(builder)?)],
    };
    Ok(adapters)
}
