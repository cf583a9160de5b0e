//! Moonbeam and Moonriver adapters
//!
//! Both serve balances and route metadata. Capacity queries and transfer
//! construction report [`bridge_adapter::AdapterError::ApiNotFound`].

use std::sync::Arc;

use async_trait::async_trait;
use bridge_adapter::{AdapterCore, CrossChainAdapter, InputConfigStream, MaxInputStream, Result};
use xbridge_core::{ChainId, Token, TransferParams};
use xcm_tx::{TransactionBuilder, UnsignedTransfer};

use crate::balance::MoonbeamFamily;
use crate::constants::{MOONBEAM, MOONRIVER};

/// Moonbeam on Polkadot
pub struct MoonbeamAdapter {
    core: AdapterCore,
}

impl MoonbeamAdapter {
    pub const CHAIN: &'static str = "moonbeam";

    pub fn new(builder: Arc<dyn TransactionBuilder>) -> Result<Self> {
        let core = AdapterCore::new(Self::CHAIN, Arc::new(MoonbeamFamily), MOONBEAM, builder)?;
        Ok(Self { core })
    }
}

#[async_trait]
impl CrossChainAdapter for MoonbeamAdapter {
    fn core(&self) -> &AdapterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AdapterCore {
        &mut self.core
    }

    fn subscribe_max_input(&self, _: &str, _: &str, _: &ChainId) -> Result<MaxInputStream> {
        Err(self.core.api_not_found())
    }

    fn subscribe_input_config(
        &self,
        _: &str,
        _: &str,
        _: &ChainId,
        _: Option<&Token>,
    ) -> Result<InputConfigStream> {
        Err(self.core.api_not_found())
    }

    fn create_transfer_tx(&self, _: &TransferParams) -> Result<UnsignedTransfer> {
        Err(self.core.api_not_found())
    }

    async fn estimate_tx_fee(&self, _params: &TransferParams) -> Result<u128> {
        Err(self.core.api_not_found())
    }
}

/// Moonriver on Kusama
pub struct MoonriverAdapter {
    core: AdapterCore,
}

impl MoonriverAdapter {
    pub const CHAIN: &'static str = "moonriver";

    pub fn new(builder: Arc<dyn TransactionBuilder>) -> Result<Self> {
        let core = AdapterCore::new(Self::CHAIN, Arc::new(MoonbeamFamily), MOONRIVER, builder)?;
        Ok(Self { core })
    }
}

#[async_trait]
impl CrossChainAdapter for MoonriverAdapter {
    fn core(&self) -> &AdapterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AdapterCore {
        &mut self.core
    }

    fn subscribe_max_input(&self, _: &str, _: &str, _: &ChainId) -> Result<MaxInputStream> {
        Err(self.core.api_not_found())
    }

    fn subscribe_input_config(
        &self,
        _: &str,
        _: &str,
        _: &ChainId,
        _: Option<&Token>,
    ) -> Result<InputConfigStream> {
        Err(self.core.api_not_found())
    }

    fn create_transfer_tx(&self, _: &TransferParams) -> Result<UnsignedTransfer> {
        Err(self.core.api_not_found())
    }

    async fn estimate_tx_fee(&self, _params: &TransferParams) -> Result<u128> {
        Err(self.core.api_not_found())
    }
}
