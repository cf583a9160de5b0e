//! Balance adapter: storage subscriptions normalized into snapshots
//!
//! A chain family describes how it accepts addresses and where its ledgers
//! live ([`BalanceFamily`]). [`StorageBalanceAdapter`] does the rest for
//! every chain of every family.

use std::sync::Arc;

use chain_source::{ChainDataSource, StorageQuery, StorageValue};
use futures::stream::{self, BoxStream, StreamExt};
use tracing::debug;
use xbridge_core::{AssetId, BalanceSnapshot, ChainId, FixedPointNumber, TokenTable};

use crate::error::{AdapterError, Result};

/// Stream of normalized balance observations
pub type BalanceStream = BoxStream<'static, BalanceSnapshot>;

/// Outcome of a family's address policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressCheck {
    Valid,
    /// A plausible address of another family; queries yield an empty stream
    NotApplicable,
    Invalid,
}

/// Free/reserved/frozen view of a non-native ledger record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawLedger {
    pub free: u128,
    pub reserved: u128,
    pub frozen: u128,
}

/// Ledger layout and address policy shared by the chains of one family
pub trait BalanceFamily: Send + Sync {
    fn check_address(&self, address: &str) -> AddressCheck;

    /// Storage entry holding the native balance
    fn native_query(&self, address: &str) -> StorageQuery {
        StorageQuery::system_account(address)
    }

    /// Storage entry holding a non-native balance, if the family supports the id
    fn asset_query(&self, asset: AssetId, address: &str) -> Option<StorageQuery>;

    /// Read a non-native ledger record. Missing fields count as zero.
    fn asset_ledger(&self, value: &StorageValue) -> RawLedger;
}

/// Native ledgers: frozen overlaps free, and `available` is `free + reserved`.
pub fn native_snapshot(value: &StorageValue, decimals: u32) -> BalanceSnapshot {
    let amount = |raw: Option<u128>| FixedPointNumber::from_inner(raw.unwrap_or(0), decimals);
    let frozen = amount(value.frozen);
    let reserved = amount(value.reserved);
    let free = amount(value.free).minus(&frozen);

    BalanceSnapshot {
        available: free.plus(&reserved),
        free,
        reserved,
        locked: frozen,
    }
}

/// Asset ledgers: `available` is `free` alone, unlike native ledgers.
pub fn asset_snapshot(ledger: &RawLedger, decimals: u32) -> BalanceSnapshot {
    let amount = |raw: u128| FixedPointNumber::from_inner(raw, decimals);

    BalanceSnapshot {
        free: amount(ledger.free),
        reserved: amount(ledger.reserved),
        locked: amount(ledger.frozen),
        available: amount(ledger.free),
    }
}

/// Per-chain balance observation contract
pub trait BalanceAdapter: Send + Sync {
    fn subscribe_balance(&self, token: &str, address: &str) -> Result<BalanceStream>;
}

/// Balance adapter backed by a [`ChainDataSource`]
pub struct StorageBalanceAdapter {
    chain: ChainId,
    family: Arc<dyn BalanceFamily>,
    tokens: Arc<TokenTable>,
    source: Arc<dyn ChainDataSource>,
}

impl StorageBalanceAdapter {
    pub fn new(
        chain: ChainId,
        family: Arc<dyn BalanceFamily>,
        tokens: Arc<TokenTable>,
        source: Arc<dyn ChainDataSource>,
    ) -> Self {
        Self {
            chain,
            family,
            tokens,
            source,
        }
    }

    /// Apply the family's address policy.
    ///
    /// `Ok(false)` means the address belongs to another family and the caller
    /// should return an empty stream.
    pub fn admit(&self, address: &str) -> Result<bool> {
        match self.family.check_address(address) {
            AddressCheck::Valid => Ok(true),
            AddressCheck::NotApplicable => {
                debug!(chain = %self.chain, address, "Address not applicable, skipping");
                Ok(false)
            }
            AddressCheck::Invalid => Err(AdapterError::InvalidAddress {
                address: address.to_string(),
            }),
        }
    }
}

impl BalanceAdapter for StorageBalanceAdapter {
    fn subscribe_balance(&self, token: &str, address: &str) -> Result<BalanceStream> {
        if !self.admit(address)? {
            return Ok(stream::empty().boxed());
        }

        let meta = self
            .tokens
            .get(token)
            .ok_or_else(|| AdapterError::TokenNotFound {
                token: token.to_string(),
            })?;
        let decimals = meta.decimals;

        debug!(chain = %self.chain, token, address, asset = %meta.asset_id, "Subscribing to balance");

        let stream = match meta.asset_id {
            AssetId::Native => self
                .source
                .subscribe(self.family.native_query(address))
                .map(move |value| native_snapshot(&value, decimals))
                .boxed(),
            asset => {
                let query = self.family.asset_query(asset, address).ok_or_else(|| {
                    AdapterError::TokenNotFound {
                        token: token.to_string(),
                    }
                })?;
                let family = Arc::clone(&self.family);
                self.source
                    .subscribe(query)
                    .map(move |value| asset_snapshot(&family.asset_ledger(&value), decimals))
                    .boxed()
            }
        };

        Ok(stream)
    }
}
