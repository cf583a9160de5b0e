//! bridge-adapter: Balance normalization and transfer capacity
//!
//! Defines the per-chain balance adapter and the cross-chain adapter
//! contracts, the latest-value stream combinator, and the max-input
//! calculation shared by every chain family.

pub mod adapter;
pub mod balance;
pub mod calculator;
pub mod combine;
pub mod error;

pub use adapter::{
    AdapterCore, ChainTables, CrossChainAdapter, InputConfig, InputConfigStream, MaxInputStream,
};
pub use balance::{
    asset_snapshot, native_snapshot, AddressCheck, BalanceAdapter, BalanceFamily, BalanceStream,
    RawLedger, StorageBalanceAdapter,
};
pub use combine::{combine_latest, CombineLatest};
pub use error::{AdapterError, Result};
