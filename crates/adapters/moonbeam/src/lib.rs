//! moonbeam: Moonbeam-family chain adapters
//!
//! EVM-style 20-byte accounts and `assets` pallet ledgers. Balances and
//! route metadata are served; transfer construction is not available.

pub mod adapter;
pub mod balance;
pub mod constants;

pub use adapter::{MoonbeamAdapter, MoonriverAdapter};
pub use balance::MoonbeamFamily;
