//! OAK Network (Turing) adapters
//!
//! Turing chains keep the native TUR balance in `system.account` and every
//! other token in ORML `tokens.accounts`, keyed by (address, currency id).
//! Transfers go out through `xTokens.transfer`.

pub mod adapter;
pub mod balance;
pub mod constants;

pub use adapter::{TuringAdapter, TuringLocalAdapter, TuringStagingAdapter};
pub use balance::OakFamily;
