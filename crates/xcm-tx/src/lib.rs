//! xcm-tx: Transfer call encoding and transaction building
//!
//! Provides the XCM V3 location model, the `xTokens.transfer` call shape and
//! the [`TransactionBuilder`] contract adapters delegate to. Signing and
//! SCALE serialization happen outside this crate.

pub mod builder;
pub mod error;
pub mod location;
pub mod xtokens;

pub use builder::{JsonTxBuilder, TransactionBuilder, UnsignedTransfer};
pub use error::TxError;
pub use location::{dest_location, Junction, Junctions, MultiLocation, VersionedLocation};
pub use xtokens::TransferCall;

/// Result type for transaction building
pub type Result<T> = std::result::Result<T, TxError>;
