//! chain-source: Decoded chain-state subscriptions
//!
//! The adapters never talk to a node directly. They ask a [`ChainDataSource`]
//! for a stream of decoded storage values and normalize whatever arrives.
//! Transport, storage-key hashing and SCALE decoding live behind this trait.
//!
//! [`InMemorySource`] is the bundled implementation: values are pushed by
//! tests or loaded from a JSON replay file.

pub mod error;
pub mod memory;
pub mod query;

use async_trait::async_trait;
use futures::stream::BoxStream;

pub use error::SourceError;
pub use memory::{InMemorySource, ReplayEntry, ReplayFile};
pub use query::{StorageQuery, StorageValue};

/// Result type for data source operations
pub type Result<T> = std::result::Result<T, SourceError>;

/// Stream of decoded values for one storage entry.
///
/// Dropping the stream releases the subscription.
pub type SourceStream = BoxStream<'static, StorageValue>;

/// Provider of decoded chain state
#[async_trait]
pub trait ChainDataSource: Send + Sync {
    /// Resolves once the source can serve subscriptions
    async fn ready(&self) -> Result<()>;

    /// Subscribe to a storage entry. The current value is emitted first.
    fn subscribe(&self, query: StorageQuery) -> SourceStream;
}
