//! In-memory data source
//!
//! Holds the latest value of every storage entry that was pushed or replayed
//! and fans updates out to live subscriptions. A subscription is removed from
//! the map as soon as its stream is dropped, along with its entry once nothing
//! else keeps it.

use std::collections::HashMap;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use futures::channel::mpsc;
use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

use crate::error::SourceError;
use crate::query::{StorageQuery, StorageValue};
use crate::{ChainDataSource, Result, SourceStream};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Readiness {
    Connecting,
    Ready,
    Closed,
}

#[derive(Default)]
struct Entry {
    latest: Option<StorageValue>,
    subscribers: Vec<(u64, mpsc::UnboundedSender<StorageValue>)>,
    completed: bool,
}

impl Entry {
    fn is_unused(&self) -> bool {
        self.latest.is_none() && self.subscribers.is_empty() && !self.completed
    }
}

#[derive(Default)]
struct Registry {
    entries: HashMap<StorageQuery, Entry>,
    next_id: u64,
}

/// Push-driven [`ChainDataSource`] backed by a shared map
#[derive(Clone)]
pub struct InMemorySource {
    registry: Arc<Mutex<Registry>>,
    readiness: Arc<watch::Sender<Readiness>>,
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySource {
    /// A source that is ready immediately
    pub fn new() -> Self {
        Self::with_readiness(Readiness::Ready)
    }

    /// A source whose `ready()` blocks until [`mark_ready`](Self::mark_ready)
    pub fn connecting() -> Self {
        Self::with_readiness(Readiness::Connecting)
    }

    /// Build a ready source preloaded with a replay file
    pub fn from_replay(replay: &ReplayFile) -> Self {
        let source = Self::new();
        source.apply(replay);
        source
    }

    fn with_readiness(state: Readiness) -> Self {
        let (readiness, _) = watch::channel(state);
        Self {
            registry: Arc::new(Mutex::new(Registry::default())),
            readiness: Arc::new(readiness),
        }
    }

    pub fn mark_ready(&self) {
        self.readiness.send_replace(Readiness::Ready);
    }

    /// Fail pending and future readiness checks
    pub fn close(&self) {
        self.readiness.send_replace(Readiness::Closed);
    }

    /// Set the current value of an entry and forward it to live subscribers
    pub fn push(&self, query: &StorageQuery, value: StorageValue) {
        let mut registry = self.registry.lock();
        let entry = registry.entries.entry(query.clone()).or_default();

        if entry.completed {
            debug!(%query, "Ignoring update for completed entry");
            return;
        }

        entry.latest = Some(value.clone());
        entry
            .subscribers
            .retain(|(_, tx)| tx.unbounded_send(value.clone()).is_ok());
    }

    /// End every stream for an entry. Later subscribers get the last value only.
    pub fn complete(&self, query: &StorageQuery) {
        let mut registry = self.registry.lock();
        let entry = registry.entries.entry(query.clone()).or_default();
        entry.completed = true;
        entry.subscribers.clear();
    }

    /// Push every recorded value in file order
    pub fn apply(&self, replay: &ReplayFile) {
        for recorded in &replay.entries {
            let query = recorded.query();
            for value in &recorded.values {
                self.push(&query, value.clone());
            }
        }
    }

    /// Live subscriptions for one entry
    pub fn subscriber_count(&self, query: &StorageQuery) -> usize {
        self.registry
            .lock()
            .entries
            .get(query)
            .map_or(0, |entry| entry.subscribers.len())
    }

    /// Live subscriptions across all entries
    pub fn total_subscribers(&self) -> usize {
        self.registry
            .lock()
            .entries
            .values()
            .map(|entry| entry.subscribers.len())
            .sum()
    }

    /// Storage entries currently held, with or without a value
    pub fn entry_count(&self) -> usize {
        self.registry.lock().entries.len()
    }
}

#[async_trait]
impl ChainDataSource for InMemorySource {
    async fn ready(&self) -> Result<()> {
        let mut rx = self.readiness.subscribe();
        let state = rx
            .wait_for(|state| *state != Readiness::Connecting)
            .await
            .map(|state| *state)
            .map_err(|_| SourceError::NotReady {
                reason: "source dropped".to_string(),
            })?;

        match state {
            Readiness::Ready => Ok(()),
            _ => Err(SourceError::NotReady {
                reason: "source closed".to_string(),
            }),
        }
    }

    fn subscribe(&self, query: StorageQuery) -> SourceStream {
        let (tx, receiver) = mpsc::unbounded();

        let id = {
            let mut registry = self.registry.lock();
            let id = registry.next_id;
            registry.next_id += 1;

            let entry = registry.entries.entry(query.clone()).or_default();
            // Storage reads of a missing entry decode to an empty record
            let current = entry.latest.clone().unwrap_or_default();
            let _ = tx.unbounded_send(current);
            if !entry.completed {
                entry.subscribers.push((id, tx));
            }
            id
        };

        debug!(%query, id, "Storage subscription opened");

        Box::pin(Subscription {
            id,
            query,
            receiver,
            registry: Arc::clone(&self.registry),
        })
    }
}

/// Receiving half of one storage subscription
struct Subscription {
    id: u64,
    query: StorageQuery,
    receiver: mpsc::UnboundedReceiver<StorageValue>,
    registry: Arc<Mutex<Registry>>,
}

impl Stream for Subscription {
    type Item = StorageValue;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_next_unpin(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut registry = self.registry.lock();
        if let Some(entry) = registry.entries.get_mut(&self.query) {
            entry.subscribers.retain(|(id, _)| *id != self.id);
            if entry.is_unused() {
                registry.entries.remove(&self.query);
            }
        }
        debug!(query = %self.query, id = self.id, "Storage subscription dropped");
    }
}

/// Recorded storage values, replayed into an [`InMemorySource`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplayFile {
    pub entries: Vec<ReplayEntry>,
}

/// Values observed for one storage entry, oldest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayEntry {
    pub path: String,
    #[serde(default)]
    pub params: Vec<String>,
    pub values: Vec<StorageValue>,
}

impl ReplayEntry {
    pub fn query(&self) -> StorageQuery {
        StorageQuery::new(self.path.clone(), self.params.clone())
    }
}

impl ReplayFile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| SourceError::ReplayRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    fn alice() -> StorageQuery {
        StorageQuery::system_account("alice")
    }

    #[tokio::test]
    async fn test_subscribe_replays_current_value() {
        let source = InMemorySource::new();
        source.push(&alice(), StorageValue::account(1000, 50, 10));

        let mut stream = source.subscribe(alice());
        assert_eq!(
            stream.next().await,
            Some(StorageValue::account(1000, 50, 10))
        );
        assert!(stream.next().now_or_never().is_none());
    }

    #[tokio::test]
    async fn test_missing_entry_is_absent() {
        let source = InMemorySource::new();
        let mut stream = source.subscribe(alice());
        assert!(stream.next().await.unwrap().is_absent());
    }

    #[tokio::test]
    async fn test_push_reaches_every_subscriber() {
        let source = InMemorySource::new();
        let mut first = source.subscribe(alice());
        let mut second = source.subscribe(alice());
        assert_eq!(source.subscriber_count(&alice()), 2);

        source.push(&alice(), StorageValue::account(5, 0, 0));

        for stream in [&mut first, &mut second] {
            assert!(stream.next().await.unwrap().is_absent());
            assert_eq!(stream.next().await, Some(StorageValue::account(5, 0, 0)));
        }
    }

    #[tokio::test]
    async fn test_drop_releases_subscription() {
        let source = InMemorySource::new();
        let stream = source.subscribe(alice());
        let other = source.subscribe(StorageQuery::tokens_accounts("alice", 1));
        assert_eq!(source.total_subscribers(), 2);

        drop(stream);
        assert_eq!(source.subscriber_count(&alice()), 0);
        assert_eq!(source.total_subscribers(), 1);

        drop(other);
        assert_eq!(source.total_subscribers(), 0);
    }

    #[tokio::test]
    async fn test_drop_prunes_entries_without_value() {
        let source = InMemorySource::new();
        let stream = source.subscribe(alice());
        let again = source.subscribe(alice());
        assert_eq!(source.entry_count(), 1);

        drop(stream);
        assert_eq!(source.entry_count(), 1);
        drop(again);
        assert_eq!(source.entry_count(), 0);

        // Pushed and completed entries outlive their subscribers
        source.push(&alice(), StorageValue::account(5, 0, 0));
        drop(source.subscribe(alice()));
        let empty = StorageQuery::tokens_accounts("alice", 1);
        source.complete(&empty);
        drop(source.subscribe(empty.clone()));
        assert_eq!(source.entry_count(), 2);

        let mut late = source.subscribe(alice());
        assert_eq!(late.next().await, Some(StorageValue::account(5, 0, 0)));
    }

    #[tokio::test]
    async fn test_complete_ends_streams() {
        let source = InMemorySource::new();
        let mut stream = source.subscribe(alice());
        source.complete(&alice());

        assert!(stream.next().await.is_some());
        assert_eq!(stream.next().await, None);

        let mut late = source.subscribe(alice());
        assert!(late.next().await.is_some());
        assert_eq!(late.next().await, None);
        assert_eq!(source.subscriber_count(&alice()), 0);
    }

    #[tokio::test]
    async fn test_readiness() {
        let source = InMemorySource::connecting();
        assert!(source.ready().now_or_never().is_none());

        source.mark_ready();
        assert!(source.ready().await.is_ok());

        source.close();
        assert!(matches!(
            source.ready().await,
            Err(SourceError::NotReady { .. })
        ));
    }

    #[tokio::test]
    async fn test_replay_loading() {
        let replay = ReplayFile::from_json(
            r#"{
                "entries": [
                    {
                        "path": "system.account",
                        "params": ["alice"],
                        "values": [{"free": 1}, {"free": 1000, "reserved": 50, "frozen": 10}]
                    },
                    {
                        "path": "assets.account",
                        "params": ["42", "0xabc"],
                        "values": [{"balance": 7}]
                    }
                ]
            }"#,
        )
        .unwrap();

        let source = InMemorySource::from_replay(&replay);
        let mut stream = source.subscribe(alice());
        assert_eq!(
            stream.next().await,
            Some(StorageValue::account(1000, 50, 10))
        );

        let mut asset = source.subscribe(StorageQuery::assets_account(42, "0xabc"));
        assert_eq!(asset.next().await, Some(StorageValue::balance(7)));

        assert!(matches!(
            ReplayFile::from_json("not json"),
            Err(SourceError::ReplayParse(_))
        ));
    }
}
