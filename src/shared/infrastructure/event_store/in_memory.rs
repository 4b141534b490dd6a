// In memory implementation of the EventStore port.
//
// Purpose
// - Back the binary and the handler tests without a database.
//
// Responsibilities
// - Store events per stream in append order.
// - Enforce optimistic concurrency by checking the expected version. The
//   version counts every write to a stream: one per appended event and one
//   per in-place rewrite.
// - Give query adapters read access to the raw streams.

use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, LoadedStream};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

struct Streams<Event> {
    events: HashMap<String, Vec<Event>>,
    rewrites: HashMap<String, i64>,
}

impl<Event> Streams<Event> {
    fn version(&self, stream_id: &str) -> i64 {
        let appended = self.events.get(stream_id).map_or(0, Vec::len) as i64;
        appended + self.rewrites.get(stream_id).copied().unwrap_or(0)
    }
}

pub struct InMemoryEventStore<Event: Clone + Send + Sync + 'static> {
    streams: RwLock<Streams<Event>>,
    offline: AtomicBool,
    delay_append_ms: AtomicU64,
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self {
            streams: RwLock::new(Streams {
                events: HashMap::new(),
                rewrites: HashMap::new(),
            }),
            offline: AtomicBool::new(false),
            delay_append_ms: AtomicU64::new(0),
        }
    }
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        let offline = self.offline.get_mut();
        *offline = !*offline;
    }

    /// Sleeps before taking the write lock so concurrent writes can read the same version.
    pub fn set_delay_append_ms(&self, delay_ms: u64) {
        self.delay_append_ms.store(delay_ms, Ordering::SeqCst);
    }

    async fn delay_write(&self) {
        let delay = self.delay_append_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }

    pub async fn read_streams<R>(
        &self,
        read: impl FnOnce(&HashMap<String, Vec<Event>>) -> R,
    ) -> Result<R, EventStoreError> {
        self.ensure_online()?;
        let guard = self.streams.read().await;
        Ok(read(&guard.events))
    }

    /// Rewrites events of one stream in place. Counts as one write, so a stale
    /// `expected_version` fails exactly like `append`.
    pub async fn rewrite_stream<R>(
        &self,
        stream_id: &str,
        expected_version: i64,
        rewrite: impl FnOnce(&mut Vec<Event>) -> Result<R, EventStoreError>,
    ) -> Result<R, EventStoreError> {
        self.ensure_online()?;
        self.delay_write().await;
        let mut guard = self.streams.write().await;
        let actual = guard.version(stream_id);
        if actual != expected_version {
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        let result = rewrite(guard.events.entry(stream_id.to_string()).or_default())?;
        *guard.rewrites.entry(stream_id.to_string()).or_default() += 1;
        Ok(result)
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.streams.read().await;
        let events = guard.events.get(stream_id).cloned().unwrap_or_default();
        let version = guard.version(stream_id);
        Ok(LoadedStream { events, version })
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        self.delay_write().await;
        let mut guard = self.streams.write().await;
        let actual = guard.version(stream_id);
        if actual != expected_version {
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        guard
            .events
            .entry(stream_id.to_string())
            .or_default()
            .extend_from_slice(new_events);
        Ok(())
    }
}
