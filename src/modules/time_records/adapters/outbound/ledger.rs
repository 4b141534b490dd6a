// Read and amend port over the clock event store.
//
// The write path for new events stays on `EventStore::append` so that
// optimistic concurrency covers every clock action. This port adds the lookups
// that reports and change requests need.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::modules::time_records::core::events::{Amendment, ClockEvent};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};

/// Direction a capped window is read in. The cap keeps the first events in
/// this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowOrder {
    OldestFirst,
    NewestFirst,
}

#[async_trait]
pub trait ClockLedger: EventStore<ClockEvent> {
    async fn find(&self, event_id: Uuid) -> Result<Option<ClockEvent>, EventStoreError>;

    /// Events of one stream with `from <= timestamp < to`, sorted by
    /// timestamp then creation order in the given direction, at most `limit`
    /// of them.
    async fn window(
        &self,
        stream_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        order: WindowOrder,
        limit: usize,
    ) -> Result<Vec<ClockEvent>, EventStoreError>;

    /// Overwrites the timestamp of one event and records the audit trail.
    /// Fails with `VersionMismatch` when the stream moved past
    /// `expected_version`, and advances the version on success.
    async fn amend(
        &self,
        stream_id: &str,
        expected_version: i64,
        event_id: Uuid,
        amendment: Amendment,
    ) -> Result<ClockEvent, EventStoreError>;

    /// UTC (year, month) pairs holding at least one event at or after `since`.
    async fn months_with_events(
        &self,
        stream_id: &str,
        since: DateTime<Utc>,
    ) -> Result<BTreeSet<(i32, u32)>, EventStoreError>;
}
