use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::modules::time_records::adapters::outbound::ledger::{ClockLedger, WindowOrder};
use crate::modules::time_records::core::events::{Amendment, ClockEvent};
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;

#[async_trait]
impl ClockLedger for InMemoryEventStore<ClockEvent> {
    async fn find(&self, event_id: Uuid) -> Result<Option<ClockEvent>, EventStoreError> {
        self.read_streams(|streams| {
            streams
                .values()
                .flatten()
                .find(|event| event.id == event_id)
                .cloned()
        })
        .await
    }

    async fn window(
        &self,
        stream_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        order: WindowOrder,
        limit: usize,
    ) -> Result<Vec<ClockEvent>, EventStoreError> {
        self.read_streams(|streams| {
            let mut events: Vec<ClockEvent> = streams
                .get(stream_id)
                .map(|stream| {
                    stream
                        .iter()
                        .filter(|event| event.timestamp >= from && event.timestamp < to)
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
            events.sort_by_key(|event| (event.timestamp, event.creation_order));
            if order == WindowOrder::NewestFirst {
                events.reverse();
            }
            events.truncate(limit);
            events
        })
        .await
    }

    async fn amend(
        &self,
        stream_id: &str,
        expected_version: i64,
        event_id: Uuid,
        amendment: Amendment,
    ) -> Result<ClockEvent, EventStoreError> {
        self.rewrite_stream(stream_id, expected_version, |events| {
            let event = events
                .iter_mut()
                .find(|event| event.id == event_id)
                .ok_or(EventStoreError::EventNotFound(event_id))?;
            event.apply_amendment(amendment);
            Ok(event.clone())
        })
        .await
    }

    async fn months_with_events(
        &self,
        stream_id: &str,
        since: DateTime<Utc>,
    ) -> Result<BTreeSet<(i32, u32)>, EventStoreError> {
        self.read_streams(|streams| {
            streams
                .get(stream_id)
                .into_iter()
                .flatten()
                .filter(|event| event.timestamp >= since)
                .map(|event| (event.timestamp.year(), event.timestamp.month()))
                .collect()
        })
        .await
    }
}
