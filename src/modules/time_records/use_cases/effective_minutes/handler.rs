use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::modules::time_records::core::duration::{DurationBreakdown, effective_minutes};
use crate::modules::time_records::core::events::{ClockEvent, clock_stream_id};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;

pub struct EffectiveMinutesHandler<TEventStore>
where
    TEventStore: EventStore<ClockEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> EffectiveMinutesHandler<TEventStore>
where
    TEventStore: EventStore<ClockEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(
        &self,
        worker_id: &str,
        company_id: &str,
        entry: DateTime<Utc>,
        exit: DateTime<Utc>,
    ) -> Result<DurationBreakdown, ApplicationError> {
        let stream = self
            .event_store
            .load(&clock_stream_id(worker_id, company_id))
            .await?;
        Ok(effective_minutes(&stream.events, entry, exit))
    }
}
