use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::modules::time_records::adapters::outbound::ledger::{ClockLedger, WindowOrder};
use crate::modules::time_records::core::events::{ClockEvent, clock_stream_id};
use crate::shared::core::errors::ApplicationError;

pub struct ListRecordsHandler<TLedger>
where
    TLedger: ClockLedger + Send + Sync + 'static,
{
    ledger: Arc<TLedger>,
    max_records: usize,
}

impl<TLedger> ListRecordsHandler<TLedger>
where
    TLedger: ClockLedger + Send + Sync + 'static,
{
    pub fn new(ledger: Arc<TLedger>, max_records: usize) -> Self {
        Self {
            ledger,
            max_records,
        }
    }

    /// Events with `from <= timestamp < to`, newest first.
    pub async fn handle(
        &self,
        worker_id: &str,
        company_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<ClockEvent>, ApplicationError> {
        if to <= from {
            return Err(ApplicationError::InvalidPeriod(format!(
                "{from} is not before {to}"
            )));
        }
        let events = self
            .ledger
            .window(
                &clock_stream_id(worker_id, company_id),
                from,
                to,
                WindowOrder::NewestFirst,
                self.max_records,
            )
            .await?;
        Ok(events)
    }
}
