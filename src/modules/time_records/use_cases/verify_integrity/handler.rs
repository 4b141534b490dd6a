use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::time_records::adapters::outbound::ledger::ClockLedger;
use crate::modules::time_records::core::integrity::{IntegrityCheck, verify};
use crate::shared::core::errors::ApplicationError;

pub struct VerifyIntegrityHandler<TLedger>
where
    TLedger: ClockLedger + Send + Sync + 'static,
{
    ledger: Arc<TLedger>,
}

impl<TLedger> VerifyIntegrityHandler<TLedger>
where
    TLedger: ClockLedger + Send + Sync + 'static,
{
    pub fn new(ledger: Arc<TLedger>) -> Self {
        Self { ledger }
    }

    /// Mismatches are reported, never corrected.
    pub async fn handle(&self, record_id: Uuid) -> Result<IntegrityCheck, ApplicationError> {
        let event = self
            .ledger
            .find(record_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("time record {record_id}")))?;
        let check = verify(&event);
        if !check.verified {
            warn!(
                record_id = %record_id,
                worker_id = %event.worker_id,
                modified = check.modified,
                "integrity hash mismatch"
            );
        }
        Ok(check)
    }
}

#[cfg(test)]
mod verify_integrity_handler_tests {
    use super::*;
    use crate::modules::time_records::core::events::{ClockEvent, Punch, clock_stream_id};
    use crate::shared::infrastructure::event_store::EventStore;
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::tests::fixtures::events::{ClockEventBuilder, at, ledger};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_verify_an_untouched_record_and_flag_a_tampered_one() {
        let store = InMemoryEventStore::<ClockEvent>::new();
        let mut events = ledger(vec![
            ClockEventBuilder::entry(at(8, 0)),
            ClockEventBuilder::exit(at(16, 0), 480.0),
        ]);
        if let Punch::Exit { duration_minutes } = &mut events[1].punch {
            *duration_minutes = 600.0;
        }
        store
            .append(&clock_stream_id("w-1", "c-1"), 0, &events)
            .await
            .unwrap();
        let handler = VerifyIntegrityHandler::new(Arc::new(store));

        let intact = handler.handle(events[0].id).await.unwrap();
        assert!(intact.verified);
        assert_eq!(intact.stored_hash, intact.computed_hash);

        let tampered = handler.handle(events[1].id).await.unwrap();
        assert!(!tampered.verified);
        assert!(!tampered.modified);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_for_an_unknown_record() {
        let handler = VerifyIntegrityHandler::new(Arc::new(InMemoryEventStore::<ClockEvent>::new()));
        let result = handler.handle(Uuid::now_v7()).await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }
}
