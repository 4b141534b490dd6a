use std::sync::Arc;
use tracing::debug;

use crate::modules::time_records::adapters::outbound::ledger::ClockLedger;
use crate::modules::time_records::core::events::{ClockEvent, EventKind};
use crate::modules::time_records::core::sequence::simulate_change;
use crate::modules::time_records::use_cases::validate_change::command::{
    ChangeValidation, ValidateChange,
};
use crate::modules::time_records::use_cases::validate_change::neighbours::neighbour_violations;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;

/// Outcome of a validation together with the ledger state it was checked
/// against.
#[derive(Debug, Clone)]
pub struct CheckedChange {
    pub target: ClockEvent,
    pub stream_version: i64,
    pub validation: ChangeValidation,
}

pub struct ValidateChangeHandler<TLedger>
where
    TLedger: ClockLedger + Send + Sync + 'static,
{
    ledger: Arc<TLedger>,
    replay_pause_edits: bool,
}

impl<TLedger> ValidateChangeHandler<TLedger>
where
    TLedger: ClockLedger + Send + Sync + 'static,
{
    pub fn new(ledger: Arc<TLedger>, replay_pause_edits: bool) -> Self {
        Self {
            ledger,
            replay_pause_edits,
        }
    }

    /// Checks the edit without committing it. Every violation is returned.
    pub async fn handle(&self, command: &ValidateChange) -> Result<ChangeValidation, ApplicationError> {
        Ok(self.check(command).await?.validation)
    }

    pub async fn check(&self, command: &ValidateChange) -> Result<CheckedChange, ApplicationError> {
        let target = self
            .ledger
            .find(command.event_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("time record {}", command.event_id)))?;
        let stream = self.ledger.load(&target.stream_id()).await?;

        let mut errors = neighbour_violations(&stream.events, &target, command.new_timestamp);

        if matches!(target.kind(), EventKind::PauseStart | EventKind::PauseEnd) {
            if self.replay_pause_edits {
                errors.extend(simulate_change(
                    &stream.events,
                    target.id,
                    command.new_timestamp,
                ));
            } else {
                debug!(event_id = %target.id, event_type = %target.kind(), "pause edit not replayed");
            }
        }

        Ok(CheckedChange {
            target,
            stream_version: stream.version,
            validation: ChangeValidation::from_errors(errors),
        })
    }
}
