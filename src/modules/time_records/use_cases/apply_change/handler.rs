use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::time_records::adapters::outbound::ledger::ClockLedger;
use crate::modules::time_records::core::events::{Amendment, ClockEvent};
use crate::modules::time_records::use_cases::apply_change::command::ApplyChange;
use crate::modules::time_records::use_cases::validate_change::handler::ValidateChangeHandler;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::ledger_instant;

/// Validates then amends in place at the stream version the validation read,
/// so a change that landed in between turns into a version conflict. The
/// stored integrity hash and the cached durations of neighbouring events are
/// left untouched.
pub struct ApplyChangeHandler<TLedger>
where
    TLedger: ClockLedger + Send + Sync + 'static,
{
    ledger: Arc<TLedger>,
    validator: ValidateChangeHandler<TLedger>,
}

impl<TLedger> ApplyChangeHandler<TLedger>
where
    TLedger: ClockLedger + Send + Sync + 'static,
{
    pub fn new(ledger: Arc<TLedger>, replay_pause_edits: bool) -> Self {
        Self {
            validator: ValidateChangeHandler::new(ledger.clone(), replay_pause_edits),
            ledger,
        }
    }

    pub async fn handle(
        &self,
        command: ApplyChange,
        now: DateTime<Utc>,
    ) -> Result<ClockEvent, ApplicationError> {
        let checked = self.validator.check(&command.validation()).await?;
        if !checked.validation.ok {
            warn!(
                event_id = %command.event_id,
                modified_by = %command.modified_by,
                errors = ?checked.validation.errors,
                "change request rejected"
            );
            return Err(ApplicationError::ChangeRejected(checked.validation.errors));
        }

        let amended = self
            .ledger
            .amend(
                &checked.target.stream_id(),
                checked.stream_version,
                command.event_id,
                Amendment {
                    new_timestamp: ledger_instant(command.new_timestamp),
                    modified_by: command.modified_by,
                    modified_at: ledger_instant(now),
                    reason: command.reason,
                },
            )
            .await?;

        info!(
            event_id = %amended.id,
            worker_id = %amended.worker_id,
            company_id = %amended.company_id,
            timestamp = %amended.timestamp,
            "change request applied"
        );
        Ok(amended)
    }
}
