use std::sync::Arc;
use tracing::info;

use crate::modules::time_records::core::events::{ClockEvent, EventKind, clock_stream_id};
use crate::modules::time_records::core::evolve::fold_ledger;
use crate::modules::time_records::use_cases::submit_clock_action::command::SubmitClockAction;
use crate::modules::time_records::use_cases::submit_clock_action::decide::{
    ClockContext, decide_clock_action,
};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::event_store::EventStore;

pub struct SubmitClockActionHandler<TEventStore, TDirectory>
where
    TEventStore: EventStore<ClockEvent> + Send + Sync + 'static,
    TDirectory: Directory + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    directory: Arc<TDirectory>,
}

impl<TEventStore, TDirectory> SubmitClockActionHandler<TEventStore, TDirectory>
where
    TEventStore: EventStore<ClockEvent> + Send + Sync + 'static,
    TDirectory: Directory + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>, directory: Arc<TDirectory>) -> Self {
        Self {
            event_store,
            directory,
        }
    }

    pub async fn handle(&self, command: SubmitClockAction) -> Result<ClockEvent, ApplicationError> {
        let company = self
            .directory
            .company(&command.company_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("company {}", command.company_id)))?;
        let worker = self
            .directory
            .worker(&command.worker_id)
            .await?
            .filter(|worker| worker.belongs_to(&company.id))
            .ok_or_else(|| {
                ApplicationError::NotFound(format!(
                    "worker {} in company {}",
                    command.worker_id, company.id
                ))
            })?;

        let pause_type = match (&command.action, command.pause_type_id.as_deref()) {
            (Some(EventKind::PauseStart), Some(pause_type_id)) if !pause_type_id.is_empty() => {
                self.directory
                    .pause_type(pause_type_id, &company.id)
                    .await?
            }
            _ => None,
        };

        let context = ClockContext {
            worker_name: worker.full_name(),
            company_name: company.name.clone(),
            pause_type,
        };

        let stream_id = clock_stream_id(&command.worker_id, &command.company_id);
        let stream = self.event_store.load(&stream_id).await?;
        let state = fold_ledger(&stream.events);

        let event = decide_clock_action(&state, &stream.events, &command, &context)?;
        self.event_store
            .append(&stream_id, stream.version, std::slice::from_ref(&event))
            .await?;

        info!(
            worker_id = %event.worker_id,
            company_id = %event.company_id,
            event_id = %event.id,
            event_type = %event.kind(),
            duration_minutes = ?event.duration_minutes(),
            "clock event recorded"
        );
        Ok(event)
    }
}
