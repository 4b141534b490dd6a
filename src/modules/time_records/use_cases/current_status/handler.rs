use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::modules::time_records::core::events::{ClockEvent, clock_stream_id};
use crate::modules::time_records::core::evolve::fold_ledger;
use crate::modules::time_records::use_cases::current_status::status::{
    CurrentStatus, StatusSubject, current_status,
};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::event_store::EventStore;

pub struct CurrentStatusHandler<TEventStore, TDirectory>
where
    TEventStore: EventStore<ClockEvent> + Send + Sync + 'static,
    TDirectory: Directory + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    directory: Arc<TDirectory>,
}

impl<TEventStore, TDirectory> CurrentStatusHandler<TEventStore, TDirectory>
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

    pub async fn handle(
        &self,
        worker_id: &str,
        company_id: &str,
        now: DateTime<Utc>,
    ) -> Result<CurrentStatus, ApplicationError> {
        let company = self
            .directory
            .company(company_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("company {company_id}")))?;
        let worker = self
            .directory
            .worker(worker_id)
            .await?
            .filter(|worker| worker.belongs_to(company_id))
            .ok_or_else(|| {
                ApplicationError::NotFound(format!("worker {worker_id} in company {company_id}"))
            })?;

        let stream = self
            .event_store
            .load(&clock_stream_id(worker_id, company_id))
            .await?;
        let state = fold_ledger(&stream.events);
        let subject = StatusSubject {
            worker_id: worker.id.clone(),
            worker_name: worker.full_name(),
            company_id: company.id.clone(),
            company_name: company.name,
        };
        Ok(current_status(subject, &state, &stream.events, now)?)
    }
}
