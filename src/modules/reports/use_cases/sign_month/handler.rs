use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::modules::reports::core::period::ReportPeriod;
use crate::modules::reports::core::signatures::MonthlySignature;
use crate::modules::reports::use_cases::sign_month::command::SignMonth;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::ledger_instant;
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::signature_store::SignatureStore;

pub struct SignMonthHandler<TDirectory, TSignatures>
where
    TDirectory: Directory + Send + Sync + 'static,
    TSignatures: SignatureStore + Send + Sync + 'static,
{
    directory: Arc<TDirectory>,
    signatures: Arc<TSignatures>,
}

impl<TDirectory, TSignatures> SignMonthHandler<TDirectory, TSignatures>
where
    TDirectory: Directory + Send + Sync + 'static,
    TSignatures: SignatureStore + Send + Sync + 'static,
{
    pub fn new(directory: Arc<TDirectory>, signatures: Arc<TSignatures>) -> Self {
        Self {
            directory,
            signatures,
        }
    }

    /// Records the worker's consent for one month. Signing is write-once.
    pub async fn handle(
        &self,
        command: SignMonth,
        now: DateTime<Utc>,
    ) -> Result<MonthlySignature, ApplicationError> {
        let period = ReportPeriod::new(command.year, command.month)?;
        self.directory
            .worker(&command.worker_id)
            .await?
            .filter(|worker| worker.belongs_to(&command.company_id))
            .ok_or_else(|| {
                ApplicationError::NotFound(format!(
                    "worker {} in company {}",
                    command.worker_id, command.company_id
                ))
            })?;

        let signature = MonthlySignature {
            id: Uuid::now_v7(),
            worker_id: command.worker_id,
            company_id: command.company_id,
            year: period.year(),
            month: period.month(),
            signed_at: ledger_instant(now),
        };
        self.signatures.insert_if_absent(signature.clone()).await?;

        info!(
            worker_id = %signature.worker_id,
            company_id = %signature.company_id,
            year = signature.year,
            month = signature.month,
            "month signed"
        );
        Ok(signature)
    }
}
