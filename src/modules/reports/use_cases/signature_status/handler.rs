use chrono::{DateTime, Datelike, TimeZone, Utc};
use std::sync::Arc;

use crate::modules::reports::core::signatures::{SignatureOverview, candidate_months, overview};
use crate::modules::time_records::adapters::outbound::ledger::ClockLedger;
use crate::modules::time_records::core::events::clock_stream_id;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::signature_store::SignatureStore;

pub struct SignatureStatusHandler<TLedger, TSignatures>
where
    TLedger: ClockLedger + Send + Sync + 'static,
    TSignatures: SignatureStore + Send + Sync + 'static,
{
    ledger: Arc<TLedger>,
    signatures: Arc<TSignatures>,
}

impl<TLedger, TSignatures> SignatureStatusHandler<TLedger, TSignatures>
where
    TLedger: ClockLedger + Send + Sync + 'static,
    TSignatures: SignatureStore + Send + Sync + 'static,
{
    pub fn new(ledger: Arc<TLedger>, signatures: Arc<TSignatures>) -> Self {
        Self { ledger, signatures }
    }

    /// Signed and pending months among the twelve before `today`'s month.
    pub async fn handle(
        &self,
        worker_id: &str,
        company_id: &str,
        today: DateTime<Utc>,
    ) -> Result<SignatureOverview, ApplicationError> {
        let months = candidate_months((today.year(), today.month()));
        let Some(&oldest) = months.last() else {
            return Ok(SignatureOverview::default());
        };
        let since = Utc
            .with_ymd_and_hms(oldest.0, oldest.1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| {
                ApplicationError::Unexpected(format!("no first day for {}-{}", oldest.0, oldest.1))
            })?;

        let with_records = self
            .ledger
            .months_with_events(&clock_stream_id(worker_id, company_id), since)
            .await?;
        let signatures = self
            .signatures
            .list_since(worker_id, company_id, oldest)
            .await?;

        Ok(overview(&months, &signatures, &with_records))
    }
}
