use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::modules::reports::core::rollup::overtime_report;
use crate::modules::reports::core::summaries::OvertimeReport;
use crate::modules::reports::use_cases::monthly_summary::handler::{
    MonthlySummaryHandler, MonthlySummaryQuery,
};
use crate::modules::time_records::adapters::outbound::ledger::ClockLedger;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::signature_store::SignatureStore;

pub struct OvertimeReportHandler<TLedger, TDirectory, TSignatures>
where
    TLedger: ClockLedger + Send + Sync + 'static,
    TDirectory: Directory + Send + Sync + 'static,
    TSignatures: SignatureStore + Send + Sync + 'static,
{
    monthly: Arc<MonthlySummaryHandler<TLedger, TDirectory, TSignatures>>,
}

impl<TLedger, TDirectory, TSignatures> OvertimeReportHandler<TLedger, TDirectory, TSignatures>
where
    TLedger: ClockLedger + Send + Sync + 'static,
    TDirectory: Directory + Send + Sync + 'static,
    TSignatures: SignatureStore + Send + Sync + 'static,
{
    pub fn new(monthly: Arc<MonthlySummaryHandler<TLedger, TDirectory, TSignatures>>) -> Self {
        Self { monthly }
    }

    /// Workers whose month exceeds `days_worked × daily_expected_minutes`.
    /// Without an explicit threshold the configured daily expectation applies.
    pub async fn handle(
        &self,
        query: &MonthlySummaryQuery,
        daily_expected_minutes: Option<f64>,
        now: DateTime<Utc>,
    ) -> Result<OvertimeReport, ApplicationError> {
        let daily_expected_minutes =
            daily_expected_minutes.unwrap_or(self.monthly.policy().daily_expected_minutes);
        if !daily_expected_minutes.is_finite() || daily_expected_minutes < 0.0 {
            return Err(ApplicationError::InvalidThreshold(format!(
                "daily expected minutes must be a non-negative number, got {daily_expected_minutes}"
            )));
        }
        let company = self.monthly.company_summary(query, now).await?;
        Ok(overtime_report(&company, daily_expected_minutes, now))
    }
}
