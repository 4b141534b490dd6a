use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::warn;

use crate::modules::reports::core::daily::daily_summaries;
use crate::modules::reports::core::period::ReportPeriod;
use crate::modules::reports::core::policy::ReportPolicy;
use crate::modules::reports::core::rollup::{
    WorkerRollup, company_monthly_summary, worker_monthly_summary,
};
use crate::modules::reports::core::summaries::{
    CompanyInfo, CompanyMonthlySummary, WorkerInfo, WorkerMonthlySummary,
};
use crate::modules::time_records::adapters::outbound::ledger::{ClockLedger, WindowOrder};
use crate::modules::time_records::core::events::clock_stream_id;
use crate::shared::core::directory::{Company, Worker};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::signature_store::SignatureStore;

#[derive(Debug, Clone)]
pub struct MonthlySummaryQuery {
    pub company_id: String,
    pub year: i32,
    pub month: u32,
    pub timezone: Option<String>,
}

pub struct MonthlySummaryHandler<TLedger, TDirectory, TSignatures>
where
    TLedger: ClockLedger + Send + Sync + 'static,
    TDirectory: Directory + Send + Sync + 'static,
    TSignatures: SignatureStore + Send + Sync + 'static,
{
    ledger: Arc<TLedger>,
    directory: Arc<TDirectory>,
    signatures: Arc<TSignatures>,
    policy: ReportPolicy,
}

impl<TLedger, TDirectory, TSignatures> MonthlySummaryHandler<TLedger, TDirectory, TSignatures>
where
    TLedger: ClockLedger + Send + Sync + 'static,
    TDirectory: Directory + Send + Sync + 'static,
    TSignatures: SignatureStore + Send + Sync + 'static,
{
    pub fn new(
        ledger: Arc<TLedger>,
        directory: Arc<TDirectory>,
        signatures: Arc<TSignatures>,
        policy: ReportPolicy,
    ) -> Self {
        Self {
            ledger,
            directory,
            signatures,
            policy,
        }
    }

    pub fn policy(&self) -> &ReportPolicy {
        &self.policy
    }

    pub async fn worker_summary(
        &self,
        query: &MonthlySummaryQuery,
        worker_id: &str,
        now: DateTime<Utc>,
    ) -> Result<WorkerMonthlySummary, ApplicationError> {
        let period = ReportPeriod::new(query.year, query.month)?;
        let tz = self.policy.timezone(query.timezone.as_deref())?;
        let company = self.company(&query.company_id).await?;
        let worker = self
            .directory
            .worker(worker_id)
            .await?
            .filter(|worker| worker.belongs_to(&company.id))
            .ok_or_else(|| {
                ApplicationError::NotFound(format!("worker {worker_id} in company {}", company.id))
            })?;

        self.summarize(&worker, &company, period, tz, now).await
    }

    /// Rolls up every active worker of the company. A worker whose rollup
    /// fails is logged and left out of the report.
    pub async fn company_summary(
        &self,
        query: &MonthlySummaryQuery,
        now: DateTime<Utc>,
    ) -> Result<CompanyMonthlySummary, ApplicationError> {
        let period = ReportPeriod::new(query.year, query.month)?;
        let tz = self.policy.timezone(query.timezone.as_deref())?;
        let company = self.company(&query.company_id).await?;
        let workers = self.directory.active_workers(&company.id).await?;

        let mut summaries = Vec::with_capacity(workers.len());
        for worker in workers.iter().take(self.policy.max_workers_per_report) {
            match self.summarize(worker, &company, period, tz, now).await {
                Ok(summary) => summaries.push(summary),
                Err(error) => warn!(
                    worker_id = %worker.id,
                    company_id = %company.id,
                    error = %error,
                    "worker skipped in company report"
                ),
            }
        }

        Ok(company_monthly_summary(
            CompanyInfo::from(&company),
            period,
            summaries,
            now,
        ))
    }

    async fn company(&self, company_id: &str) -> Result<Company, ApplicationError> {
        self.directory
            .company(company_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("company {company_id}")))
    }

    async fn summarize(
        &self,
        worker: &Worker,
        company: &Company,
        period: ReportPeriod,
        tz: Tz,
        now: DateTime<Utc>,
    ) -> Result<WorkerMonthlySummary, ApplicationError> {
        let (from, to) = period.utc_window(tz);
        let events = self
            .ledger
            .window(
                &clock_stream_id(&worker.id, &company.id),
                from,
                to,
                WindowOrder::OldestFirst,
                self.policy.max_records_per_month,
            )
            .await?;
        let signature = self
            .signatures
            .find(&worker.id, &company.id, period.year(), period.month())
            .await?;

        let worker_info = WorkerInfo::from(worker);
        let company_info = CompanyInfo::from(company);
        let daily = daily_summaries(&events, tz, &worker_info, &company_info);

        Ok(worker_monthly_summary(WorkerRollup {
            worker: worker_info,
            company: company_info,
            period,
            daily,
            daily_expected_minutes: self.policy.daily_expected_minutes,
            signature: signature.as_ref(),
            generated_at: now,
        }))
    }
}
