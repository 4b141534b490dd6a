use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::modules::reports::use_cases::export_report::csv::{monthly_csv, overtime_csv};
use crate::modules::reports::use_cases::export_report::pdf::monthly_pdf;
use crate::modules::reports::use_cases::export_report::subject::MonthlyExport;
use crate::modules::reports::use_cases::export_report::xlsx::monthly_xlsx;
use crate::modules::reports::use_cases::monthly_summary::handler::{
    MonthlySummaryHandler, MonthlySummaryQuery,
};
use crate::modules::reports::use_cases::overtime_report::handler::OvertimeReportHandler;
use crate::modules::time_records::adapters::outbound::ledger::ClockLedger;
use crate::modules::time_records::core::integrity::report_hash;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::signature_store::SignatureStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
    /// SHA-256 of `bytes`, lowercase hex.
    pub report_hash: String,
    pub generated_at: DateTime<Utc>,
}

impl ExportedReport {
    fn new(file_name: String, content_type: &'static str, bytes: Vec<u8>, now: DateTime<Utc>) -> Self {
        Self {
            file_name,
            content_type,
            report_hash: report_hash(&bytes),
            bytes,
            generated_at: now,
        }
    }
}

pub struct ExportReportHandler<TLedger, TDirectory, TSignatures>
where
    TLedger: ClockLedger + Send + Sync + 'static,
    TDirectory: Directory + Send + Sync + 'static,
    TSignatures: SignatureStore + Send + Sync + 'static,
{
    monthly: Arc<MonthlySummaryHandler<TLedger, TDirectory, TSignatures>>,
    overtime: Arc<OvertimeReportHandler<TLedger, TDirectory, TSignatures>>,
}

impl<TLedger, TDirectory, TSignatures> ExportReportHandler<TLedger, TDirectory, TSignatures>
where
    TLedger: ClockLedger + Send + Sync + 'static,
    TDirectory: Directory + Send + Sync + 'static,
    TSignatures: SignatureStore + Send + Sync + 'static,
{
    pub fn new(
        monthly: Arc<MonthlySummaryHandler<TLedger, TDirectory, TSignatures>>,
        overtime: Arc<OvertimeReportHandler<TLedger, TDirectory, TSignatures>>,
    ) -> Self {
        Self { monthly, overtime }
    }

    /// Exports one worker's month when `worker_id` is given, else the company's.
    pub async fn monthly(
        &self,
        query: &MonthlySummaryQuery,
        worker_id: Option<&str>,
        format: ExportFormat,
        now: DateTime<Utc>,
    ) -> Result<ExportedReport, ApplicationError> {
        let policy = self.monthly.policy();
        let tz = policy.timezone(query.timezone.as_deref())?;
        let report = match worker_id.filter(|id| !id.is_empty()) {
            Some(worker_id) => {
                MonthlyExport::Worker(self.monthly.worker_summary(query, worker_id, now).await?)
            }
            None => MonthlyExport::Company(self.monthly.company_summary(query, now).await?),
        };

        let bytes = match format {
            ExportFormat::Csv => monthly_csv(&report, tz, policy.daily_expected_minutes)?,
            ExportFormat::Xlsx => monthly_xlsx(&report, tz)?,
            ExportFormat::Pdf => monthly_pdf(&report, tz),
        };
        let file_name = format!(
            "informe_{}_{:04}-{:02}.{}",
            report.label(),
            query.year,
            query.month,
            format.extension()
        );
        let exported = ExportedReport::new(file_name, format.content_type(), bytes, now);

        info!(
            company_id = %query.company_id,
            file_name = %exported.file_name,
            report_hash = %exported.report_hash,
            "monthly report exported"
        );
        Ok(exported)
    }

    pub async fn overtime(
        &self,
        query: &MonthlySummaryQuery,
        daily_expected_minutes: Option<f64>,
        now: DateTime<Utc>,
    ) -> Result<ExportedReport, ApplicationError> {
        let report = self
            .overtime
            .handle(query, daily_expected_minutes, now)
            .await?;
        let file_name = format!(
            "horas_extra_{}_{:04}-{:02}.csv",
            report.company_name.replace(' ', "_"),
            report.year,
            report.month
        );
        let exported = ExportedReport::new(
            file_name,
            ExportFormat::Csv.content_type(),
            overtime_csv(&report)?,
            now,
        );

        info!(
            company_id = %query.company_id,
            file_name = %exported.file_name,
            report_hash = %exported.report_hash,
            "overtime report exported"
        );
        Ok(exported)
    }
}
