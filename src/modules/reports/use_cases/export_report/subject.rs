use chrono::{DateTime, Utc};

use crate::modules::reports::core::summaries::{
    CompanyMonthlySummary, DailyWorkSummary, WorkerMonthlySummary,
};

/// Monthly report being exported: one worker or a whole company.
#[derive(Debug, Clone)]
pub enum MonthlyExport {
    Worker(WorkerMonthlySummary),
    Company(CompanyMonthlySummary),
}

impl MonthlyExport {
    pub fn workers(&self) -> Vec<&WorkerMonthlySummary> {
        match self {
            MonthlyExport::Worker(worker) => vec![worker],
            MonthlyExport::Company(company) => company.workers.iter().collect(),
        }
    }

    /// Worker-days ordered by date, then worker name.
    pub fn daily_rows(&self) -> Vec<&DailyWorkSummary> {
        let mut rows: Vec<&DailyWorkSummary> = self
            .workers()
            .into_iter()
            .flat_map(|worker| worker.daily_details.iter())
            .collect();
        rows.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.worker_name.cmp(&b.worker_name)));
        rows
    }

    pub fn company_name(&self) -> &str {
        match self {
            MonthlyExport::Worker(worker) => &worker.company_name,
            MonthlyExport::Company(company) => &company.company_name,
        }
    }

    /// (year, month) of the report.
    pub fn period(&self) -> (i32, u32) {
        match self {
            MonthlyExport::Worker(worker) => (worker.year, worker.month),
            MonthlyExport::Company(company) => (company.year, company.month),
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        match self {
            MonthlyExport::Worker(worker) => worker.generated_at,
            MonthlyExport::Company(company) => company.generated_at,
        }
    }

    /// File name fragment identifying the subject.
    pub fn label(&self) -> String {
        match self {
            MonthlyExport::Worker(worker) => format!("trabajador_{}", worker.worker_id),
            MonthlyExport::Company(company) => company.company_name.replace(' ', "_"),
        }
    }
}
