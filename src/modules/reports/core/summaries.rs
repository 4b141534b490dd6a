// Report aggregates. Derived on every request and never stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::modules::reports::core::signatures::SignatureStatus;
use crate::shared::core::directory::{Company, Worker};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerInfo {
    pub worker_id: String,
    pub worker_name: String,
    pub worker_id_number: String,
}

impl From<&Worker> for WorkerInfo {
    fn from(worker: &Worker) -> Self {
        Self {
            worker_id: worker.id.clone(),
            worker_name: worker.full_name(),
            worker_id_number: worker.id_number.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyInfo {
    pub company_id: String,
    pub company_name: String,
}

impl From<&Company> for CompanyInfo {
    fn from(company: &Company) -> Self {
        Self {
            company_id: company.id.clone(),
            company_name: company.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyWorkSummary {
    pub date: NaiveDate,
    pub worker_id: String,
    pub worker_name: String,
    pub worker_id_number: String,
    pub company_id: String,
    pub company_name: String,
    pub first_entry: Option<DateTime<Utc>>,
    pub last_exit: Option<DateTime<Utc>>,
    pub total_worked_minutes: f64,
    /// Outside-shift pauses, not counted as work.
    pub total_pause_minutes: f64,
    /// Inside-shift breaks, counted as work.
    pub total_break_minutes: f64,
    pub records_count: usize,
    pub has_open_session: bool,
    pub is_modified: bool,
}

impl DailyWorkSummary {
    pub fn counts_as_worked(&self) -> bool {
        self.total_worked_minutes > 0.0 || (self.has_open_session && self.first_entry.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerMonthlySummary {
    pub worker_id: String,
    pub worker_name: String,
    pub worker_id_number: String,
    pub company_id: String,
    pub company_name: String,
    pub year: i32,
    pub month: u32,
    pub total_days_worked: u32,
    pub total_worked_minutes: f64,
    pub total_worked_hours: f64,
    pub total_pause_minutes: f64,
    pub total_overtime_minutes: f64,
    pub daily_details: Vec<DailyWorkSummary>,
    pub signature_status: SignatureStatus,
    pub signed_at: Option<DateTime<Utc>>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyMonthlySummary {
    pub company_id: String,
    pub company_name: String,
    pub year: i32,
    pub month: u32,
    pub total_workers: usize,
    pub workers: Vec<WorkerMonthlySummary>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerOvertimeSummary {
    pub worker_id: String,
    pub worker_name: String,
    pub worker_id_number: String,
    pub total_worked_minutes: f64,
    pub expected_minutes: f64,
    pub overtime_minutes: f64,
    pub overtime_hours: f64,
    pub days_with_overtime: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OvertimeReport {
    pub company_id: String,
    pub company_name: String,
    pub year: i32,
    pub month: u32,
    pub daily_expected_minutes: f64,
    pub workers_with_overtime: Vec<WorkerOvertimeSummary>,
    pub generated_at: DateTime<Utc>,
}
