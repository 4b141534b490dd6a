// Monthly rollups built from day summaries.

use chrono::{DateTime, Utc};

use crate::modules::reports::core::period::ReportPeriod;
use crate::modules::reports::core::signatures::{MonthlySignature, SignatureStatus};
use crate::modules::reports::core::summaries::{
    CompanyInfo, CompanyMonthlySummary, DailyWorkSummary, OvertimeReport, WorkerInfo,
    WorkerMonthlySummary, WorkerOvertimeSummary,
};
use crate::shared::core::primitives::{minutes_to_hours, round2};

pub fn days_worked(daily: &[DailyWorkSummary]) -> u32 {
    daily.iter().filter(|day| day.counts_as_worked()).count() as u32
}

pub fn overtime_minutes(worked: f64, days: u32, daily_expected_minutes: f64) -> f64 {
    (worked - f64::from(days) * daily_expected_minutes).max(0.0)
}

pub struct WorkerRollup<'a> {
    pub worker: WorkerInfo,
    pub company: CompanyInfo,
    pub period: ReportPeriod,
    pub daily: Vec<DailyWorkSummary>,
    pub daily_expected_minutes: f64,
    pub signature: Option<&'a MonthlySignature>,
    pub generated_at: DateTime<Utc>,
}

pub fn worker_monthly_summary(rollup: WorkerRollup<'_>) -> WorkerMonthlySummary {
    let total_days_worked = days_worked(&rollup.daily);
    let total_worked_minutes: f64 = rollup.daily.iter().map(|d| d.total_worked_minutes).sum();
    let total_pause_minutes: f64 = rollup.daily.iter().map(|d| d.total_pause_minutes).sum();

    WorkerMonthlySummary {
        worker_id: rollup.worker.worker_id,
        worker_name: rollup.worker.worker_name,
        worker_id_number: rollup.worker.worker_id_number,
        company_id: rollup.company.company_id,
        company_name: rollup.company.company_name,
        year: rollup.period.year(),
        month: rollup.period.month(),
        total_days_worked,
        total_worked_minutes,
        total_worked_hours: minutes_to_hours(total_worked_minutes),
        total_pause_minutes,
        total_overtime_minutes: overtime_minutes(
            total_worked_minutes,
            total_days_worked,
            rollup.daily_expected_minutes,
        ),
        daily_details: rollup.daily,
        signature_status: if rollup.signature.is_some() {
            SignatureStatus::Signed
        } else {
            SignatureStatus::Pending
        },
        signed_at: rollup.signature.map(|signature| signature.signed_at),
        generated_at: rollup.generated_at,
    }
}

/// Workers without a single worked day are dropped.
pub fn company_monthly_summary(
    company: CompanyInfo,
    period: ReportPeriod,
    workers: Vec<WorkerMonthlySummary>,
    generated_at: DateTime<Utc>,
) -> CompanyMonthlySummary {
    let workers: Vec<WorkerMonthlySummary> = workers
        .into_iter()
        .filter(|worker| worker.total_days_worked > 0)
        .collect();
    CompanyMonthlySummary {
        company_id: company.company_id,
        company_name: company.company_name,
        year: period.year(),
        month: period.month(),
        total_workers: workers.len(),
        workers,
        generated_at,
    }
}

pub fn worker_overtime(
    worker: &WorkerMonthlySummary,
    daily_expected_minutes: f64,
) -> Option<WorkerOvertimeSummary> {
    let expected_minutes = f64::from(worker.total_days_worked) * daily_expected_minutes;
    let overtime = worker.total_worked_minutes - expected_minutes;
    if overtime <= 0.0 {
        return None;
    }
    Some(WorkerOvertimeSummary {
        worker_id: worker.worker_id.clone(),
        worker_name: worker.worker_name.clone(),
        worker_id_number: worker.worker_id_number.clone(),
        total_worked_minutes: worker.total_worked_minutes,
        expected_minutes,
        overtime_minutes: overtime,
        overtime_hours: round2(overtime / 60.0),
        days_with_overtime: worker
            .daily_details
            .iter()
            .filter(|day| day.total_worked_minutes > daily_expected_minutes)
            .count() as u32,
    })
}

pub fn overtime_report(
    company: &CompanyMonthlySummary,
    daily_expected_minutes: f64,
    generated_at: DateTime<Utc>,
) -> OvertimeReport {
    OvertimeReport {
        company_id: company.company_id.clone(),
        company_name: company.company_name.clone(),
        year: company.year,
        month: company.month,
        daily_expected_minutes,
        workers_with_overtime: company
            .workers
            .iter()
            .filter_map(|worker| worker_overtime(worker, daily_expected_minutes))
            .collect(),
        generated_at,
    }
}
