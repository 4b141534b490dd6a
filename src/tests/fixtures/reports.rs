use chrono::NaiveDate;

use crate::modules::reports::core::signatures::SignatureStatus;
use crate::modules::reports::core::summaries::{DailyWorkSummary, WorkerMonthlySummary};
use crate::tests::fixtures::events::{at, at_day};

/// Closed day for Ana at Acme, 08:00 to 16:00 UTC with a 30 minute pause.
pub fn daily_summary(day: u32, worked_minutes: f64) -> DailyWorkSummary {
    DailyWorkSummary {
        date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        worker_id: "w-1".into(),
        worker_name: "Ana García".into(),
        worker_id_number: "12345678Z".into(),
        company_id: "c-1".into(),
        company_name: "Acme SL".into(),
        first_entry: Some(at_day(day, 8, 0)),
        last_exit: Some(at_day(day, 16, 0)),
        total_worked_minutes: worked_minutes,
        total_pause_minutes: 30.0,
        total_break_minutes: 0.0,
        records_count: 4,
        has_open_session: false,
        is_modified: false,
    }
}

pub fn worker_summary(daily_details: Vec<DailyWorkSummary>) -> WorkerMonthlySummary {
    let total_worked_minutes: f64 = daily_details.iter().map(|d| d.total_worked_minutes).sum();
    WorkerMonthlySummary {
        worker_id: "w-1".into(),
        worker_name: "Ana García".into(),
        worker_id_number: "12345678Z".into(),
        company_id: "c-1".into(),
        company_name: "Acme SL".into(),
        year: 2025,
        month: 3,
        total_days_worked: daily_details.len() as u32,
        total_worked_minutes,
        total_worked_hours: total_worked_minutes / 60.0,
        total_pause_minutes: 30.0 * daily_details.len() as f64,
        total_overtime_minutes: 0.0,
        daily_details,
        signature_status: SignatureStatus::Pending,
        signed_at: None,
        generated_at: at(20, 0),
    }
}
