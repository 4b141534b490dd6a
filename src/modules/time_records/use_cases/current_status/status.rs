// Current status of a worker in a company, derived from the folded ledger.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::time_records::core::duration::effective_minutes;
use crate::modules::time_records::core::events::ClockEvent;
use crate::modules::time_records::core::state::ClockState;
use crate::modules::time_records::use_cases::submit_clock_action::decision::DecideError;
use crate::shared::core::primitives::minutes_between;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    LoggedOut,
    LoggedIn,
    OnPause,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentStatus {
    pub worker_id: String,
    pub worker_name: String,
    pub company_id: String,
    pub company_name: String,
    pub status: WorkerStatus,
    pub entry_time: Option<DateTime<Utc>>,
    pub time_worked_minutes: Option<f64>,
    pub pause_type_id: Option<String>,
    pub pause_type_name: Option<String>,
    pub pause_counts_as_work: Option<bool>,
    pub pause_started_at: Option<DateTime<Utc>>,
    pub pause_duration_minutes: Option<f64>,
}

pub struct StatusSubject {
    pub worker_id: String,
    pub worker_name: String,
    pub company_id: String,
    pub company_name: String,
}

/// While on pause, worked time is measured up to the pause start.
pub fn current_status(
    subject: StatusSubject,
    state: &ClockState,
    ledger: &[ClockEvent],
    now: DateTime<Utc>,
) -> Result<CurrentStatus, DecideError> {
    let mut status = CurrentStatus {
        worker_id: subject.worker_id,
        worker_name: subject.worker_name,
        company_id: subject.company_id,
        company_name: subject.company_name,
        status: WorkerStatus::LoggedOut,
        entry_time: None,
        time_worked_minutes: None,
        pause_type_id: None,
        pause_type_name: None,
        pause_counts_as_work: None,
        pause_started_at: None,
        pause_duration_minutes: None,
    };

    match state {
        ClockState::None | ClockState::Exited => {}
        ClockState::Entered { entry } => {
            status.status = WorkerStatus::LoggedIn;
            status.entry_time = Some(entry.timestamp);
            status.time_worked_minutes =
                Some(effective_minutes(ledger, entry.timestamp, now).effective_minutes);
        }
        ClockState::Resumed { entry } => {
            let entry = entry.as_ref().ok_or_else(|| {
                DecideError::DataInconsistency("pause_end without entry".into())
            })?;
            status.status = WorkerStatus::LoggedIn;
            status.entry_time = Some(entry.timestamp);
            status.time_worked_minutes =
                Some(effective_minutes(ledger, entry.timestamp, now).effective_minutes);
        }
        ClockState::Paused { entry, pause } => {
            let entry = entry
                .as_ref()
                .ok_or_else(|| DecideError::DataInconsistency("pause without entry".into()))?;
            status.status = WorkerStatus::OnPause;
            status.entry_time = Some(entry.timestamp);
            status.time_worked_minutes = Some(
                effective_minutes(ledger, entry.timestamp, pause.started_at).effective_minutes,
            );
            status.pause_type_id = Some(pause.pause.pause_type_id.clone());
            status.pause_type_name = Some(pause.pause.pause_type_name.clone());
            status.pause_counts_as_work = Some(pause.pause.counts_as_work);
            status.pause_started_at = Some(pause.started_at);
            status.pause_duration_minutes = Some(minutes_between(pause.started_at, now));
        }
    }

    Ok(status)
}
