// Clock state machine.
//
// Given the folded ledger state and a requested action, produce the next
// event or reject. Transition table, keyed by the last event:
//
//   none | exit       -> entry
//   entry | pause_end -> pause_start (valid pause type) | exit (effective minutes)
//   pause_start       -> pause_end (minutes since the pause started)
//
// Without an explicit action the first option of each row is taken, except
// after entry and pause_end where the default is exit.

use crate::modules::time_records::core::duration::effective_minutes;
use crate::modules::time_records::core::events::{ClockEvent, EventKind, PauseSnapshot, Punch};
use crate::modules::time_records::core::integrity::record_hash;
use crate::modules::time_records::core::state::ClockState;
use crate::modules::time_records::use_cases::submit_clock_action::command::SubmitClockAction;
use crate::modules::time_records::use_cases::submit_clock_action::decision::DecideError;
use crate::shared::core::directory::PauseType;
use crate::shared::core::primitives::{ledger_instant, minutes_between};

/// Reference data resolved by the handler before deciding.
#[derive(Debug, Clone)]
pub struct ClockContext {
    pub worker_name: String,
    pub company_name: String,
    /// Pause type looked up for the requested id; `None` when absent or not valid for the company.
    pub pause_type: Option<PauseType>,
}

pub fn decide_clock_action(
    state: &ClockState,
    ledger: &[ClockEvent],
    command: &SubmitClockAction,
    context: &ClockContext,
) -> Result<ClockEvent, DecideError> {
    let now = ledger_instant(command.requested_at);
    let violation = |action: EventKind| DecideError::SequenceViolation {
        action,
        state: state.last_kind(),
    };

    let punch = match state {
        ClockState::None | ClockState::Exited => match command.action {
            None | Some(EventKind::Entry) => Punch::Entry,
            Some(other) => return Err(violation(other)),
        },
        ClockState::Entered { .. } | ClockState::Resumed { .. } => match command.action {
            Some(EventKind::PauseStart) => Punch::PauseStart {
                pause: pause_snapshot(command, context)?,
            },
            None | Some(EventKind::Exit) => {
                let entry = state.session_entry().ok_or_else(|| {
                    DecideError::DataInconsistency("pause_end without a matching entry".into())
                })?;
                Punch::Exit {
                    duration_minutes: effective_minutes(ledger, entry.timestamp, now)
                        .effective_minutes,
                }
            }
            Some(other) => return Err(violation(other)),
        },
        ClockState::Paused { pause, .. } => match command.action {
            None | Some(EventKind::PauseEnd) => Punch::PauseEnd {
                pause: pause.pause.clone(),
                duration_minutes: minutes_between(pause.started_at, now),
            },
            Some(EventKind::Exit) | Some(EventKind::PauseStart) => {
                return Err(DecideError::OpenPauseViolation {
                    pause_name: pause.pause.pause_type_name.clone(),
                });
            }
            Some(other) => return Err(violation(other)),
        },
    };

    let mut event = ClockEvent {
        id: command.event_id,
        worker_id: command.worker_id.clone(),
        company_id: command.company_id.clone(),
        worker_name: context.worker_name.clone(),
        company_name: context.company_name.clone(),
        punch,
        timestamp: now,
        recorded_by: command.recorded_by.clone(),
        created_at: now,
        creation_order: ledger.len() as i64 + 1,
        integrity_hash: String::new(),
        audit: None,
    };
    event.integrity_hash = record_hash(&event);
    Ok(event)
}

fn pause_snapshot(
    command: &SubmitClockAction,
    context: &ClockContext,
) -> Result<PauseSnapshot, DecideError> {
    let requested = command
        .pause_type_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(DecideError::MissingPauseType)?;
    let pause_type = context
        .pause_type
        .as_ref()
        .filter(|pause_type| pause_type.id == requested)
        .ok_or_else(|| DecideError::InvalidPauseType(requested.to_string()))?;
    Ok(PauseSnapshot {
        pause_type_id: pause_type.id.clone(),
        pause_type_name: pause_type.name.clone(),
        counts_as_work: pause_type.counts_as_work(),
    })
}
