// Duration calculator.
//
// Effective minutes of a work session: elapsed time between entry and exit
// minus every outside-shift pause whose start and end both lie in
// [entry, exit]. The result is stored on the exit event and reused by reports.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::modules::time_records::core::events::{ClockEvent, Punch};
use crate::shared::core::primitives::minutes_between;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationBreakdown {
    pub total_minutes: f64,
    pub outside_shift_pause_minutes: f64,
    pub effective_minutes: f64,
}

/// Pauses are paired in creation order: each pause_start with the next
/// pause_end. A trailing pause_start without an end is ignored.
pub fn effective_minutes(
    ledger: &[ClockEvent],
    entry: DateTime<Utc>,
    exit: DateTime<Utc>,
) -> DurationBreakdown {
    let total_minutes = minutes_between(entry, exit);

    let mut pauses: Vec<&ClockEvent> = ledger
        .iter()
        .filter(|event| matches!(event.punch, Punch::PauseStart { .. } | Punch::PauseEnd { .. }))
        .filter(|event| event.timestamp >= entry && event.timestamp <= exit)
        .collect();
    pauses.sort_by_key(|event| event.creation_order);

    let mut open: Option<&ClockEvent> = None;
    let mut outside_shift_pause_minutes = 0.0;
    for event in pauses {
        match &event.punch {
            Punch::PauseStart { .. } => open = Some(event),
            Punch::PauseEnd { .. } => {
                if let Some(start) = open.take() {
                    let counts_as_work = start.pause().is_some_and(|p| p.counts_as_work);
                    if !counts_as_work {
                        outside_shift_pause_minutes +=
                            minutes_between(start.timestamp, event.timestamp);
                    }
                }
            }
            Punch::Entry | Punch::Exit { .. } => {}
        }
    }

    let effective = (total_minutes - outside_shift_pause_minutes).max(0.0);
    debug!(
        total_minutes,
        outside_shift_pause_minutes,
        effective_minutes = effective,
        "duration calculated"
    );

    DurationBreakdown {
        total_minutes,
        outside_shift_pause_minutes,
        effective_minutes: effective,
    }
}
