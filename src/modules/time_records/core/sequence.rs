// Day-sequence replay.
//
// Re-walks the clock grammar over one UTC day of events after substituting a
// proposed timestamp for one of them:
//
//   waiting_entry -> after_entry -> (in_pause -> after_entry)* -> after_exit -> after_entry ...
//
// Events keep their creation order, so an edit that moves a timestamp across
// a neighbour shows up as a time-order violation rather than a grammar one.
// Every violation is collected; the walk never stops early.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::modules::time_records::core::events::{ClockEvent, EventKind};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    WaitingEntry,
    AfterEntry,
    InPause,
    AfterExit,
}

fn hm(instant: DateTime<Utc>) -> String {
    instant.format("%H:%M").to_string()
}

fn upper(kind: EventKind) -> String {
    kind.as_str().to_uppercase()
}

/// Walks `(kind, timestamp)` pairs that are already in creation order.
pub fn replay(sequence: &[(EventKind, DateTime<Utc>)]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut step = Step::WaitingEntry;
    let mut entry_at: Option<DateTime<Utc>> = None;
    let mut pause_at: Option<DateTime<Utc>> = None;
    let mut exit_at: Option<DateTime<Utc>> = None;

    for &(kind, at) in sequence {
        step = match (step, kind) {
            (Step::WaitingEntry, EventKind::Entry) | (Step::AfterExit, EventKind::Entry) => {
                if let Some(previous_exit) = exit_at.filter(|exit| at < *exit) {
                    errors.push(format!(
                        "ENTRY ({}) is before the previous EXIT ({})",
                        hm(at),
                        hm(previous_exit)
                    ));
                }
                entry_at = Some(at);
                Step::AfterEntry
            }
            (Step::WaitingEntry, other) => {
                errors.push(format!(
                    "invalid sequence: expected ENTRY but found {}",
                    upper(other)
                ));
                Step::WaitingEntry
            }
            (Step::AfterEntry, EventKind::PauseStart) => {
                if let Some(entry) = entry_at.filter(|entry| at < *entry) {
                    errors.push(format!(
                        "PAUSE_START ({}) is before ENTRY ({})",
                        hm(at),
                        hm(entry)
                    ));
                }
                pause_at = Some(at);
                Step::InPause
            }
            (Step::AfterEntry, EventKind::Exit) => {
                if let Some(entry) = entry_at.filter(|entry| at < *entry) {
                    errors.push(format!("EXIT ({}) is before ENTRY ({})", hm(at), hm(entry)));
                }
                exit_at = Some(at);
                Step::AfterExit
            }
            (Step::AfterEntry, other) => {
                errors.push(format!("invalid sequence after ENTRY: {}", upper(other)));
                Step::AfterEntry
            }
            (Step::InPause, EventKind::PauseEnd) => {
                if let Some(start) = pause_at.filter(|start| at < *start) {
                    errors.push(format!(
                        "PAUSE_END ({}) is before PAUSE_START ({})",
                        hm(at),
                        hm(start)
                    ));
                }
                Step::AfterEntry
            }
            (Step::InPause, other) => {
                errors.push(format!(
                    "invalid sequence: expected PAUSE_END but found {}",
                    upper(other)
                ));
                Step::InPause
            }
            (Step::AfterExit, other) => {
                errors.push(format!("invalid sequence after EXIT: {}", upper(other)));
                Step::AfterExit
            }
        };
    }

    errors
}

/// Replays the UTC day of the old timestamp and, when different, the day of
/// the new one, with `target` moved to `new_timestamp`. Duplicate messages
/// are reported once.
pub fn simulate_change(
    ledger: &[ClockEvent],
    target: Uuid,
    new_timestamp: DateTime<Utc>,
) -> Vec<String> {
    let Some(original) = ledger.iter().find(|event| event.id == target) else {
        return Vec::new();
    };

    let mut days: Vec<NaiveDate> = vec![original.timestamp.date_naive()];
    if new_timestamp.date_naive() != original.timestamp.date_naive() {
        days.push(new_timestamp.date_naive());
    }

    let mut ordered: Vec<&ClockEvent> = ledger.iter().collect();
    ordered.sort_by_key(|event| event.creation_order);

    let mut errors: Vec<String> = Vec::new();
    for day in days {
        let sequence: Vec<(EventKind, DateTime<Utc>)> = ordered
            .iter()
            .map(|event| {
                let at = if event.id == target {
                    new_timestamp
                } else {
                    event.timestamp
                };
                (event.kind(), at)
            })
            .filter(|(_, at)| at.date_naive() == day)
            .collect();
        for error in replay(&sequence) {
            if !errors.contains(&error) {
                errors.push(error);
            }
        }
    }
    errors
}
