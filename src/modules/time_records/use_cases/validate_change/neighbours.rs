// Neighbour checks for entry and exit edits.
//
// Neighbours are found by creation order, not by timestamp, so an edit is
// compared against the session it belongs to even after earlier edits moved
// timestamps around.
//
// - entry: strictly before the next exit, not before the previous exit.
// - exit: strictly after the previous entry, not after the next entry.
//
// Other event types yield no neighbour violations.

use chrono::{DateTime, Utc};

use crate::modules::time_records::core::events::{ClockEvent, EventKind};

fn hm(instant: DateTime<Utc>) -> String {
    instant.format("%H:%M").to_string()
}

fn previous<'a>(
    ledger: &'a [ClockEvent],
    target: &ClockEvent,
    kind: EventKind,
) -> Option<&'a ClockEvent> {
    ledger
        .iter()
        .filter(|event| event.kind() == kind && event.creation_order < target.creation_order)
        .max_by_key(|event| event.creation_order)
}

fn next<'a>(ledger: &'a [ClockEvent], target: &ClockEvent, kind: EventKind) -> Option<&'a ClockEvent> {
    ledger
        .iter()
        .filter(|event| event.kind() == kind && event.creation_order > target.creation_order)
        .min_by_key(|event| event.creation_order)
}

pub fn neighbour_violations(
    ledger: &[ClockEvent],
    target: &ClockEvent,
    new_timestamp: DateTime<Utc>,
) -> Vec<String> {
    let mut errors = Vec::new();
    match target.kind() {
        EventKind::Entry => {
            if let Some(exit) = next(ledger, target, EventKind::Exit)
                && new_timestamp >= exit.timestamp
            {
                errors.push(format!(
                    "the new entry time ({}) must be before the exit ({})",
                    hm(new_timestamp),
                    hm(exit.timestamp)
                ));
            }
            if let Some(exit) = previous(ledger, target, EventKind::Exit)
                && new_timestamp < exit.timestamp
            {
                errors.push(format!(
                    "the new entry time ({}) cannot be before the previous exit ({})",
                    hm(new_timestamp),
                    hm(exit.timestamp)
                ));
            }
        }
        EventKind::Exit => {
            if let Some(entry) = previous(ledger, target, EventKind::Entry)
                && new_timestamp <= entry.timestamp
            {
                errors.push(format!(
                    "the new exit time ({}) must be after the entry ({})",
                    hm(new_timestamp),
                    hm(entry.timestamp)
                ));
            }
            if let Some(entry) = next(ledger, target, EventKind::Entry)
                && new_timestamp > entry.timestamp
            {
                errors.push(format!(
                    "the new exit time ({}) cannot be after the next entry ({})",
                    hm(new_timestamp),
                    hm(entry.timestamp)
                ));
            }
        }
        EventKind::PauseStart | EventKind::PauseEnd => {}
    }
    errors
}

#[cfg(test)]
mod neighbour_violation_tests {
    use super::*;
    use crate::tests::fixtures::events::{ClockEventBuilder, at, ledger};
    use rstest::{fixture, rstest};

    /// Two sessions: 08:00-12:00 and 13:00-17:00.
    #[fixture]
    fn before_each() -> Vec<ClockEvent> {
        ledger(vec![
            ClockEventBuilder::entry(at(8, 0)),
            ClockEventBuilder::exit(at(12, 0), 240.0),
            ClockEventBuilder::entry(at(13, 0)),
            ClockEventBuilder::exit(at(17, 0), 240.0),
        ])
    }

    #[rstest]
    #[case(at(12, 30))]
    #[case(at(12, 0))]
    #[case(at(16, 59))]
    fn it_should_accept_an_entry_between_the_previous_and_next_exit(
        before_each: Vec<ClockEvent>,
        #[case] new_timestamp: DateTime<Utc>,
    ) {
        assert!(neighbour_violations(&before_each, &before_each[2], new_timestamp).is_empty());
    }

    #[rstest]
    #[case(at(17, 0))]
    #[case(at(18, 0))]
    fn it_should_reject_an_entry_on_or_after_the_next_exit(
        before_each: Vec<ClockEvent>,
        #[case] new_timestamp: DateTime<Utc>,
    ) {
        let errors = neighbour_violations(&before_each, &before_each[2], new_timestamp);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("must be before the exit (17:00)"));
    }

    #[rstest]
    fn it_should_reject_an_entry_overlapping_the_previous_session(before_each: Vec<ClockEvent>) {
        let errors = neighbour_violations(&before_each, &before_each[2], at(11, 0));
        assert_eq!(
            errors,
            vec!["the new entry time (11:00) cannot be before the previous exit (12:00)".to_string()]
        );
    }

    #[rstest]
    fn it_should_reject_an_exit_not_after_its_entry(before_each: Vec<ClockEvent>) {
        let errors = neighbour_violations(&before_each, &before_each[1], at(8, 0));
        assert_eq!(
            errors,
            vec!["the new exit time (08:00) must be after the entry (08:00)".to_string()]
        );
    }

    #[rstest]
    fn it_should_reject_an_exit_after_the_next_entry(before_each: Vec<ClockEvent>) {
        let errors = neighbour_violations(&before_each, &before_each[1], at(13, 30));
        assert_eq!(
            errors,
            vec!["the new exit time (13:30) cannot be after the next entry (13:00)".to_string()]
        );
    }

    #[rstest]
    fn it_should_not_check_pause_edits() {
        let events = ledger(vec![
            ClockEventBuilder::entry(at(8, 0)),
            ClockEventBuilder::pause_start(at(10, 0), false),
        ]);
        assert!(neighbour_violations(&events, &events[1], at(7, 0)).is_empty());
    }
}
