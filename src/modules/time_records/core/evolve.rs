// Evolve: combine a prior clock state with the next ledger event.
//
// Deterministic and total. Events arrive in creation order; an out-of-grammar
// event still moves the state so that the decider sees the latest fact.

use crate::modules::time_records::core::events::{ClockEvent, Punch};
use crate::modules::time_records::core::state::{ClockState, OpenPause, SessionEntry};

pub fn evolve(state: ClockState, event: &ClockEvent) -> ClockState {
    match &event.punch {
        Punch::Entry => ClockState::Entered {
            entry: SessionEntry {
                event_id: event.id,
                timestamp: event.timestamp,
            },
        },
        Punch::Exit { .. } => ClockState::Exited,
        Punch::PauseStart { pause } => ClockState::Paused {
            entry: state.session_entry().cloned(),
            pause: OpenPause {
                started_at: event.timestamp,
                pause: pause.clone(),
            },
        },
        Punch::PauseEnd { .. } => ClockState::Resumed {
            entry: state.session_entry().cloned(),
        },
    }
}

pub fn fold_ledger<'a>(events: impl IntoIterator<Item = &'a ClockEvent>) -> ClockState {
    events.into_iter().fold(ClockState::None, evolve)
}
