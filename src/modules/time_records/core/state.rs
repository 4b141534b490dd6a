// ClockState is the position of a (worker, company) ledger in the clock grammar.
//
// Purpose
// - Encode "type of the most recent event" as explicit variants so the decider
//   can match the transition table exhaustively.
// - Carry the entry of the current work session, which an exit measures from.
//
// Boundaries
// - No input or output. Built by folding events with `evolve`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::time_records::core::events::{EventKind, PauseSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionEntry {
    pub event_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenPause {
    pub started_at: DateTime<Utc>,
    pub pause: PauseSnapshot,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ClockState {
    /// No event recorded yet.
    #[default]
    None,
    Exited,
    Entered {
        entry: SessionEntry,
    },
    Paused {
        entry: Option<SessionEntry>,
        pause: OpenPause,
    },
    Resumed {
        entry: Option<SessionEntry>,
    },
}

impl ClockState {
    /// Type of the event that produced this state.
    pub fn last_kind(&self) -> Option<EventKind> {
        match self {
            ClockState::None => None,
            ClockState::Exited => Some(EventKind::Exit),
            ClockState::Entered { .. } => Some(EventKind::Entry),
            ClockState::Paused { .. } => Some(EventKind::PauseStart),
            ClockState::Resumed { .. } => Some(EventKind::PauseEnd),
        }
    }

    /// Nearest unmatched entry, if the ledger has one.
    pub fn session_entry(&self) -> Option<&SessionEntry> {
        match self {
            ClockState::Entered { entry } => Some(entry),
            ClockState::Paused { entry, .. } | ClockState::Resumed { entry } => entry.as_ref(),
            ClockState::None | ClockState::Exited => None,
        }
    }

    pub fn has_open_session(&self) -> bool {
        !matches!(self, ClockState::None | ClockState::Exited)
    }
}
