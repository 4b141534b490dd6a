// Clock events: one record per punch of the clock.
//
// Purpose
// - Hold the immutable facts of the ledger for one (worker, company) pair.
//
// Invariants
// - Ordered by `creation_order`, a stream must read
//   `entry (pause_start pause_end)* exit`, repeated, with at most one trailing
//   open session.
// - `duration_minutes` exists only on exit and pause_end, pause attributes only
//   on pause_start and pause_end. The `Punch` variants encode both rules.
//
// Evolution
// - Events are never deleted. An accepted change request overwrites the
//   timestamp in place and records the audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Entry,
    Exit,
    PauseStart,
    PauseEnd,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Entry => "entry",
            EventKind::Exit => "exit",
            EventKind::PauseStart => "pause_start",
            EventKind::PauseEnd => "pause_end",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pause type attributes copied onto pause events when they are recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseSnapshot {
    pub pause_type_id: String,
    pub pause_type_name: String,
    pub counts_as_work: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Punch {
    Entry,
    Exit {
        duration_minutes: f64,
    },
    PauseStart {
        pause: PauseSnapshot,
    },
    PauseEnd {
        pause: PauseSnapshot,
        duration_minutes: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrail {
    pub modified_by: String,
    pub modified_at: DateTime<Utc>,
    pub modification_reason: String,
    pub original_timestamp: DateTime<Utc>,
}

/// Retroactive edit of a single event's timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Amendment {
    pub new_timestamp: DateTime<Utc>,
    pub modified_by: String,
    pub modified_at: DateTime<Utc>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockEvent {
    pub id: Uuid,
    pub worker_id: String,
    pub company_id: String,
    pub worker_name: String,
    pub company_name: String,
    #[serde(flatten)]
    pub punch: Punch,
    pub timestamp: DateTime<Utc>,
    pub recorded_by: String,
    pub created_at: DateTime<Utc>,
    pub creation_order: i64,
    pub integrity_hash: String,
    #[serde(default)]
    pub audit: Option<AuditTrail>,
}

impl ClockEvent {
    pub fn kind(&self) -> EventKind {
        match self.punch {
            Punch::Entry => EventKind::Entry,
            Punch::Exit { .. } => EventKind::Exit,
            Punch::PauseStart { .. } => EventKind::PauseStart,
            Punch::PauseEnd { .. } => EventKind::PauseEnd,
        }
    }

    pub fn duration_minutes(&self) -> Option<f64> {
        match self.punch {
            Punch::Exit { duration_minutes } | Punch::PauseEnd { duration_minutes, .. } => {
                Some(duration_minutes)
            }
            Punch::Entry | Punch::PauseStart { .. } => None,
        }
    }

    pub fn pause(&self) -> Option<&PauseSnapshot> {
        match &self.punch {
            Punch::PauseStart { pause } | Punch::PauseEnd { pause, .. } => Some(pause),
            Punch::Entry | Punch::Exit { .. } => None,
        }
    }

    pub fn stream_id(&self) -> String {
        clock_stream_id(&self.worker_id, &self.company_id)
    }

    pub fn is_modified(&self) -> bool {
        self.audit.is_some()
    }

    /// Overwrites the timestamp. The first pre-edit timestamp is kept as the
    /// original across repeated amendments.
    pub fn apply_amendment(&mut self, amendment: Amendment) {
        let original_timestamp = self
            .audit
            .as_ref()
            .map_or(self.timestamp, |audit| audit.original_timestamp);
        self.timestamp = amendment.new_timestamp;
        self.audit = Some(AuditTrail {
            modified_by: amendment.modified_by,
            modified_at: amendment.modified_at,
            modification_reason: amendment.reason,
            original_timestamp,
        });
    }
}

/// Stream holding the ledger of one worker within one company.
pub fn clock_stream_id(worker_id: &str, company_id: &str) -> String {
    format!("ClockEvents-{worker_id}-{company_id}")
}
