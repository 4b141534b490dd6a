use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::time_records::core::events::EventKind;

/// A punch of the clock. Without an explicit `action` the next legal event
/// is inferred from the ledger.
#[derive(Debug, Clone)]
pub struct SubmitClockAction {
    pub event_id: Uuid,
    pub worker_id: String,
    pub company_id: String,
    pub action: Option<EventKind>,
    pub pause_type_id: Option<String>,
    pub recorded_by: String,
    pub requested_at: DateTime<Utc>,
}
