use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::time_records::use_cases::validate_change::command::ValidateChange;

#[derive(Debug, Clone, Deserialize)]
pub struct ApplyChange {
    pub event_id: Uuid,
    pub new_timestamp: DateTime<Utc>,
    pub modified_by: String,
    pub reason: String,
}

impl ApplyChange {
    pub fn validation(&self) -> ValidateChange {
        ValidateChange {
            event_id: self.event_id,
            new_timestamp: self.new_timestamp,
        }
    }
}
