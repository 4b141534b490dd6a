use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A proposed move of one event's timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateChange {
    pub event_id: Uuid,
    pub new_timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeValidation {
    pub ok: bool,
    pub errors: Vec<String>,
}

impl ChangeValidation {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
        }
    }
}
