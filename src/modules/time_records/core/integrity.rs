// Tamper evidence for clock events and exported report files.
//
// The record hash covers a fixed subset of fields, rendered as canonical JSON
// (sorted keys, no whitespace, ISO-8601 instants). Names and audit fields are
// outside the subset. The timestamp is inside it, so an accepted change
// request makes verification fail; the audit trail tells the two cases apart.

use serde::Serialize;
use serde_json::{Value, json};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::modules::time_records::core::events::ClockEvent;
use crate::shared::core::primitives::iso8601;

pub fn record_hash(event: &ClockEvent) -> String {
    let payload: BTreeMap<&str, Value> = BTreeMap::from([
        ("worker_id", json!(event.worker_id)),
        ("company_id", json!(event.company_id)),
        ("type", json!(event.kind().as_str())),
        ("timestamp", json!(iso8601(event.timestamp))),
        ("duration_minutes", json!(event.duration_minutes())),
        ("created_at", json!(iso8601(event.created_at))),
    ]);
    // BTreeMap keys serialize in order and serde_json's compact writer uses `,` and `:`.
    let canonical = serde_json::to_string(&payload).unwrap_or_default();
    sha256_hex(canonical.as_bytes())
}

pub fn report_hash(bytes: &[u8]) -> String {
    sha256_hex(bytes)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrityCheck {
    pub record_id: Uuid,
    pub stored_hash: String,
    pub computed_hash: String,
    pub verified: bool,
    pub modified: bool,
}

pub fn verify(event: &ClockEvent) -> IntegrityCheck {
    let computed_hash = record_hash(event);
    IntegrityCheck {
        record_id: event.id,
        verified: computed_hash == event.integrity_hash,
        stored_hash: event.integrity_hash.clone(),
        computed_hash,
        modified: event.is_modified(),
    }
}
