// Small time helpers shared by the clock ledger and the report engine.
//
// Instants are always `DateTime<Utc>`. Local calendar days only appear at the
// report aggregation boundary.

use chrono::{DateTime, SubsecRound, Timelike, Utc};

/// Fractional minutes elapsed from `start` to `end` (negative if `end` is earlier).
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 60_000.0
}

/// Truncates an instant to microsecond precision, the precision the ledger persists.
pub fn ledger_instant(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.trunc_subsecs(6)
}

/// ISO-8601 with an explicit `+00:00` offset. Fractional seconds are rendered
/// with six digits, and only when non-zero.
pub fn iso8601(instant: DateTime<Utc>) -> String {
    if instant.nanosecond() / 1_000 == 0 {
        instant.format("%Y-%m-%dT%H:%M:%S+00:00").to_string()
    } else {
        instant.format("%Y-%m-%dT%H:%M:%S%.6f+00:00").to_string()
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn minutes_to_hours(minutes: f64) -> f64 {
    round2(minutes / 60.0)
}
