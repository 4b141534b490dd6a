// Clock event builders. All instants fall in March 2025, UTC.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::modules::time_records::core::events::{ClockEvent, PauseSnapshot, Punch};
use crate::modules::time_records::core::integrity::record_hash;

/// 2025-03-03 at `hour:minute` UTC, a Monday.
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    at_day(3, hour, minute)
}

pub fn at_day(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, minute, 0).unwrap()
}

pub fn pause_snapshot(counts_as_work: bool) -> PauseSnapshot {
    if counts_as_work {
        PauseSnapshot {
            pause_type_id: "pt-coffee".into(),
            pause_type_name: "Coffee".into(),
            counts_as_work: true,
        }
    } else {
        PauseSnapshot {
            pause_type_id: "pt-lunch".into(),
            pause_type_name: "Lunch".into(),
            counts_as_work: false,
        }
    }
}

pub struct ClockEventBuilder {
    inner: ClockEvent,
}

#[allow(dead_code)]
impl ClockEventBuilder {
    fn new(punch: Punch, timestamp: DateTime<Utc>) -> Self {
        Self {
            inner: ClockEvent {
                id: Uuid::now_v7(),
                worker_id: "w-1".into(),
                company_id: "c-1".into(),
                worker_name: "Ana García".into(),
                company_name: "Acme SL".into(),
                punch,
                timestamp,
                recorded_by: "w-1".into(),
                created_at: timestamp,
                creation_order: 1,
                integrity_hash: String::new(),
                audit: None,
            },
        }
    }

    pub fn entry(timestamp: DateTime<Utc>) -> Self {
        Self::new(Punch::Entry, timestamp)
    }

    pub fn exit(timestamp: DateTime<Utc>, duration_minutes: f64) -> Self {
        Self::new(Punch::Exit { duration_minutes }, timestamp)
    }

    pub fn pause_start(timestamp: DateTime<Utc>, counts_as_work: bool) -> Self {
        Self::new(
            Punch::PauseStart {
                pause: pause_snapshot(counts_as_work),
            },
            timestamp,
        )
    }

    pub fn pause_end(timestamp: DateTime<Utc>, duration_minutes: f64, counts_as_work: bool) -> Self {
        Self::new(
            Punch::PauseEnd {
                pause: pause_snapshot(counts_as_work),
                duration_minutes,
            },
            timestamp,
        )
    }

    pub fn worker(mut self, worker_id: impl Into<String>) -> Self {
        self.inner.worker_id = worker_id.into();
        self.inner.recorded_by = self.inner.worker_id.clone();
        self
    }

    pub fn company(mut self, company_id: impl Into<String>) -> Self {
        self.inner.company_id = company_id.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.inner.created_at = created_at;
        self
    }

    pub fn creation_order(mut self, creation_order: i64) -> Self {
        self.inner.creation_order = creation_order;
        self
    }

    pub fn build(mut self) -> ClockEvent {
        self.inner.integrity_hash = record_hash(&self.inner);
        self.inner
    }
}

/// Builds a ledger with creation orders 1..=n in the given order.
pub fn ledger(builders: Vec<ClockEventBuilder>) -> Vec<ClockEvent> {
    builders
        .into_iter()
        .zip(1..)
        .map(|(builder, order)| builder.creation_order(order).build())
        .collect()
}

#[cfg(test)]
mod clock_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_number_the_ledger_and_hash_each_event() {
        let events = ledger(vec![
            ClockEventBuilder::entry(at(8, 0)),
            ClockEventBuilder::exit(at(16, 0), 480.0).worker("w-2"),
        ]);
        assert_eq!(events[0].creation_order, 1);
        assert_eq!(events[1].creation_order, 2);
        assert_eq!(events[1].worker_id, "w-2");
        assert!(events.iter().all(|e| e.integrity_hash == record_hash(e)));
    }
}
