// Per-day derivation of the report aggregator.
//
// A day is a calendar date in the report timezone. Worked minutes come from
// the durations cached on exit and pause_end events, never recomputed here.

use chrono::NaiveDate;
use chrono_tz::Tz;
use std::collections::BTreeMap;

use crate::modules::reports::core::summaries::{CompanyInfo, DailyWorkSummary, WorkerInfo};
use crate::modules::time_records::core::events::{ClockEvent, Punch};

/// Buckets time-ordered events by their local calendar date in `tz`.
pub fn group_by_local_day(events: &[ClockEvent], tz: Tz) -> BTreeMap<NaiveDate, Vec<&ClockEvent>> {
    events.iter().fold(BTreeMap::new(), |mut days, event| {
        days.entry(event.timestamp.with_timezone(&tz).date_naive())
            .or_insert_with(Vec::new)
            .push(event);
        days
    })
}

pub fn process_day_records(
    date: NaiveDate,
    records: &[&ClockEvent],
    worker: &WorkerInfo,
    company: &CompanyInfo,
) -> DailyWorkSummary {
    let mut summary = DailyWorkSummary {
        date,
        worker_id: worker.worker_id.clone(),
        worker_name: worker.worker_name.clone(),
        worker_id_number: worker.worker_id_number.clone(),
        company_id: company.company_id.clone(),
        company_name: company.company_name.clone(),
        first_entry: None,
        last_exit: None,
        total_worked_minutes: 0.0,
        total_pause_minutes: 0.0,
        total_break_minutes: 0.0,
        records_count: records.len(),
        has_open_session: false,
        is_modified: false,
    };

    for record in records {
        match &record.punch {
            Punch::Entry => {
                summary.first_entry.get_or_insert(record.timestamp);
            }
            Punch::Exit { duration_minutes } => {
                summary.last_exit = Some(record.timestamp);
                summary.total_worked_minutes += duration_minutes;
            }
            Punch::PauseEnd {
                pause,
                duration_minutes,
            } => {
                if pause.counts_as_work {
                    summary.total_break_minutes += duration_minutes;
                } else {
                    summary.total_pause_minutes += duration_minutes;
                }
            }
            Punch::PauseStart { .. } => {}
        }
        summary.is_modified |= record.is_modified();
    }
    summary.has_open_session = records
        .last()
        .is_some_and(|last| !matches!(last.punch, Punch::Exit { .. }));
    summary
}

/// Day summaries of a worker's month, in date order.
pub fn daily_summaries(
    events: &[ClockEvent],
    tz: Tz,
    worker: &WorkerInfo,
    company: &CompanyInfo,
) -> Vec<DailyWorkSummary> {
    group_by_local_day(events, tz)
        .into_iter()
        .map(|(date, records)| process_day_records(date, &records, worker, company))
        .collect()
}

#[cfg(test)]
mod daily_summary_tests {
    use super::*;
    use crate::modules::time_records::core::events::Amendment;
    use crate::tests::fixtures::events::{ClockEventBuilder, at, at_day, ledger};
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (WorkerInfo, CompanyInfo) {
        (
            WorkerInfo {
                worker_id: "w-1".into(),
                worker_name: "Ana García".into(),
                worker_id_number: "12345678Z".into(),
            },
            CompanyInfo {
                company_id: "c-1".into(),
                company_name: "Acme SL".into(),
            },
        )
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[rstest]
    fn it_should_move_a_late_utc_entry_to_the_next_local_day() {
        let events = ledger(vec![ClockEventBuilder::entry(at(23, 50))]);
        let days = group_by_local_day(&events, chrono_tz::Europe::Madrid);
        assert_eq!(days.keys().copied().collect::<Vec<_>>(), vec![date(4)]);

        let days = group_by_local_day(&events, chrono_tz::UTC);
        assert_eq!(days.keys().copied().collect::<Vec<_>>(), vec![date(3)]);
    }

    #[rstest]
    fn it_should_sum_cached_durations_and_split_pauses(before_each: (WorkerInfo, CompanyInfo)) {
        let (worker, company) = before_each;
        let events = ledger(vec![
            ClockEventBuilder::entry(at(8, 0)),
            ClockEventBuilder::pause_start(at(10, 0), true),
            ClockEventBuilder::pause_end(at(10, 15), 15.0, true),
            ClockEventBuilder::pause_start(at(13, 0), false),
            ClockEventBuilder::pause_end(at(13, 30), 30.0, false),
            ClockEventBuilder::exit(at(16, 0), 450.0),
        ]);
        let records: Vec<&ClockEvent> = events.iter().collect();

        let summary = process_day_records(date(3), &records, &worker, &company);

        assert_eq!(summary.first_entry, Some(at(8, 0)));
        assert_eq!(summary.last_exit, Some(at(16, 0)));
        assert_eq!(summary.total_worked_minutes, 450.0);
        assert_eq!(summary.total_pause_minutes, 30.0);
        assert_eq!(summary.total_break_minutes, 15.0);
        assert_eq!(summary.records_count, 6);
        assert!(!summary.has_open_session);
        assert!(!summary.is_modified);
        assert!(summary.counts_as_worked());
    }

    #[rstest]
    fn it_should_flag_an_open_session_and_modified_records(before_each: (WorkerInfo, CompanyInfo)) {
        let (worker, company) = before_each;
        let mut events = ledger(vec![
            ClockEventBuilder::entry(at(8, 0)),
            ClockEventBuilder::pause_start(at(12, 0), false),
        ]);
        events[0].apply_amendment(Amendment {
            new_timestamp: at(7, 55),
            modified_by: "admin-1".into(),
            modified_at: at(18, 0),
            reason: "forgot to clock in".into(),
        });
        let records: Vec<&ClockEvent> = events.iter().collect();

        let summary = process_day_records(date(3), &records, &worker, &company);

        assert!(summary.has_open_session);
        assert!(summary.is_modified);
        assert_eq!(summary.total_worked_minutes, 0.0);
        assert!(summary.counts_as_worked());
    }

    #[rstest]
    fn it_should_keep_the_first_entry_and_last_exit_of_split_shifts(
        before_each: (WorkerInfo, CompanyInfo),
    ) {
        let (worker, company) = before_each;
        let events = ledger(vec![
            ClockEventBuilder::entry(at_day(5, 8, 0)),
            ClockEventBuilder::exit(at_day(5, 12, 0), 240.0),
            ClockEventBuilder::entry(at_day(5, 15, 0)),
            ClockEventBuilder::exit(at_day(5, 18, 0), 180.0),
        ]);

        let days = daily_summaries(&events, chrono_tz::UTC, &worker, &company);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].first_entry, Some(at_day(5, 8, 0)));
        assert_eq!(days[0].last_exit, Some(at_day(5, 18, 0)));
        assert_eq!(days[0].total_worked_minutes, 420.0);
    }
}
