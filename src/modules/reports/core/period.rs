// Report periods and their UTC query windows.
//
// Storage is queried by UTC instant. The window for a month runs from local
// midnight of day 1 to local midnight of day 1 of the next month, so events
// near month boundaries are attributed to the local calendar month.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::shared::core::errors::ApplicationError;

pub const MIN_YEAR: i32 = 2020;
pub const MAX_YEAR: i32 = 2035;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    year: i32,
    month: u32,
    first_day: NaiveDate,
    next_first_day: NaiveDate,
}

impl ReportPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self, ApplicationError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ApplicationError::InvalidPeriod(format!(
                "year {year} outside {MIN_YEAR}-{MAX_YEAR}"
            )));
        }
        let (next_year, next_month) = Self::next_month(year, month);
        match (
            NaiveDate::from_ymd_opt(year, month, 1),
            NaiveDate::from_ymd_opt(next_year, next_month, 1),
        ) {
            (Some(first_day), Some(next_first_day)) => Ok(Self {
                year,
                month,
                first_day,
                next_first_day,
            }),
            _ => Err(ApplicationError::InvalidPeriod(format!(
                "month {month} outside 1-12"
            ))),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// `YYYY-MM`, as used in export file names.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
        if month <= 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        }
    }

    pub fn next_month(year: i32, month: u32) -> (i32, u32) {
        if month >= 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        }
    }

    /// `[start, end)` in UTC covering the month in `tz`.
    pub fn utc_window(&self, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            local_midnight(tz, self.first_day),
            local_midnight(tz, self.next_first_day),
        )
    }
}

fn local_midnight(tz: Tz, day: NaiveDate) -> DateTime<Utc> {
    let midnight = day.and_time(chrono::NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(local) => local.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        // Midnight skipped by a DST jump: use the offset in force at that wall time.
        LocalResult::None => {
            let offset = tz.offset_from_utc_datetime(&midnight).fix().local_minus_utc();
            Utc.from_utc_datetime(&(midnight - Duration::seconds(offset.into())))
        }
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz, ApplicationError> {
    name.parse::<Tz>()
        .map_err(|_| ApplicationError::InvalidTimezone(name.to_string()))
}

#[cfg(test)]
mod report_period_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2019, 5)]
    #[case(2036, 5)]
    #[case(2025, 0)]
    #[case(2025, 13)]
    fn it_should_reject_out_of_range_periods(#[case] year: i32, #[case] month: u32) {
        assert!(matches!(
            ReportPeriod::new(year, month),
            Err(ApplicationError::InvalidPeriod(_))
        ));
    }

    #[rstest]
    fn it_should_convert_a_winter_month_to_utc() {
        let period = ReportPeriod::new(2025, 1).unwrap();
        let (start, end) = period.utc_window(chrono_tz::Europe::Madrid);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 1, 31, 23, 0, 0).unwrap());
    }

    #[rstest]
    fn it_should_follow_the_dst_change_inside_the_month() {
        let period = ReportPeriod::new(2025, 3).unwrap();
        let (start, end) = period.utc_window(chrono_tz::Europe::Madrid);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 2, 28, 23, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 3, 31, 22, 0, 0).unwrap());
    }

    #[rstest]
    fn it_should_roll_december_into_the_next_year() {
        let period = ReportPeriod::new(2025, 12).unwrap();
        let (_, end) = period.utc_window(chrono_tz::UTC);
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(period.label(), "2025-12");
        assert_eq!(ReportPeriod::previous_month(2025, 1), (2024, 12));
    }

    #[rstest]
    fn it_should_reject_unknown_timezones() {
        assert!(parse_timezone("Europe/Madrid").is_ok());
        assert!(matches!(
            parse_timezone("Mars/Olympus"),
            Err(ApplicationError::InvalidTimezone(_))
        ));
    }
}
