use chrono_tz::Tz;

use crate::modules::reports::core::period::parse_timezone;
use crate::shared::core::errors::ApplicationError;

/// Tunables shared by every report handler.
#[derive(Debug, Clone)]
pub struct ReportPolicy {
    pub daily_expected_minutes: f64,
    pub max_workers_per_report: usize,
    pub max_records_per_month: usize,
    pub default_timezone: Tz,
}

impl Default for ReportPolicy {
    fn default() -> Self {
        Self {
            daily_expected_minutes: 480.0,
            max_workers_per_report: 10_000,
            max_records_per_month: 10_000,
            default_timezone: chrono_tz::Europe::Madrid,
        }
    }
}

impl ReportPolicy {
    pub fn timezone(&self, requested: Option<&str>) -> Result<Tz, ApplicationError> {
        match requested {
            Some(name) if !name.is_empty() => parse_timezone(name),
            _ => Ok(self.default_timezone),
        }
    }
}

#[cfg(test)]
mod report_policy_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, chrono_tz::Europe::Madrid)]
    #[case(Some(""), chrono_tz::Europe::Madrid)]
    #[case(Some("Atlantic/Canary"), chrono_tz::Atlantic::Canary)]
    fn it_should_fall_back_to_the_default_timezone(#[case] requested: Option<&str>, #[case] expected: Tz) {
        assert_eq!(ReportPolicy::default().timezone(requested).unwrap(), expected);
    }
}
