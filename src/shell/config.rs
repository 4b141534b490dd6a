use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::modules::reports::core::period::parse_timezone;
use crate::modules::reports::core::policy::ReportPolicy;
use crate::shared::core::errors::ApplicationError;

pub const CONFIG_FILE: &str = "time_records.toml";
pub const CONFIG_PATH_VAR: &str = "TR_CONFIG";
pub const ENV_PREFIX: &str = "TR_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub bind_addr: String,
    pub log_filter: String,
    pub default_timezone: String,
    pub daily_expected_minutes: f64,
    pub max_workers_per_report: usize,
    pub max_records_per_month: usize,
    /// Re-walk the day sequence when a pause boundary is edited.
    pub replay_pause_edits: bool,
    /// JSON file with companies, workers and pause types.
    pub directory_seed: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let policy = ReportPolicy::default();
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            log_filter: "info".to_string(),
            default_timezone: policy.default_timezone.name().to_string(),
            daily_expected_minutes: policy.daily_expected_minutes,
            max_workers_per_report: policy.max_workers_per_report,
            max_records_per_month: policy.max_records_per_month,
            replay_pause_edits: false,
            directory_seed: None,
        }
    }
}

impl Settings {
    /// Defaults, then `time_records.toml` (or the file named by `TR_CONFIG`),
    /// then `TR_*` environment variables.
    pub fn load() -> Result<Self, figment::Error> {
        let path = std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        Self::figment(&path).extract()
    }

    pub fn figment(config_path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn report_policy(&self) -> Result<ReportPolicy, ApplicationError> {
        Ok(ReportPolicy {
            daily_expected_minutes: self.daily_expected_minutes,
            max_workers_per_report: self.max_workers_per_report,
            max_records_per_month: self.max_records_per_month,
            default_timezone: parse_timezone(&self.default_timezone)?,
        })
    }
}

#[cfg(test)]
mod settings_tests {
    use super::*;
    use rstest::rstest;

    fn from_toml(toml: &str) -> Settings {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::string(toml))
            .extract()
            .unwrap()
    }

    #[rstest]
    fn it_should_default_to_madrid_and_eight_hour_days() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr, "0.0.0.0:8080");
        assert_eq!(settings.default_timezone, "Europe/Madrid");
        assert_eq!(settings.daily_expected_minutes, 480.0);
        assert!(!settings.replay_pause_edits);
        assert!(settings.directory_seed.is_none());
    }

    #[rstest]
    fn it_should_override_defaults_from_toml() {
        let settings = from_toml(
            r#"
            default_timezone = "Atlantic/Canary"
            daily_expected_minutes = 450.0
            replay_pause_edits = true
            directory_seed = "seed.json"
            "#,
        );
        assert_eq!(settings.daily_expected_minutes, 450.0);
        assert!(settings.replay_pause_edits);
        assert_eq!(settings.directory_seed, Some(PathBuf::from("seed.json")));
        assert_eq!(settings.max_workers_per_report, 10_000);

        let policy = settings.report_policy().unwrap();
        assert_eq!(policy.default_timezone, chrono_tz::Atlantic::Canary);
    }

    #[rstest]
    fn it_should_reject_an_unknown_default_timezone() {
        let settings = from_toml(r#"default_timezone = "Nowhere/Town""#);
        assert!(matches!(
            settings.report_policy(),
            Err(ApplicationError::InvalidTimezone(_))
        ));
    }
}
