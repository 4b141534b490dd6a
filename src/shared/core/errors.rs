use thiserror::Error;

use crate::modules::time_records::use_cases::submit_clock_action::decision::DecideError;
use crate::shared::infrastructure::directory::DirectoryError;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shared::infrastructure::signature_store::SignatureStoreError;

/// Error surface shared by every use case handler.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error("change request rejected: {}", .0.join("; "))]
    ChangeRejected(Vec<String>),

    #[error("month {month}/{year} has already been signed")]
    SignatureConflict { year: i32, month: u32 },

    #[error("unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("invalid period: {0}")]
    InvalidPeriod(String),

    #[error("invalid overtime threshold: {0}")]
    InvalidThreshold(String),

    #[error("export failed: {0}")]
    Export(String),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Signatures(SignatureStoreError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<SignatureStoreError> for ApplicationError {
    fn from(error: SignatureStoreError) -> Self {
        match error {
            SignatureStoreError::AlreadySigned { year, month } => {
                ApplicationError::SignatureConflict { year, month }
            }
            other => ApplicationError::Signatures(other),
        }
    }
}

impl ApplicationError {
    /// Individual reasons, for clients that render every violated constraint.
    pub fn details(&self) -> Vec<String> {
        match self {
            ApplicationError::ChangeRejected(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

#[cfg(test)]
mod application_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_join_every_change_rejection_reason() {
        let error = ApplicationError::ChangeRejected(vec!["first".into(), "second".into()]);
        assert_eq!(error.to_string(), "change request rejected: first; second");
        assert_eq!(error.details(), vec!["first".to_string(), "second".to_string()]);
    }

    #[rstest]
    fn it_should_turn_an_existing_signature_into_a_conflict() {
        let error = ApplicationError::from(SignatureStoreError::AlreadySigned {
            year: 2025,
            month: 3,
        });
        assert!(matches!(
            error,
            ApplicationError::SignatureConflict {
                year: 2025,
                month: 3
            }
        ));
        assert_eq!(error.to_string(), "month 3/2025 has already been signed");
    }

    #[rstest]
    fn it_should_keep_backend_signature_failures_apart() {
        let error = ApplicationError::from(SignatureStoreError::Backend("offline".into()));
        assert!(matches!(error, ApplicationError::Signatures(_)));
    }
}
