use crate::modules::time_records::core::events::EventKind;

fn last_label(last: &Option<EventKind>) -> &'static str {
    last.map_or("none", |kind| kind.as_str())
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("cannot record {action} when the last event is {}", last_label(.state))]
    SequenceViolation {
        action: EventKind,
        state: Option<EventKind>,
    },

    #[error("a pause type is required to start a pause")]
    MissingPauseType,

    #[error("pause type {0} is not valid for this company")]
    InvalidPauseType(String),

    #[error("pause {pause_name} is still open, end it first")]
    OpenPauseViolation { pause_name: String },

    #[error("data inconsistency: {0}")]
    DataInconsistency(String),
}

impl DecideError {
    /// Corrupted ledger rather than a rejected request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DecideError::DataInconsistency(_))
    }
}

#[cfg(test)]
mod decide_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DecideError::SequenceViolation { action: EventKind::Exit, state: None }, "cannot record exit when the last event is none")]
    #[case(DecideError::SequenceViolation { action: EventKind::PauseEnd, state: Some(EventKind::Entry) }, "cannot record pause_end when the last event is entry")]
    #[case(DecideError::OpenPauseViolation { pause_name: "Lunch".into() }, "pause Lunch is still open, end it first")]
    fn it_should_render_a_user_facing_message(#[case] error: DecideError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn it_should_only_treat_data_inconsistency_as_fatal() {
        assert!(DecideError::DataInconsistency("pause without entry".into()).is_fatal());
        assert!(!DecideError::MissingPauseType.is_fatal());
    }
}
