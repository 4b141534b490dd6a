use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::modules::reports::use_cases::export_report::inbound::http as export_http;
use crate::modules::reports::use_cases::monthly_summary::inbound::http as monthly_http;
use crate::modules::reports::use_cases::overtime_report::inbound::http as overtime_http;
use crate::modules::reports::use_cases::sign_month::inbound::http as sign_http;
use crate::modules::reports::use_cases::signature_status::inbound::http as signature_status_http;
use crate::modules::time_records::use_cases::apply_change::inbound::http as apply_http;
use crate::modules::time_records::use_cases::current_status::inbound::http as status_http;
use crate::modules::time_records::use_cases::effective_minutes::inbound::http as minutes_http;
use crate::modules::time_records::use_cases::list_records::inbound::http as list_http;
use crate::modules::time_records::use_cases::submit_clock_action::inbound::http as submit_http;
use crate::modules::time_records::use_cases::validate_change::inbound::http as validate_http;
use crate::modules::time_records::use_cases::verify_integrity::inbound::http as integrity_http;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/time-records",
            post(submit_http::handle).get(list_http::handle),
        )
        .route("/time-records/current-status", post(status_http::handle))
        .route("/time-records/effective-minutes", post(minutes_http::handle))
        .route("/change-requests/validate", post(validate_http::handle))
        .route("/change-requests/apply", post(apply_http::handle))
        .route("/reports/monthly", get(monthly_http::company))
        .route("/reports/monthly/worker/{worker_id}", get(monthly_http::worker))
        .route("/reports/overtime", get(overtime_http::handle))
        .route("/reports/export/monthly", get(export_http::monthly))
        .route("/reports/export/overtime", get(export_http::overtime))
        .route("/reports/integrity/{record_id}", get(integrity_http::handle))
        .route("/reports/signatures", post(sign_http::handle))
        .route("/reports/signatures/status", get(signature_status_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::VersionConflict(EventStoreError::VersionMismatch { .. }) => {
                StatusCode::CONFLICT
            }
            ApplicationError::VersionConflict(EventStoreError::EventNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            ApplicationError::Domain(e) if e.is_fatal() => StatusCode::INTERNAL_SERVER_ERROR,
            ApplicationError::Domain(_)
            | ApplicationError::ChangeRejected(_)
            | ApplicationError::InvalidTimezone(_)
            | ApplicationError::InvalidPeriod(_)
            | ApplicationError::InvalidThreshold(_) => StatusCode::BAD_REQUEST,
            ApplicationError::SignatureConflict { .. } => StatusCode::CONFLICT,
            ApplicationError::VersionConflict(EventStoreError::Backend(_))
            | ApplicationError::Export(_)
            | ApplicationError::Directory(_)
            | ApplicationError::Signatures(_)
            | ApplicationError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = json!({ "error": self.to_string(), "details": self.details() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod application_error_response_tests {
    use super::*;
    use crate::modules::time_records::core::events::EventKind;
    use crate::modules::time_records::use_cases::submit_clock_action::decision::DecideError;
    use http_body_util::BodyExt;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    #[case(ApplicationError::NotFound("company c-9".into()), StatusCode::NOT_FOUND)]
    #[case(
        ApplicationError::VersionConflict(EventStoreError::VersionMismatch { expected: 1, actual: 2 }),
        StatusCode::CONFLICT
    )]
    #[case(
        ApplicationError::VersionConflict(EventStoreError::EventNotFound(Uuid::nil())),
        StatusCode::NOT_FOUND
    )]
    #[case(
        ApplicationError::VersionConflict(EventStoreError::Backend("offline".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    #[case(
        ApplicationError::Domain(DecideError::SequenceViolation { action: EventKind::Exit, state: None }),
        StatusCode::BAD_REQUEST
    )]
    #[case(
        ApplicationError::Domain(DecideError::DataInconsistency("pause without entry".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    #[case(ApplicationError::ChangeRejected(vec!["overlap".into()]), StatusCode::BAD_REQUEST)]
    #[case(ApplicationError::InvalidPeriod("month 13".into()), StatusCode::BAD_REQUEST)]
    #[case(ApplicationError::InvalidThreshold("-1".into()), StatusCode::BAD_REQUEST)]
    #[case(ApplicationError::SignatureConflict { year: 2025, month: 2 }, StatusCode::CONFLICT)]
    #[case(ApplicationError::Export("disk full".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn it_should_map_errors_to_status_codes(
        #[case] error: ApplicationError,
        #[case] expected: StatusCode,
    ) {
        assert_eq!(error.status_code(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_every_rejection_reason_in_details() {
        let response =
            ApplicationError::ChangeRejected(vec!["first".into(), "second".into()]).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "change request rejected: first; second");
        assert_eq!(json["details"], serde_json::json!(["first", "second"]));
    }
}
