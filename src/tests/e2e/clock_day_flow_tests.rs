use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::reports::core::signatures::SignatureStatus;
use crate::modules::reports::use_cases::monthly_summary::handler::MonthlySummaryQuery;
use crate::modules::reports::use_cases::sign_month::command::SignMonth;
use crate::modules::time_records::core::events::{EventKind, Punch};
use crate::modules::time_records::use_cases::apply_change::command::ApplyChange;
use crate::modules::time_records::use_cases::current_status::status::WorkerStatus;
use crate::modules::time_records::use_cases::submit_clock_action::command::SubmitClockAction;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;
use crate::tests::fixtures::app::test_state;
use crate::tests::fixtures::events::{at, at_day};

fn punch(at: DateTime<Utc>, action: Option<EventKind>, pause_type_id: Option<&str>) -> SubmitClockAction {
    SubmitClockAction {
        event_id: Uuid::now_v7(),
        worker_id: "w-1".into(),
        company_id: "c-1".into(),
        action,
        pause_type_id: pause_type_id.map(String::from),
        recorded_by: "w-1".into(),
        requested_at: at,
    }
}

async fn work_a_day(state: &AppState) -> Vec<Uuid> {
    let mut ids = Vec::new();
    for command in [
        punch(at(8, 0), None, None),
        punch(at(12, 0), Some(EventKind::PauseStart), Some("pt-lunch")),
        punch(at(12, 30), None, None),
        punch(at(16, 0), None, None),
    ] {
        ids.push(state.submit_clock_action.handle(command).await.unwrap().id);
    }
    ids
}

fn march(timezone: &str) -> MonthlySummaryQuery {
    MonthlySummaryQuery {
        company_id: "c-1".into(),
        year: 2025,
        month: 3,
        timezone: Some(timezone.into()),
    }
}

#[tokio::test]
async fn records_a_day_and_reports_it() {
    let state = test_state();
    let ids = work_a_day(&state).await;

    let exit = state
        .list_records
        .handle("w-1", "c-1", at(0, 0), at_day(4, 0, 0))
        .await
        .unwrap()
        .into_iter()
        .next()
        .unwrap();
    assert_eq!(exit.id, ids[3]);
    assert_eq!(exit.punch, Punch::Exit { duration_minutes: 450.0 });

    let status = state.current_status.handle("w-1", "c-1", at(17, 0)).await.unwrap();
    assert_eq!(status.status, WorkerStatus::LoggedOut);

    let summary = state
        .monthly_summary
        .worker_summary(&march("UTC"), "w-1", at(18, 0))
        .await
        .unwrap();
    assert_eq!(summary.total_days_worked, 1);
    assert_eq!(summary.total_worked_minutes, 450.0);
    assert_eq!(summary.total_pause_minutes, 30.0);
    assert_eq!(summary.total_overtime_minutes, 0.0);

    for id in &ids {
        assert!(state.verify_integrity.handle(*id).await.unwrap().verified);
    }
}

#[tokio::test]
async fn amends_an_exit_and_flags_it_everywhere() {
    let state = test_state();
    let ids = work_a_day(&state).await;

    let amended = state
        .apply_change
        .handle(
            ApplyChange {
                event_id: ids[3],
                new_timestamp: at(16, 30),
                modified_by: "admin-1".into(),
                reason: "left later".into(),
            },
            at(18, 0),
        )
        .await
        .unwrap();
    assert_eq!(amended.timestamp, at(16, 30));
    assert_eq!(amended.audit.as_ref().unwrap().original_timestamp, at(16, 0));

    let check = state.verify_integrity.handle(ids[3]).await.unwrap();
    assert!(!check.verified);
    assert!(check.modified);

    let summary = state
        .monthly_summary
        .worker_summary(&march("UTC"), "w-1", at(18, 0))
        .await
        .unwrap();
    assert!(summary.daily_details[0].is_modified);
    assert_eq!(summary.total_worked_minutes, 450.0);

    let rejected = state
        .apply_change
        .handle(
            ApplyChange {
                event_id: ids[0],
                new_timestamp: at(17, 0),
                modified_by: "admin-1".into(),
                reason: "typo".into(),
            },
            at(18, 0),
        )
        .await;
    assert!(matches!(rejected, Err(ApplicationError::ChangeRejected(_))));
}

#[tokio::test]
async fn signs_a_month_once_and_shows_it_in_reports() {
    let state = test_state();
    work_a_day(&state).await;

    let sign = || SignMonth {
        worker_id: "w-1".into(),
        company_id: "c-1".into(),
        year: 2025,
        month: 3,
    };
    state.sign_month.handle(sign(), at_day(31, 18, 0)).await.unwrap();
    assert!(matches!(
        state.sign_month.handle(sign(), at_day(31, 19, 0)).await,
        Err(ApplicationError::SignatureConflict { .. })
    ));

    let summary = state
        .monthly_summary
        .worker_summary(&march("Europe/Madrid"), "w-1", at_day(31, 20, 0))
        .await
        .unwrap();
    assert_eq!(summary.signature_status, SignatureStatus::Signed);
    assert_eq!(summary.signed_at, Some(at_day(31, 18, 0)));
}
