use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::Utc;

use crate::modules::time_records::use_cases::apply_change::command::ApplyChange;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ApplyChange>, JsonRejection>,
) -> Response {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.apply_change.handle(command, Utc::now()).await {
        Ok(event) => Json(event).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod apply_change_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use tower::ServiceExt;

    use crate::tests::fixtures::app::test_state;

    use super::handle;

    #[tokio::test]
    async fn it_should_return_422_when_the_reason_is_missing() {
        let app = Router::new()
            .route("/change-requests/apply", post(handle))
            .with_state(test_state());
        let body = r#"{"event_id":"0192f6a8-0000-7000-8000-000000000000","new_timestamp":"2025-03-03T08:00:00Z","modified_by":"admin"}"#;

        let response = app
            .oneshot(
                Request::post("/change-requests/apply")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
