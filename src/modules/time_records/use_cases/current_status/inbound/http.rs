use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::Utc;
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CurrentStatusBody {
    pub worker_id: String,
    pub company_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CurrentStatusBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .current_status
        .handle(&body.worker_id, &body.company_id, Utc::now())
        .await
    {
        Ok(status) => Json(status).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod current_status_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::tests::fixtures::app::test_state;

    use super::handle;

    #[tokio::test]
    async fn it_should_return_logged_out_for_a_fresh_worker() {
        let app = Router::new()
            .route("/time-records/current-status", post(handle))
            .with_state(test_state());

        let response = app
            .oneshot(
                Request::post("/time-records/current-status")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"worker_id":"w-2","company_id":"c-1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "logged_out");
        assert_eq!(json["worker_name"], "Luis Pérez");
    }
}
