use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::time_records::core::events::EventKind;
use crate::modules::time_records::use_cases::submit_clock_action::command::SubmitClockAction;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitClockActionBody {
    pub worker_id: String,
    pub company_id: String,
    #[serde(default)]
    pub action: Option<EventKind>,
    #[serde(default)]
    pub pause_type_id: Option<String>,
    #[serde(default)]
    pub recorded_by: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitClockActionBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = SubmitClockAction {
        event_id: Uuid::now_v7(),
        recorded_by: body.recorded_by.unwrap_or_else(|| body.worker_id.clone()),
        worker_id: body.worker_id,
        company_id: body.company_id,
        action: body.action,
        pause_type_id: body.pause_type_id,
        requested_at: Utc::now(),
    };

    match state.submit_clock_action.handle(command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(e) => e.into_response(),
    }
}
