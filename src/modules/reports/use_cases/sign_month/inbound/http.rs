use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::Utc;

use crate::modules::reports::use_cases::sign_month::command::SignMonth;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SignMonth>, JsonRejection>,
) -> Response {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.sign_month.handle(command, Utc::now()).await {
        Ok(signature) => (StatusCode::CREATED, Json(signature)).into_response(),
        Err(e) => e.into_response(),
    }
}
