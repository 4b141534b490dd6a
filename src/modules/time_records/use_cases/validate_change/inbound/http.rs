use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};

use crate::modules::time_records::use_cases::validate_change::command::ValidateChange;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ValidateChange>, JsonRejection>,
) -> Response {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.validate_change.handle(&command).await {
        Ok(validation) => Json(validation).into_response(),
        Err(e) => e.into_response(),
    }
}
