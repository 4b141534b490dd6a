use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EffectiveMinutesBody {
    pub worker_id: String,
    pub company_id: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EffectiveMinutesBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .effective_minutes
        .handle(&body.worker_id, &body.company_id, body.entry_time, body.exit_time)
        .await
    {
        Ok(breakdown) => Json(breakdown).into_response(),
        Err(e) => e.into_response(),
    }
}
