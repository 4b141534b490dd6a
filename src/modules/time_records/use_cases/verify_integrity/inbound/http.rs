use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(record_id): Path<Uuid>) -> Response {
    match state.verify_integrity.handle(record_id).await {
        Ok(check) => Json(check).into_response(),
        Err(e) => e.into_response(),
    }
}
