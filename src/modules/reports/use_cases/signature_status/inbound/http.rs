use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignatureStatusParams {
    pub worker_id: String,
    pub company_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<SignatureStatusParams>,
) -> Response {
    match state
        .signature_status
        .handle(&params.worker_id, &params.company_id, Utc::now())
        .await
    {
        Ok(overview) => Json(overview).into_response(),
        Err(e) => e.into_response(),
    }
}
