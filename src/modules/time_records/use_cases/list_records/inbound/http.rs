use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListRecordsQuery {
    pub worker_id: String,
    pub company_id: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

pub async fn handle(State(state): State<AppState>, Query(query): Query<ListRecordsQuery>) -> Response {
    match state
        .list_records
        .handle(&query.worker_id, &query.company_id, query.from, query.to)
        .await
    {
        Ok(events) => Json(events).into_response(),
        Err(e) => e.into_response(),
    }
}
