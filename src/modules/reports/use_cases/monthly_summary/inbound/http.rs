use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::reports::use_cases::monthly_summary::handler::MonthlySummaryQuery;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MonthlySummaryParams {
    pub company_id: String,
    pub year: i32,
    pub month: u32,
    pub timezone: Option<String>,
}

impl From<MonthlySummaryParams> for MonthlySummaryQuery {
    fn from(params: MonthlySummaryParams) -> Self {
        Self {
            company_id: params.company_id,
            year: params.year,
            month: params.month,
            timezone: params.timezone,
        }
    }
}

pub async fn company(
    State(state): State<AppState>,
    Query(params): Query<MonthlySummaryParams>,
) -> Response {
    match state
        .monthly_summary
        .company_summary(&params.into(), Utc::now())
        .await
    {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn worker(
    State(state): State<AppState>,
    Path(worker_id): Path<String>,
    Query(params): Query<MonthlySummaryParams>,
) -> Response {
    match state
        .monthly_summary
        .worker_summary(&params.into(), &worker_id, Utc::now())
        .await
    {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => e.into_response(),
    }
}
