use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::reports::use_cases::monthly_summary::handler::MonthlySummaryQuery;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct OvertimeParams {
    pub company_id: String,
    pub year: i32,
    pub month: u32,
    pub daily_expected_minutes: Option<f64>,
    pub timezone: Option<String>,
}

pub async fn handle(State(state): State<AppState>, Query(params): Query<OvertimeParams>) -> Response {
    let query = MonthlySummaryQuery {
        company_id: params.company_id,
        year: params.year,
        month: params.month,
        timezone: params.timezone,
    };
    match state
        .overtime_report
        .handle(&query, params.daily_expected_minutes, Utc::now())
        .await
    {
        Ok(report) => Json(report).into_response(),
        Err(e) => e.into_response(),
    }
}
