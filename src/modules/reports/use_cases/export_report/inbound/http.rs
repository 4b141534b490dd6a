use axum::{
    extract::{Query, State},
    http::{HeaderName, HeaderValue, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::reports::use_cases::export_report::handler::{ExportFormat, ExportedReport};
use crate::modules::reports::use_cases::monthly_summary::handler::MonthlySummaryQuery;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::iso8601;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MonthlyExportParams {
    pub company_id: String,
    pub year: i32,
    pub month: u32,
    pub worker_id: Option<String>,
    #[serde(default)]
    pub format: ExportFormat,
    pub timezone: Option<String>,
}

#[derive(Deserialize)]
pub struct OvertimeExportParams {
    pub company_id: String,
    pub year: i32,
    pub month: u32,
    pub daily_expected_minutes: Option<f64>,
    pub timezone: Option<String>,
}

fn header_value(value: &str) -> Result<HeaderValue, ApplicationError> {
    HeaderValue::from_bytes(value.as_bytes()).map_err(|e| ApplicationError::Export(e.to_string()))
}

fn attachment(exported: ExportedReport) -> Result<Response, ApplicationError> {
    let disposition = header_value(&format!("attachment; filename=\"{}\"", exported.file_name))?;
    let hash = header_value(&exported.report_hash)?;
    let generated = header_value(&iso8601(exported.generated_at))?;
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(exported.content_type)),
            (header::CONTENT_DISPOSITION, disposition),
            (HeaderName::from_static("x-report-hash"), hash),
            (HeaderName::from_static("x-report-generated"), generated),
        ],
        exported.bytes,
    )
        .into_response())
}

pub async fn monthly(
    State(state): State<AppState>,
    Query(params): Query<MonthlyExportParams>,
) -> Response {
    let query = MonthlySummaryQuery {
        company_id: params.company_id,
        year: params.year,
        month: params.month,
        timezone: params.timezone,
    };
    match state
        .export_report
        .monthly(&query, params.worker_id.as_deref(), params.format, Utc::now())
        .await
        .and_then(attachment)
    {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

pub async fn overtime(
    State(state): State<AppState>,
    Query(params): Query<OvertimeExportParams>,
) -> Response {
    let query = MonthlySummaryQuery {
        company_id: params.company_id,
        year: params.year,
        month: params.month,
        timezone: params.timezone,
    };
    match state
        .export_report
        .overtime(&query, params.daily_expected_minutes, Utc::now())
        .await
        .and_then(attachment)
    {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}
