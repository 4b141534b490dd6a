// Semicolon-separated exports for Spanish-locale spreadsheets: UTF-8 with a
// BOM, `;` delimiter, CRLF line endings.

use chrono_tz::Tz;
use csv::{Terminator, Writer, WriterBuilder};

use crate::modules::reports::core::summaries::{DailyWorkSummary, OvertimeReport};
use crate::modules::reports::use_cases::export_report::subject::MonthlyExport;
use crate::shared::core::errors::ApplicationError;

const BOM: &[u8] = "\u{feff}".as_bytes();

pub const MONTHLY_HEADER: [&str; 10] = [
    "Fecha",
    "DNI",
    "Nombre",
    "Empresa",
    "Entrada",
    "Salida",
    "Horas Trabajadas",
    "Pausas (min)",
    "Horas Extra",
    "Modificado",
];

pub const OVERTIME_HEADER: [&str; 6] = [
    "DNI",
    "Nombre",
    "Horas Trabajadas",
    "Horas Esperadas",
    "Horas Extra",
    "Dias con Horas Extra",
];

fn writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::CRLF)
        .from_writer(BOM.to_vec())
}

fn finish(writer: Writer<Vec<u8>>) -> Result<Vec<u8>, ApplicationError> {
    writer
        .into_inner()
        .map_err(|e| ApplicationError::Export(e.to_string()))
}

fn export_error(error: csv::Error) -> ApplicationError {
    ApplicationError::Export(error.to_string())
}

pub fn local_time(instant: Option<chrono::DateTime<chrono::Utc>>, tz: Tz) -> String {
    instant
        .map(|at| at.with_timezone(&tz).format("%H:%M").to_string())
        .unwrap_or_default()
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Si" } else { "No" }
}

fn monthly_row(day: &DailyWorkSummary, tz: Tz, daily_expected_minutes: f64) -> [String; 10] {
    let overtime = (day.total_worked_minutes - daily_expected_minutes).max(0.0);
    [
        day.date.format("%d/%m/%Y").to_string(),
        day.worker_id_number.clone(),
        day.worker_name.clone(),
        day.company_name.clone(),
        local_time(day.first_entry, tz),
        local_time(day.last_exit, tz),
        format!("{:.2}", day.total_worked_minutes / 60.0),
        format!("{:.0}", day.total_pause_minutes),
        format!("{:.2}", overtime / 60.0),
        yes_no(day.is_modified).to_string(),
    ]
}

/// One row per worker-day.
pub fn monthly_csv(
    report: &MonthlyExport,
    tz: Tz,
    daily_expected_minutes: f64,
) -> Result<Vec<u8>, ApplicationError> {
    let mut writer = writer();
    writer.write_record(MONTHLY_HEADER).map_err(export_error)?;
    for day in report.daily_rows() {
        writer
            .write_record(monthly_row(day, tz, daily_expected_minutes))
            .map_err(export_error)?;
    }
    finish(writer)
}

pub fn overtime_csv(report: &OvertimeReport) -> Result<Vec<u8>, ApplicationError> {
    let mut writer = writer();
    writer.write_record(OVERTIME_HEADER).map_err(export_error)?;
    for worker in &report.workers_with_overtime {
        writer
            .write_record([
                worker.worker_id_number.clone(),
                worker.worker_name.clone(),
                format!("{:.2}", worker.total_worked_minutes / 60.0),
                format!("{:.2}", worker.expected_minutes / 60.0),
                format!("{:.2}", worker.overtime_minutes / 60.0),
                worker.days_with_overtime.to_string(),
            ])
            .map_err(export_error)?;
    }
    finish(writer)
}
