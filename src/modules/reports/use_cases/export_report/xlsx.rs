// Monthly workbook: a per-worker "Resumen" sheet and a per-day "Detalle Diario" sheet.

use chrono_tz::Tz;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet, XlsxError};

use crate::modules::reports::use_cases::export_report::csv::{local_time, yes_no};
use crate::modules::reports::use_cases::export_report::subject::MonthlyExport;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::minutes_to_hours;

const SUMMARY_SHEET: &str = "Resumen";
const DETAIL_SHEET: &str = "Detalle Diario";

const SUMMARY_HEADER: [&str; 6] = [
    "Trabajador",
    "DNI",
    "Dias trabajados",
    "Horas totales",
    "Horas extra",
    "Estado firma",
];

const DETAIL_HEADER: [&str; 10] = [
    "Fecha",
    "DNI",
    "Nombre",
    "Empresa",
    "Entrada",
    "Salida",
    "Horas trabajadas",
    "Pausas (min)",
    "Descansos (min)",
    "Modificado",
];

const MAX_COLUMN_WIDTH: usize = 40;

fn export_error(error: XlsxError) -> ApplicationError {
    ApplicationError::Export(error.to_string())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_header(sheet: &mut Worksheet, header: &[&str]) -> Result<Vec<usize>, XlsxError> {
    let format = header_format();
    for (col, title) in header.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *title, &format)?;
    }
    sheet.set_freeze_panes(1, 0)?;
    Ok(header.iter().map(|title| title.chars().count()).collect())
}

fn fit_columns(sheet: &mut Worksheet, widths: &[usize]) -> Result<(), XlsxError> {
    for (col, width) in widths.iter().enumerate() {
        sheet.set_column_width(col as u16, (*width).min(MAX_COLUMN_WIDTH) as f64 + 4.0)?;
    }
    Ok(())
}

enum Cell {
    Text(String),
    Number(f64),
}

fn write_row(
    sheet: &mut Worksheet,
    row: u32,
    cells: Vec<Cell>,
    widths: &mut [usize],
) -> Result<(), XlsxError> {
    for (col, cell) in cells.into_iter().enumerate() {
        let width = match cell {
            Cell::Text(text) => {
                sheet.write(row, col as u16, text.as_str())?;
                text.chars().count()
            }
            Cell::Number(number) => {
                sheet.write(row, col as u16, number)?;
                number.to_string().len()
            }
        };
        widths[col] = widths[col].max(width);
    }
    Ok(())
}

fn summary_sheet(sheet: &mut Worksheet, report: &MonthlyExport) -> Result<(), XlsxError> {
    sheet.set_name(SUMMARY_SHEET)?;
    let mut widths = write_header(sheet, &SUMMARY_HEADER)?;
    for (index, worker) in report.workers().into_iter().enumerate() {
        write_row(
            sheet,
            index as u32 + 1,
            vec![
                Cell::Text(worker.worker_name.clone()),
                Cell::Text(worker.worker_id_number.clone()),
                Cell::Number(f64::from(worker.total_days_worked)),
                Cell::Number(minutes_to_hours(worker.total_worked_minutes)),
                Cell::Number(minutes_to_hours(worker.total_overtime_minutes)),
                Cell::Text(worker.signature_status.as_str().to_string()),
            ],
            &mut widths,
        )?;
    }
    fit_columns(sheet, &widths)
}

fn detail_sheet(sheet: &mut Worksheet, report: &MonthlyExport, tz: Tz) -> Result<(), XlsxError> {
    sheet.set_name(DETAIL_SHEET)?;
    let mut widths = write_header(sheet, &DETAIL_HEADER)?;
    for (index, day) in report.daily_rows().into_iter().enumerate() {
        write_row(
            sheet,
            index as u32 + 1,
            vec![
                Cell::Text(day.date.format("%d/%m/%Y").to_string()),
                Cell::Text(day.worker_id_number.clone()),
                Cell::Text(day.worker_name.clone()),
                Cell::Text(day.company_name.clone()),
                Cell::Text(local_time(day.first_entry, tz)),
                Cell::Text(local_time(day.last_exit, tz)),
                Cell::Number(minutes_to_hours(day.total_worked_minutes)),
                Cell::Number(day.total_pause_minutes.round()),
                Cell::Number(day.total_break_minutes.round()),
                Cell::Text(yes_no(day.is_modified).to_string()),
            ],
            &mut widths,
        )?;
    }
    fit_columns(sheet, &widths)
}

pub fn monthly_xlsx(report: &MonthlyExport, tz: Tz) -> Result<Vec<u8>, ApplicationError> {
    let mut workbook = Workbook::new();
    summary_sheet(workbook.add_worksheet(), report).map_err(export_error)?;
    detail_sheet(workbook.add_worksheet(), report, tz).map_err(export_error)?;
    workbook.save_to_buffer().map_err(export_error)
}
