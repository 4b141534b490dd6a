// Monthly report as a landscape A4 PDF: heading block, per-worker summary
// table, per-day detail table and the compliance footer.
//
// Text uses the built-in Helvetica with WinAnsiEncoding, so Spanish names
// render without embedding a font. Characters outside Latin-1 print as `?`.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

use crate::modules::reports::core::summaries::DailyWorkSummary;
use crate::modules::reports::use_cases::export_report::csv::local_time;
use crate::modules::reports::use_cases::export_report::subject::MonthlyExport;

const PAGE_W: f32 = 842.0;
const PAGE_H: f32 = 595.0;
const MARGIN: f32 = 42.0;
const ROW_H: f32 = 18.0;

const FONT_SIZE: f32 = 9.0;
const SECTION_FONT_SIZE: f32 = 11.0;
const TITLE_FONT_SIZE: f32 = 15.0;

const TITLE: &str = "Informe de Registro de Jornada";
const FOOTER: &str = "Registro conforme al art. 34.9 ET y RD-Ley 8/2019.";

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

const SUMMARY_HEADER: [&str; 6] = [
    "Trabajador",
    "DNI",
    "Dias",
    "Horas totales",
    "Horas extra",
    "Firma",
];

const DETAIL_HEADER: [&str; 9] = [
    "Fecha",
    "DNI",
    "Nombre",
    "Entrada",
    "Salida",
    "Horas",
    "Pausas (min)",
    "Descansos (min)",
    "Estado",
];

const HEADER_FILL: (f32, f32, f32) = (0.741, 0.843, 0.933);
const STRIPE_FILL: (f32, f32, f32) = (0.949, 0.949, 0.949);

/// Latin-1 bytes, which WinAnsiEncoding shares for printable characters.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ => b'?',
        })
        .collect()
}

fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
    content.begin_text();
    content.set_font(Name(b"F1"), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&win_ansi(text)));
    content.end_text();
}

fn fill_rect(content: &mut Content, x: f32, y: f32, w: f32, h: f32, (r, g, b): (f32, f32, f32)) {
    content.save_state();
    content.set_fill_rgb(r, g, b);
    content.rect(x, y, w, h);
    content.fill_nonzero();
    content.restore_state();
}

fn stroke_rect(content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
    content.save_state();
    content.set_stroke_rgb(0.65, 0.65, 0.65);
    content.rect(x, y, w, h);
    content.stroke();
    content.restore_state();
}

/// Column widths from the longest cell, scaled down to the printable width.
fn column_widths(header: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
    let text_width = |text: &str| text.chars().count() as f32 * FONT_SIZE * 0.55 + 8.0;
    let mut widths: Vec<f32> = header.iter().map(|title| text_width(title)).collect();
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(text_width(cell));
        }
    }
    let total: f32 = widths.iter().sum();
    let available = PAGE_W - 2.0 * MARGIN;
    if total > available {
        widths.iter_mut().for_each(|width| *width *= available / total);
    }
    widths
}

struct PdfDocument {
    pdf: Pdf,
    pages_id: Ref,
    font_id: Ref,
    next_id: i32,
    page_refs: Vec<Ref>,
    content_id: Ref,
    content: Content,
    y: f32,
}

impl PdfDocument {
    fn new() -> Self {
        let mut pdf = Pdf::new();
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        let mut document = Self {
            pdf,
            pages_id,
            font_id,
            next_id: 4,
            page_refs: Vec::new(),
            content_id: Ref::new(4),
            content: Content::new(),
            y: PAGE_H - MARGIN,
        };
        document.open_page();
        document
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn open_page(&mut self) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);
        drop(page);

        self.content_id = content_id;
        self.content = Content::new();
        self.y = PAGE_H - MARGIN;
        let number = format!("Pagina {}", self.page_refs.len());
        draw_text(&mut self.content, PAGE_W - MARGIN - 50.0, MARGIN / 2.0, FONT_SIZE, &number);
    }

    fn close_page(&mut self) {
        let content = std::mem::replace(&mut self.content, Content::new());
        self.pdf.stream(self.content_id, &content.finish());
    }

    fn ensure_space(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.close_page();
            self.open_page();
        }
    }

    fn line(&mut self, size: f32, text: &str) {
        self.ensure_space(size + 6.0);
        self.y -= size + 6.0;
        draw_text(&mut self.content, MARGIN, self.y, size, text);
    }

    fn gap(&mut self, height: f32) {
        self.y -= height;
    }

    fn row(&mut self, widths: &[f32], cells: &[String], fill: Option<(f32, f32, f32)>) {
        self.y -= ROW_H;
        let total: f32 = widths.iter().sum();
        if let Some(color) = fill {
            fill_rect(&mut self.content, MARGIN, self.y, total, ROW_H, color);
        }
        let mut x = MARGIN;
        for (cell, width) in cells.iter().zip(widths) {
            draw_text(&mut self.content, x + 4.0, self.y + 5.0, FONT_SIZE, cell);
            stroke_rect(&mut self.content, x, self.y, *width, ROW_H);
            x += width;
        }
    }

    /// Table whose header row repeats on every page it spans.
    fn table(&mut self, header: &[&str], rows: &[Vec<String>]) {
        let widths = column_widths(header, rows);
        let header: Vec<String> = header.iter().map(|title| title.to_string()).collect();

        self.ensure_space(2.0 * ROW_H);
        self.row(&widths, &header, Some(HEADER_FILL));
        for (index, cells) in rows.iter().enumerate() {
            if self.y - ROW_H < MARGIN {
                self.close_page();
                self.open_page();
                self.row(&widths, &header, Some(HEADER_FILL));
            }
            let stripe = (index % 2 == 0).then_some(STRIPE_FILL);
            self.row(&widths, cells, stripe);
        }
    }

    fn finish(mut self) -> Vec<u8> {
        self.close_page();
        let catalog_id = Ref::new(1);
        self.pdf.catalog(catalog_id).pages(self.pages_id);
        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());
        self.pdf.finish()
    }
}

fn clock(instant: Option<DateTime<Utc>>, tz: Tz) -> String {
    match local_time(instant, tz) {
        time if time.is_empty() => "-".to_string(),
        time => time,
    }
}

fn day_status(day: &DailyWorkSummary) -> &'static str {
    if day.has_open_session {
        "Abierto"
    } else if day.is_modified {
        "Mod."
    } else {
        "OK"
    }
}

fn summary_rows(report: &MonthlyExport) -> Vec<Vec<String>> {
    report
        .workers()
        .into_iter()
        .map(|worker| {
            vec![
                worker.worker_name.clone(),
                worker.worker_id_number.clone(),
                worker.total_days_worked.to_string(),
                format!("{:.2}", worker.total_worked_minutes / 60.0),
                format!("{:.2}", worker.total_overtime_minutes / 60.0),
                worker.signature_status.as_str().to_string(),
            ]
        })
        .collect()
}

fn detail_rows(report: &MonthlyExport, tz: Tz) -> Vec<Vec<String>> {
    report
        .daily_rows()
        .into_iter()
        .map(|day| {
            vec![
                day.date.format("%d/%m/%Y").to_string(),
                day.worker_id_number.clone(),
                day.worker_name.clone(),
                clock(day.first_entry, tz),
                clock(day.last_exit, tz),
                format!("{:.2}", day.total_worked_minutes / 60.0),
                format!("{:.0}", day.total_pause_minutes),
                format!("{:.0}", day.total_break_minutes),
                day_status(day).to_string(),
            ]
        })
        .collect()
}

pub fn monthly_pdf(report: &MonthlyExport, tz: Tz) -> Vec<u8> {
    let (year, month) = report.period();
    let month_name = MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or_default();

    let mut document = PdfDocument::new();
    document.line(TITLE_FONT_SIZE, TITLE);
    document.gap(6.0);
    document.line(
        FONT_SIZE,
        &format!(
            "Empresa: {}    Periodo: {} {}    Generado: {}",
            report.company_name(),
            month_name,
            year,
            report.generated_at().with_timezone(&tz).format("%d/%m/%Y %H:%M")
        ),
    );
    if let MonthlyExport::Worker(worker) = report {
        document.line(
            FONT_SIZE,
            &format!(
                "Trabajador: {}    DNI/NIE: {}",
                worker.worker_name, worker.worker_id_number
            ),
        );
    }

    document.gap(10.0);
    document.line(SECTION_FONT_SIZE, "Resumen de trabajadores");
    document.table(&SUMMARY_HEADER, &summary_rows(report));

    document.gap(14.0);
    document.line(SECTION_FONT_SIZE, "Detalle diario");
    document.table(&DETAIL_HEADER, &detail_rows(report, tz));

    document.gap(10.0);
    document.line(FONT_SIZE, FOOTER);
    document.finish()
}
