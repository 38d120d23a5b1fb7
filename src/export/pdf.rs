//! PDF report export
//!
//! Renders a title and a table of records with printpdf

use crate::config::{ASCENT_EM, MM_PER_PT, TITLE_FONT_SIZE, TITLE_X_MM, TITLE_Y_MM};
use crate::error::ExportError;
use crate::export::save::{FileSaver, MediaType};
use crate::export::table::{layout_table, LaidRow, TableLayout, TableStyle};
use crate::model::{Record, Schema, SchemaPolicy, Value};
use crate::notify::{Notifier, NO_DATA_MESSAGE};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
};
use std::io::BufWriter;

#[derive(Debug, Clone)]
pub struct PdfOptions {
    /// Columns to export. Derived from the first record when `None`.
    pub schema: Option<Schema>,
    pub policy: SchemaPolicy,
    /// Look row values up by header instead of taking each record's own
    /// field order.
    pub align_rows_to_headers: bool,
    pub title_font_size: f32,
    pub title_x: f32,
    pub title_y: f32,
    pub table: TableStyle,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            schema: None,
            policy: SchemaPolicy::Tolerate,
            align_rows_to_headers: false,
            title_font_size: TITLE_FONT_SIZE,
            title_x: TITLE_X_MM,
            title_y: TITLE_Y_MM,
            table: TableStyle::default(),
        }
    }
}

/// File name for a report titled `title`: lowercased, whitespace runs
/// replaced by `_`, with a `.pdf` extension.
#[must_use]
pub fn pdf_filename(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 4);
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.extend(c.to_lowercase());
            in_space = false;
        }
    }
    name.push_str(".pdf");
    name
}

/// Uppercased header labels for `schema`.
#[must_use]
pub fn pdf_headers(schema: &Schema) -> Vec<String> {
    schema.names().map(str::to_uppercase).collect()
}

/// Table body for `data`.
///
/// By default each row lists the record's own values in its own field
/// order, which may not line up with the headers when records differ in
/// shape.
#[must_use]
pub fn pdf_rows(data: &[Record], schema: &Schema, align_to_headers: bool) -> Vec<Vec<String>> {
    data.iter()
        .map(|record| {
            if align_to_headers {
                schema.names().map(|n| cell_text(record.field(n))).collect()
            } else {
                record.values().map(cell_text).collect()
            }
        })
        .collect()
}

/// Missing and null values render as empty cells.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Undefined => String::new(),
        other => other.to_string(),
    }
}

/// Renders the report and returns the PDF bytes.
pub fn render_pdf(title: &str, data: &[Record], options: &PdfOptions) -> Result<Vec<u8>, ExportError> {
    let schema = options
        .schema
        .clone()
        .or_else(|| Schema::from_first_record(data))
        .unwrap_or_default();
    schema.validate(data, options.policy)?;

    let headers = pdf_headers(&schema);
    let rows = pdf_rows(data, &schema, options.align_rows_to_headers);
    let layout = layout_table(&headers, &rows, &options.table);

    tracing::debug!(
        title,
        headers = ?headers,
        rows = rows.len(),
        pages = layout.pages.len(),
        "rendering PDF"
    );

    let style = &options.table;
    let (doc, page1, layer1) = PdfDocument::new(
        title,
        Mm(style.page_width),
        Mm(style.page_height),
        "Layer 1",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let font_bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let first_layer = doc.get_page(page1).get_layer(layer1);
    first_layer.set_fill_color(rgb([0, 0, 0]));
    first_layer.use_text(
        title,
        options.title_font_size,
        Mm(options.title_x),
        Mm(style.page_height - options.title_y),
        &font,
    );

    for (page_no, page) in layout.pages.iter().enumerate() {
        let layer = if page_no == 0 {
            doc.get_page(page1).get_layer(layer1)
        } else {
            let (next_page, next_layer) =
                doc.add_page(Mm(style.page_width), Mm(style.page_height), "Layer 1");
            doc.get_page(next_page).get_layer(next_layer)
        };

        draw_row(
            &layer,
            &layout,
            &layout.header,
            page.header_top,
            style,
            Some(style.header_fill),
            style.header_text,
            &font_bold,
        );

        for placed in &page.rows {
            let fill = if placed.index % 2 == 1 {
                style.stripe_fill
            } else {
                None
            };
            draw_row(
                &layer,
                &layout,
                &layout.body[placed.index],
                placed.top,
                style,
                fill,
                [0, 0, 0],
                &font,
            );
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)?;
    buf.into_inner().map_err(|e| ExportError::Pdf {
        message: e.to_string(),
    })
}

#[allow(clippy::too_many_arguments)]
fn draw_row(
    layer: &PdfLayerReference,
    layout: &TableLayout,
    row: &LaidRow,
    top: f32,
    style: &TableStyle,
    fill: Option<[u8; 3]>,
    text_color: [u8; 3],
    font: &IndirectFontRef,
) {
    let page_height = style.page_height;

    if let Some(fill) = fill {
        layer.set_fill_color(rgb(fill));
        layer.add_rect(Rect::new(
            Mm(layout.left),
            Mm(page_height - top - row.height),
            Mm(layout.left + layout.total_width()),
            Mm(page_height - top),
        ));
    }

    layer.set_fill_color(rgb(text_color));
    let baseline = top + style.cell_padding + style.font_size * MM_PER_PT * ASCENT_EM;
    for (x, lines) in layout.column_lefts().into_iter().zip(&row.cells) {
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let y = baseline + i as f32 * style.line_height();
            layer.use_text(
                line.as_str(),
                style.font_size,
                Mm(x + style.cell_padding),
                Mm(page_height - y),
                font,
            );
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

/// Renders `data` as a PDF report and saves it under [`pdf_filename`]`(title)`.
///
/// An empty dataset produces no file and a single notification.
pub fn export_pdf(
    title: &str,
    data: &[Record],
    saver: &dyn FileSaver,
    notifier: &dyn Notifier,
) -> Result<(), ExportError> {
    export_pdf_with(title, data, &PdfOptions::default(), saver, notifier)
}

pub fn export_pdf_with(
    title: &str,
    data: &[Record],
    options: &PdfOptions,
    saver: &dyn FileSaver,
    notifier: &dyn Notifier,
) -> Result<(), ExportError> {
    if data.is_empty() {
        tracing::warn!(title, "PDF export skipped: empty dataset");
        notifier.notify(NO_DATA_MESSAGE);
        return Ok(());
    }

    let bytes = render_pdf(title, data, options)?;
    saver.save(&bytes, MediaType::Pdf, &pdf_filename(title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::save::MemorySaver;
    use crate::notify::RecordingNotifier;
    use crate::record;
    use pretty_assertions::assert_eq;

    #[test]
    fn filename_from_title() {
        assert_eq!(pdf_filename("Monthly Report"), "monthly_report.pdf");
        assert_eq!(pdf_filename("Q3  Sales\tSummary"), "q3_sales_summary.pdf");
        assert_eq!(pdf_filename(" Padded "), "_padded_.pdf");
    }

    #[test]
    fn headers_are_uppercased() {
        let schema = Schema::from_names(["name", "age"]);
        assert_eq!(pdf_headers(&schema), ["NAME", "AGE"]);
    }

    #[test]
    fn rows_follow_each_record_by_default() {
        let data = vec![
            record! { "name" => "Alice", "age" => 30 },
            record! { "age" => 25, "name" => "Bob" },
        ];
        let schema = Schema::from_first_record(&data).unwrap();

        let rows = pdf_rows(&data, &schema, false);
        assert_eq!(rows[1], ["25", "Bob"]);

        let aligned = pdf_rows(&data, &schema, true);
        assert_eq!(aligned[1], ["Bob", "25"]);
    }

    #[test]
    fn null_cells_are_blank() {
        let data = vec![record! { "a" => Value::Null, "b" => true }];
        let schema = Schema::from_names(["a", "b", "c"]);
        assert_eq!(pdf_rows(&data, &schema, true)[0], ["", "true", ""]);
    }

    #[test]
    fn renders_pdf_bytes() {
        let data = vec![record! { "name" => "Alice", "age" => 30 }];
        let bytes = render_pdf("Users", &data, &PdfOptions::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn export_saves_under_derived_name() {
        let saver = MemorySaver::new();
        let notifier = RecordingNotifier::new();
        let data = vec![record! { "name" => "Alice" }];
        export_pdf("Monthly Report", &data, &saver, &notifier).unwrap();

        let files = saver.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "monthly_report.pdf");
        assert_eq!(files[0].media_type, MediaType::Pdf);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn empty_dataset_notifies_once() {
        let saver = MemorySaver::new();
        let notifier = RecordingNotifier::new();
        export_pdf("Monthly Report", &[], &saver, &notifier).unwrap();
        assert!(saver.files().is_empty());
        assert_eq!(notifier.messages(), [NO_DATA_MESSAGE]);
    }
}
