//! Table layout for PDF reports.
//!
//! Turns header and body text into column widths, wrapped cell lines and
//! page breaks. All positions are millimetres measured from the top-left
//! corner of the page; the renderer flips them into PDF coordinates.

use crate::config::{
    AVG_CHAR_WIDTH_EM, CELL_PADDING_MM, HEADER_FILL_RGB, HEADER_TEXT_RGB, LINE_HEIGHT_FACTOR,
    MM_PER_PT, PAGE_HEIGHT_MM, PAGE_MARGIN_MM, PAGE_WIDTH_MM, STRIPE_FILL_RGB, TABLE_FONT_SIZE,
    TABLE_START_Y_MM,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    /// Top of the table on the first page.
    pub start_y: f32,
    pub font_size: f32,
    pub cell_padding: f32,
    pub header_fill: [u8; 3],
    pub header_text: [u8; 3],
    pub stripe_fill: Option<[u8; 3]>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH_MM,
            page_height: PAGE_HEIGHT_MM,
            margin: PAGE_MARGIN_MM,
            start_y: TABLE_START_Y_MM,
            font_size: TABLE_FONT_SIZE,
            cell_padding: CELL_PADDING_MM,
            header_fill: HEADER_FILL_RGB,
            header_text: HEADER_TEXT_RGB,
            stripe_fill: Some(STRIPE_FILL_RGB),
        }
    }
}

impl TableStyle {
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.font_size * MM_PER_PT * LINE_HEIGHT_FACTOR
    }

    #[must_use]
    pub fn char_width(&self) -> f32 {
        self.font_size * MM_PER_PT * AVG_CHAR_WIDTH_EM
    }

    #[must_use]
    pub fn text_width(&self, text: &str) -> f32 {
        text.lines()
            .map(|line| line.chars().count() as f32 * self.char_width())
            .fold(0.0, f32::max)
    }

    fn available_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    fn bottom_limit(&self) -> f32 {
        self.page_height - self.margin
    }
}

/// One row with every cell already wrapped to its column.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidRow {
    pub cells: Vec<Vec<String>>,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedRow {
    /// Index into [`TableLayout::body`].
    pub index: usize,
    pub top: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub header_top: f32,
    pub rows: Vec<PlacedRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub left: f32,
    pub widths: Vec<f32>,
    pub header: LaidRow,
    pub body: Vec<LaidRow>,
    pub pages: Vec<TablePage>,
}

impl TableLayout {
    #[must_use]
    pub fn total_width(&self) -> f32 {
        self.widths.iter().sum()
    }

    /// Left edge of every column.
    #[must_use]
    pub fn column_lefts(&self) -> Vec<f32> {
        self.widths
            .iter()
            .scan(self.left, |x, w| {
                let left = *x;
                *x += w;
                Some(left)
            })
            .collect()
    }
}

/// Lays out a table of `headers` over `rows`.
///
/// The column count is the widest of the header row and every body row;
/// short rows are padded with empty cells. The header row is repeated at
/// the top of every page.
#[must_use]
pub fn layout_table(headers: &[String], rows: &[Vec<String>], style: &TableStyle) -> TableLayout {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);

    let widths = column_widths(headers, rows, columns, style);
    let header = lay_row(headers, &widths, style);
    let body: Vec<LaidRow> = rows.iter().map(|r| lay_row(r, &widths, style)).collect();
    let pages = paginate(&header, &body, style);

    TableLayout {
        left: style.margin,
        widths,
        header,
        body,
        pages,
    }
}

/// Natural content widths scaled to fill the printable width.
fn column_widths(
    headers: &[String],
    rows: &[Vec<String>],
    columns: usize,
    style: &TableStyle,
) -> Vec<f32> {
    if columns == 0 {
        return Vec::new();
    }
    let available = style.available_width();

    let natural: Vec<f32> = (0..columns)
        .map(|col| {
            let content = rows
                .iter()
                .filter_map(|r| r.get(col))
                .chain(headers.get(col))
                .map(|text| style.text_width(text))
                .fold(0.0, f32::max);
            content + 2.0 * style.cell_padding
        })
        .collect();

    let total: f32 = natural.iter().sum();
    if total <= 0.0 {
        return vec![available / columns as f32; columns];
    }
    natural.iter().map(|w| w * available / total).collect()
}

fn lay_row(cells: &[String], widths: &[f32], style: &TableStyle) -> LaidRow {
    let cells: Vec<Vec<String>> = widths
        .iter()
        .enumerate()
        .map(|(col, width)| {
            let text = cells.get(col).map_or("", String::as_str);
            let max_chars = ((width - 2.0 * style.cell_padding) / style.char_width()).floor();
            wrap_text(text, (max_chars as usize).max(1))
        })
        .collect();
    let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
    LaidRow {
        cells,
        height: lines as f32 * style.line_height() + 2.0 * style.cell_padding,
    }
}

fn paginate(header: &LaidRow, body: &[LaidRow], style: &TableStyle) -> Vec<TablePage> {
    let mut pages = Vec::new();
    let mut page = TablePage {
        header_top: style.start_y,
        rows: Vec::new(),
    };
    let mut y = style.start_y + header.height;

    for (index, row) in body.iter().enumerate() {
        // A row taller than a page still goes on a page of its own.
        if y + row.height > style.bottom_limit() && !page.rows.is_empty() {
            pages.push(page);
            page = TablePage {
                header_top: style.margin,
                rows: Vec::new(),
            };
            y = style.margin + header.height;
        }
        page.rows.push(PlacedRow { index, top: y });
        y += row.height;
    }
    pages.push(page);
    pages
}

/// Greedy word wrap to at most `max_chars` characters per line.
///
/// Explicit newlines are kept and words longer than a line are split.
#[must_use]
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            if current_len > 0 && current_len + 1 + word.len() <= max_chars {
                current.push(' ');
                current.extend(word.iter());
                current_len += 1 + word.len();
                continue;
            }
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
            }
            while word.len() > max_chars {
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            current_len = word.len();
            current = word.into_iter().collect();
        }
        lines.push(current);
    }
    lines
}
