//! Layout and runtime defaults for report-export

/// Environment variable holding the log filter for the binary
pub const LOG_ENV: &str = "REPORT_EXPORT_LOG";

// ====== Page ======

/// A4 portrait
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Left/right/bottom margin, and top margin on continuation pages
pub const PAGE_MARGIN_MM: f32 = 14.0;

// ====== Title ======

pub const TITLE_FONT_SIZE: f32 = 18.0;

/// Title baseline, measured from the top-left corner
pub const TITLE_X_MM: f32 = 14.0;
pub const TITLE_Y_MM: f32 = 22.0;

// ====== Table ======

/// Top of the table on the first page, measured from the top edge
pub const TABLE_START_Y_MM: f32 = 30.0;

pub const TABLE_FONT_SIZE: f32 = 10.0;

/// Header row background
pub const HEADER_FILL_RGB: [u8; 3] = [22, 160, 133];

/// Header text
pub const HEADER_TEXT_RGB: [u8; 3] = [255, 255, 255];

/// Background of every other body row
pub const STRIPE_FILL_RGB: [u8; 3] = [245, 245, 245];

pub const CELL_PADDING_MM: f32 = 1.8;

pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

// ====== Type metrics ======

pub const MM_PER_PT: f32 = 0.352_778;

/// Average Helvetica glyph advance as a fraction of the font size
pub const AVG_CHAR_WIDTH_EM: f32 = 0.5;

/// Baseline offset from the top of a text line, as a fraction of the font size
pub const ASCENT_EM: f32 = 0.8;
