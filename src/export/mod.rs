pub mod csv;
pub mod pdf;
pub mod save;
pub mod table;

pub use crate::error::ExportError;
pub use self::csv::{csv_text, export_csv, export_csv_with, unescape_field, CsvOptions, QuoteEscape};
pub use pdf::{export_pdf, export_pdf_with, pdf_filename, render_pdf, PdfOptions};
pub use save::{DiskSaver, FileSaver, MediaType, MemorySaver};
