//! # report-export
//!
//! Export a set of uniform records to CSV text or to a tabular PDF report.
//!
//! ## Features
//!
//! - CSV with every field quoted, backslash-escaped quotes (RFC 4180
//!   doubling on request)
//! - PDF with a title and a paginated table under uppercased headers
//! - Columns from the first record, or from an explicit [`model::Schema`]
//! - Saving and user notification through injectable [`export::FileSaver`]
//!   and [`notify::Notifier`] implementations
//!
//! ## Example
//!
//! ```no_run
//! use report_export::export::{export_csv, DiskSaver};
//! use report_export::notify::TerminalNotifier;
//! use report_export::record;
//!
//! let data = vec![
//!     record! { "name" => "Alice", "age" => 30 },
//!     record! { "name" => "Bob", "age" => 25 },
//! ];
//! export_csv(&data, "users.csv", &DiskSaver::new("."), &TerminalNotifier)?;
//! # Ok::<(), report_export::error::ExportError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod logging;
pub mod model;
pub mod notify;
