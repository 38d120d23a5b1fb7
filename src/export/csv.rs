use crate::error::ExportError;
use crate::export::save::{FileSaver, MediaType};
use crate::model::{Record, Schema, SchemaPolicy};
use crate::notify::{Notifier, NO_DATA_MESSAGE};
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// How a double quote inside a field is escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteEscape {
    /// `a"b` becomes `"a\"b"`.
    #[default]
    Backslash,
    /// RFC 4180: `a"b` becomes `"a""b"`.
    Doubled,
}

#[derive(Debug, Clone, Default)]
pub struct CsvOptions {
    pub quote_escape: QuoteEscape,
    /// Columns to export. Derived from the first record when `None`.
    pub schema: Option<Schema>,
    pub policy: SchemaPolicy,
}

/// Builds the CSV text for `data`.
///
/// Every field, headers included, is double-quoted. Rows are separated by
/// `\n` with no trailing newline. An empty dataset yields an empty string.
pub fn csv_text(data: &[Record], options: &CsvOptions) -> Result<String, ExportError> {
    let schema = match options.schema.clone().or_else(|| Schema::from_first_record(data)) {
        Some(schema) => schema,
        None => return Ok(String::new()),
    };
    schema.validate(data, options.policy)?;

    tracing::debug!(
        headers = ?schema.names().collect::<Vec<_>>(),
        rows = data.len(),
        "building CSV"
    );

    // csv writes a lone `""` for an empty record; a column-less export is blank lines.
    if schema.is_empty() {
        return Ok("\n".repeat(data.len()));
    }

    let mut builder = WriterBuilder::new();
    builder
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'));
    match options.quote_escape {
        QuoteEscape::Backslash => builder.double_quote(false).escape(b'\\'),
        QuoteEscape::Doubled => builder.double_quote(true),
    };
    let mut writer = builder.from_writer(vec![]);

    writer.write_record(schema.names())?;

    for record in data {
        writer.write_record(schema.names().map(|name| record.field(name).to_string()))?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;
    let mut text = String::from_utf8(bytes).map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Reverses the quoting of a single field produced by [`csv_text`].
#[must_use]
pub fn unescape_field(field: &str, escape: QuoteEscape) -> String {
    let inner = field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field);
    match escape {
        QuoteEscape::Backslash => inner.replace("\\\"", "\""),
        QuoteEscape::Doubled => inner.replace("\"\"", "\""),
    }
}

/// Exports `data` as CSV through `saver` under `filename`.
///
/// An empty dataset produces no file and a single notification.
pub fn export_csv(
    data: &[Record],
    filename: &str,
    saver: &dyn FileSaver,
    notifier: &dyn Notifier,
) -> Result<(), ExportError> {
    export_csv_with(data, filename, &CsvOptions::default(), saver, notifier)
}

pub fn export_csv_with(
    data: &[Record],
    filename: &str,
    options: &CsvOptions,
    saver: &dyn FileSaver,
    notifier: &dyn Notifier,
) -> Result<(), ExportError> {
    if data.is_empty() {
        tracing::warn!(filename, "CSV export skipped: empty dataset");
        notifier.notify(NO_DATA_MESSAGE);
        return Ok(());
    }

    let text = csv_text(data, options)?;
    saver.save(text.as_bytes(), MediaType::Csv, filename)
}
