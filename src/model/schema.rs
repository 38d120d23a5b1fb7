use super::{Record, Value};
use crate::error::ExportError;
use serde::Serialize;

/// Expected kind of a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FieldKind {
    #[default]
    Any,
    Text,
    Number,
    Bool,
}

impl FieldKind {
    /// `Null` is accepted by every kind; `Undefined` by none.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Undefined) => false,
            (_, Value::Null)
            | (FieldKind::Any, _)
            | (FieldKind::Text, Value::Text(_))
            | (FieldKind::Number, Value::Number(_))
            | (FieldKind::Bool, Value::Bool(_)) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// How records that deviate from the schema are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaPolicy {
    /// Missing fields export as `undefined`, extra fields are dropped.
    #[default]
    Tolerate,
    /// Any missing field, extra field or wrong kind is an error.
    Strict,
}

/// Ordered list of columns for an export.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Schema of untyped fields with the given names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            names
                .into_iter()
                .map(|name| Field::new(name, FieldKind::Any))
                .collect(),
        )
    }

    /// The first record's keys, in its natural order. `None` for an empty dataset.
    #[must_use]
    pub fn from_first_record(data: &[Record]) -> Option<Self> {
        data.first().map(|first| Self::from_names(first.keys()))
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Checks every record against the schema when `policy` is strict.
    pub fn validate(&self, data: &[Record], policy: SchemaPolicy) -> Result<(), ExportError> {
        if policy == SchemaPolicy::Tolerate {
            return Ok(());
        }
        for (index, record) in data.iter().enumerate() {
            self.check_record(index, record)?;
        }
        Ok(())
    }

    fn check_record(&self, index: usize, record: &Record) -> Result<(), ExportError> {
        for field in &self.fields {
            let value = record.field(&field.name);
            if value.is_undefined() {
                return Err(mismatch(index, &field.name, "missing field"));
            }
            if !field.kind.accepts(value) {
                return Err(mismatch(
                    index,
                    &field.name,
                    &format!("expected {:?}, found '{value}'", field.kind),
                ));
            }
        }
        if let Some(extra) = record
            .keys()
            .find(|key| !self.fields.iter().any(|f| f.name == *key))
        {
            return Err(mismatch(index, extra, "field not in schema"));
        }
        Ok(())
    }
}

fn mismatch(record: usize, field: &str, message: &str) -> ExportError {
    ExportError::SchemaMismatch {
        record,
        field: field.to_string(),
        message: message.to_string(),
    }
}
