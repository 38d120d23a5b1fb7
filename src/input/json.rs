use crate::error::LoadError;
use crate::model::{Record, Value};
use std::io::Read;
use std::path::Path;

/// Loads a dataset from a JSON file holding an array of flat objects.
///
/// Field order inside each object is preserved. A path of `-` reads stdin.
///
/// # Errors
///
/// Returns [`LoadError::FileRead`] if the file cannot be read, and the
/// errors of [`parse_json`] for malformed content.
///
/// # Example
///
/// ```no_run
/// use report_export::input::load_json;
///
/// let data = load_json("users.json")?;
/// println!("{} records", data.len());
/// # Ok::<(), report_export::error::LoadError>(())
/// ```
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let read_error = |source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(read_error)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(read_error)?
    };

    let data = parse_json(&content)?;
    tracing::debug!(path = %path.display(), records = data.len(), "dataset loaded");
    Ok(data)
}

/// Parses a JSON array of flat objects into records.
pub fn parse_json(content: &str) -> Result<Vec<Record>, LoadError> {
    let root: serde_json::Value = serde_json::from_str(content)?;
    let items = match root {
        serde_json::Value::Array(items) => items,
        _ => return Err(LoadError::NotAnArray),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let object = match item {
                serde_json::Value::Object(object) => object,
                _ => return Err(LoadError::NotAnObject { index }),
            };
            object
                .into_iter()
                .map(|(field, value)| match convert(value) {
                    Some(value) => Ok((field, value)),
                    None => Err(LoadError::UnsupportedValue { index, field }),
                })
                .collect::<Result<Record, _>>()
        })
        .collect()
}

fn convert(value: serde_json::Value) -> Option<Value> {
    match value {
        serde_json::Value::Null => Some(Value::Null),
        serde_json::Value::Bool(b) => Some(Value::Bool(b)),
        serde_json::Value::Number(n) => n.as_f64().map(Value::Number),
        serde_json::Value::String(s) => Some(Value::Text(s)),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_field_order() {
        let data = parse_json(r#"[{"zeta": 1, "alpha": "a", "mid": null}]"#).unwrap();
        assert_eq!(data[0].keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert_eq!(data[0].field("zeta"), &Value::Number(1.0));
        assert_eq!(data[0].field("mid"), &Value::Null);
    }

    #[test]
    fn empty_array_is_empty_dataset() {
        assert!(parse_json("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array() {
        assert!(matches!(parse_json(r#"{"a": 1}"#), Err(LoadError::NotAnArray)));
    }

    #[test]
    fn rejects_non_object_items() {
        assert!(matches!(
            parse_json(r#"[{"a": 1}, 2]"#),
            Err(LoadError::NotAnObject { index: 1 })
        ));
    }

    #[test]
    fn rejects_nested_values() {
        let err = parse_json(r#"[{"a": 1, "tags": ["x"]}]"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "record 0, field 'tags': nested values are not supported"
        );
    }

    #[test]
    fn reports_missing_file() {
        let err = load_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::FileRead { .. }));
    }
}
