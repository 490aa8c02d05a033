//! CSV rendering of row collections for table export.

use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::Value;

/// Render rows as CSV text: a header line of field names followed by one
/// line per row. An empty slice renders to an empty string.
///
/// Fields are taken from each row's serialized form, so anything
/// `Serialize` works. Values containing commas, quotes, or newlines are
/// quoted, with embedded quotes doubled. Nulls render as empty fields and
/// nested values as their JSON text.
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let Some(first) = rows.first() else {
        return Ok(String::new());
    };

    let Value::Object(head) = serde_json::to_value(first)? else {
        bail!("CSV export requires rows that serialize to objects");
    };
    let headers: Vec<String> = head.keys().cloned().collect();

    let mut out = String::new();
    out.push_str(&headers.join(","));
    out.push('\n');

    for row in rows {
        let Value::Object(fields) = serde_json::to_value(row)? else {
            bail!("CSV export requires rows that serialize to objects");
        };
        let line: Vec<String> = headers
            .iter()
            .map(|h| escape(fields.get(h).unwrap_or(&Value::Null)))
            .collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    Ok(out)
}

fn escape(value: &Value) -> String {
    let text = match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    if text.contains([',', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}
