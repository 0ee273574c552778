//! CSV output

use crate::conversion::{DelimiterType, Format};
use crate::error::{GenerateError, GenerateResult};
use indexmap::IndexSet;
use serde_json::{Map, Value};

/// Render an array of objects (or a single object) as CSV
///
/// The header is the union of all row keys in first-seen order. Missing
/// cells are empty, `null` is empty, and nested arrays or objects are
/// written as compact JSON.
pub fn generate_csv(value: &Value, delimiter: DelimiterType) -> GenerateResult<String> {
    let rows = collect_rows(value)?;

    let mut headers: IndexSet<&str> = IndexSet::new();
    for row in &rows {
        headers.extend(row.keys().map(|k| k.as_str()));
    }
    if headers.is_empty() {
        return Ok(String::new());
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .delimiter(delimiter.as_byte())
        .from_writer(Vec::new());

    wtr.write_record(&headers).map_err(err)?;
    for row in &rows {
        let mut record = Vec::with_capacity(headers.len());
        for header in &headers {
            record.push(cell_text(row.get(*header))?);
        }
        wtr.write_record(&record).map_err(err)?;
    }
    wtr.flush().map_err(|e| GenerateError::new(Format::Csv, e.to_string()))?;

    let bytes = wtr
        .into_inner()
        .map_err(|e| GenerateError::new(Format::Csv, e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| GenerateError::new(Format::Csv, e.to_string()))?;
    Ok(text.strip_suffix('\n').unwrap_or(&text).to_string())
}

fn collect_rows(value: &Value) -> GenerateResult<Vec<&Map<String, Value>>> {
    match value {
        Value::Object(map) => Ok(vec![map]),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                item.as_object().ok_or_else(|| {
                    GenerateError::new(
                        Format::Csv,
                        format!("row {} is not an object; CSV requires an array of objects", idx),
                    )
                })
            })
            .collect(),
        _ => Err(GenerateError::new(
            Format::Csv,
            "CSV requires an array of objects",
        )),
    }
}

fn cell_text(value: Option<&Value>) -> GenerateResult<String> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(Value::Number(num)) => Ok(num.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => serde_json::to_string(other)
            .map_err(|e| GenerateError::new(Format::Csv, format!("Failed to encode nested value: {e}"))),
    }
}

fn err(e: csv::Error) -> GenerateError {
    GenerateError::new(Format::Csv, e.to_string())
}
