//! CSV reading
//!
//! The first non-empty line is the header. Every following record becomes an
//! object keyed by the header fields, with all values kept as strings.

use crate::conversion::{DelimiterType, Format};
use crate::error::{ParseError, ParseResult};
use serde_json::{Map, Value};

/// Read CSV text into an array of string-valued objects
pub fn parse_csv(input: &str, delimiter: DelimiterType) -> ParseResult<Value> {
    let skipped: usize = input
        .split_inclusive('\n')
        .take_while(|line| line.trim().is_empty())
        .map(str::len)
        .sum();
    let text = &input[skipped..];
    if text.is_empty() {
        return Err(ParseError::new(Format::Csv, "no data to convert"));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter.as_byte())
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(to_parse_error)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(to_parse_error)?;
        let mut row = Map::new();
        for (idx, header) in headers.iter().enumerate() {
            let field = record.get(idx).unwrap_or_default();
            row.insert(header.clone(), Value::String(field.to_string()));
        }
        rows.push(Value::Object(row));
    }

    Ok(Value::Array(rows))
}

fn to_parse_error(err: csv::Error) -> ParseError {
    let error = ParseError::new(Format::Csv, err.to_string());
    match err.position() {
        Some(pos) => error.with_location(pos.line() as usize, 1),
        None => error,
    }
}
