//! Parsers that read each supported format into a `serde_json::Value` tree

pub mod csv;
pub mod javascript;
pub mod typescript;
pub mod yaml;

use crate::conversion::{ConversionConfig, Format};
use crate::error::{ParseError, ParseResult};
use serde_json::{Number, Value};

/// Largest integer a double represents exactly (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Parse `text` as `format` using the default configuration
pub fn parse(text: &str, format: Format) -> ParseResult<Value> {
    parse_with_config(text, format, &ConversionConfig::default())
}

/// Parse `text` as `format`
///
/// Every branch fails with a [`ParseError`] naming the format; no partial
/// tree is ever returned.
pub fn parse_with_config(
    text: &str,
    format: Format,
    config: &ConversionConfig,
) -> ParseResult<Value> {
    match format {
        Format::Json => parse_json(text),
        Format::JavaScript => javascript::parse_javascript(text, config.max_depth),
        Format::TypeScript => typescript::parse_typescript(text),
        Format::Csv => csv::parse_csv(text, config.delimiter),
        Format::Yaml => yaml::parse_yaml(text),
    }
}

/// Parse standard JSON
pub fn parse_json(text: &str) -> ParseResult<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new(Format::Json, "no data to convert"));
    }

    let mut value: Value = serde_json::from_str(trimmed).map_err(|e| {
        ParseError::new(Format::Json, e.to_string()).with_location(e.line(), e.column())
    })?;
    normalize_numbers(&mut value);
    Ok(value)
}

/// Rewrite every floating-point number in the tree with [`number_value`]
pub(crate) fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(num) => {
            let float = if num.is_f64() { num.as_f64() } else { None };
            if let Some(n) = float {
                *value = number_value(n);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        Value::Null | Value::Bool(_) | Value::String(_) => {}
    }
}

/// Build a JSON number from a double the way JavaScript serializes it
///
/// Integral values within the safe-integer range become integers, and
/// non-finite values become `null`.
pub(crate) fn number_value(n: f64) -> Value {
    if !n.is_finite() {
        return Value::Null;
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
}
