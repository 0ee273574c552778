//! YAML reading

use crate::conversion::Format;
use crate::error::{ParseError, ParseResult};
use super::number_value;
use serde_json::{Map, Value};

/// Read a single YAML document into a value tree
pub fn parse_yaml(input: &str) -> ParseResult<Value> {
    if input.trim().is_empty() {
        return Ok(Value::Null);
    }
    let document: serde_yaml::Value = serde_yaml::from_str(input).map_err(|e| {
        let error = ParseError::new(Format::Yaml, e.to_string());
        match e.location() {
            Some(loc) => error.with_location(loc.line(), loc.column()),
            None => error,
        }
    })?;
    Ok(yaml_value(document))
}

/// Map a YAML node onto the JSON value tree
///
/// Tags are dropped and floats are normalized like JavaScript numbers, so
/// `1.0` reads as `1` and `.nan` as `null`.
pub fn yaml_value(node: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match node {
        Yaml::Null => Value::Null,
        Yaml::Bool(flag) => Value::Bool(flag),
        Yaml::Number(num) => yaml_number(&num),
        Yaml::String(text) => Value::String(text),
        Yaml::Sequence(items) => items.into_iter().map(yaml_value).collect(),
        Yaml::Mapping(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, child)| (mapping_key(key), yaml_value(child)))
                .collect::<Map<String, Value>>(),
        ),
        Yaml::Tagged(tagged) => yaml_value(tagged.value),
    }
}

fn yaml_number(num: &serde_yaml::Number) -> Value {
    if let Some(int) = num.as_i64() {
        Value::from(int)
    } else if let Some(uint) = num.as_u64() {
        Value::from(uint)
    } else {
        num.as_f64().map(number_value).unwrap_or(Value::Null)
    }
}

/// Mapping keys that are not strings are rendered as their scalar text
fn mapping_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(&other)
            .unwrap_or_default()
            .trim()
            .to_string(),
    }
}
