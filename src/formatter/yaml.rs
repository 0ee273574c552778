//! YAML output

use crate::conversion::Format;
use crate::error::{GenerateError, GenerateResult};
use serde_json::Value;

/// Dump `value` as block-style YAML, keeping key order
pub fn generate_yaml(value: &Value) -> GenerateResult<String> {
    let text = serde_yaml::to_string(value).map_err(|e| GenerateError::new(Format::Yaml, e.to_string()))?;
    Ok(text.strip_suffix('\n').unwrap_or(&text).to_string())
}
