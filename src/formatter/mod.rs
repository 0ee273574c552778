//! Generators that render a `serde_json::Value` tree into each supported format

pub mod csv;
pub mod javascript;
pub mod typescript;
pub mod yaml;

pub use typescript::{synthesize, TypeDescriptor};

use crate::conversion::{ConversionConfig, Format};
use crate::error::{GenerateError, GenerateResult};
use serde::Serialize;
use serde_json::Value;

/// Render `value` as `format` using the default configuration
pub fn generate(value: &Value, format: Format) -> GenerateResult<String> {
    generate_with_config(value, format, &ConversionConfig::default())
}

/// Render `value` as `format`
pub fn generate_with_config(
    value: &Value,
    format: Format,
    config: &ConversionConfig,
) -> GenerateResult<String> {
    match format {
        Format::Json => encode_json(value, config.indent_size),
        Format::JavaScript => {
            javascript::generate_javascript(value, config.indent_size, &config.variable_name)
        }
        Format::TypeScript => Ok(synthesize(value, &config.type_name)),
        Format::Csv => csv::generate_csv(value, config.delimiter),
        Format::Yaml => yaml::generate_yaml(value),
    }
}

/// Pretty-print JSON with `indent_size` spaces per level, keeping key order
pub fn encode_json(value: &Value, indent_size: u8) -> GenerateResult<String> {
    pretty_json(value, indent_size).map_err(|e| GenerateError::new(Format::Json, e))
}

pub(crate) fn pretty_json(value: &Value, indent_size: u8) -> Result<String, String> {
    let indent = " ".repeat(indent_size as usize);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| e.to_string())?;
    String::from_utf8(out).map_err(|e| e.to_string())
}
