//! Structured data converter
//!
//! Converts text between JSON, JavaScript object literals, TypeScript
//! interfaces, CSV and YAML. Every conversion parses the source text into a
//! `serde_json::Value` tree and renders that tree in the target format.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;

// Re-export commonly used types
pub use conversion::{
    convert_json_js, ConversionConfig, ConversionEngine, ConversionRequest, ConversionResult,
    DelimiterType, Format,
};
pub use error::{ConversionError, GenerateError, ParseError, Stage};
pub use formatter::{generate, synthesize, TypeDescriptor};
pub use parser::parse;

/// Convert `input` from `source` to `target` with default configuration
pub fn convert(input: &str, source: Format, target: Format) -> ConversionResult<String> {
    ConversionEngine::default().convert(input, source, target)
}

/// Convert using format tags such as `"json"` or `"yaml"`
pub fn convert_by_tag(input: &str, source: &str, target: &str) -> ConversionResult<String> {
    let source: Format = source.parse()?;
    let target: Format = target.parse()?;
    convert(input, source, target)
}
