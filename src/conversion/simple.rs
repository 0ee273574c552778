//! Two-format JSON ⇄ JavaScript conversion
//!
//! A lighter variant of the engine restricted to JSON and JavaScript. The
//! JavaScript side only strips one leading `const|let|var name =` and one
//! trailing semicolon before evaluating the literal.

use crate::conversion::{ConversionConfig, ConversionResult};
use crate::error::ConversionError;
use crate::formatter::encode_json;
use crate::formatter::javascript::generate_javascript;
use crate::parser::javascript::evaluate_literal;
use crate::parser::parse_json;
use regex::Regex;
use std::sync::OnceLock;

fn declaration_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(const|let|var)\s+\w+\s*=\s*").expect("valid declaration regex"))
}

/// Strip a single declaration keyword prefix and trailing semicolon
pub fn strip_simple_declaration(input: &str) -> String {
    let trimmed = input.trim();
    let stripped = declaration_keyword().replace(trimmed, "");
    let without_prefix: &str = &stripped;
    without_prefix
        .strip_suffix(';')
        .unwrap_or(without_prefix)
        .to_string()
}

/// Convert JSON to JavaScript (`json_to_js`) or JavaScript to JSON
pub fn convert_json_js(input: &str, json_to_js: bool) -> ConversionResult<String> {
    if input.trim().is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let config = ConversionConfig::default();
    if json_to_js {
        let value = parse_json(input)?;
        Ok(generate_javascript(&value, config.indent_size, &config.variable_name)?)
    } else {
        let code = strip_simple_declaration(input);
        let value = evaluate_literal(&code, config.max_depth)?;
        Ok(encode_json(&value, config.indent_size)?)
    }
}
