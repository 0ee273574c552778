//! JavaScript object-literal output
//!
//! The value is pretty-printed as JSON, then every `"text":` occurrence is
//! unquoted with one global textual substitution. The substitution does not
//! check that the key is a valid identifier, and it also rewrites string
//! values that themselves contain `"word":` (for example a string holding
//! escaped JSON). Both are known limitations kept for output compatibility.

use super::pretty_json;
use crate::conversion::Format;
use crate::error::{GenerateError, GenerateResult};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn quoted_key() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]+)":"#).expect("valid quoted key regex"))
}

/// Remove the quotes from every `"text":` occurrence
pub fn unquote_keys(json: &str) -> String {
    quoted_key().replace_all(json, "${1}:").into_owned()
}

/// Render `value` as `const <variable> = <literal>;`
pub fn generate_javascript(
    value: &Value,
    indent_size: u8,
    variable: &str,
) -> GenerateResult<String> {
    let json = pretty_json(value, indent_size).map_err(|e| GenerateError::new(Format::JavaScript, e))?;
    Ok(format!("const {} = {};", variable, unquote_keys(&json)))
}
