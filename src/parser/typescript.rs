//! TypeScript interface reading
//!
//! This is a line-level heuristic, not a TypeScript parser. The declaration
//! header and braces are removed, each `key: type` member is rewritten as a
//! JSON member with the primitive tokens replaced by sample values, and the
//! result is parsed as a JSON object. Unions, generics, optional members,
//! nested object types and references to other interfaces are rejected.

use crate::conversion::Format;
use crate::error::{ParseError, ParseResult};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

const GUIDANCE: &str = "please provide a simple interface";

fn declaration_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:export\s+)?(?:interface\s+[A-Za-z_$][\w$]*|type\s+[A-Za-z_$][\w$]*\s*=)\s*$")
            .expect("valid declaration header regex")
    })
}

fn member_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^(?:"([^"]*)"|'([^']*)'|([A-Za-z_$][\w$]*))\s*:\s*(.+)$"#)
            .expect("valid member regex")
    })
}

/// Read a simple `interface`/`type` declaration into a sample object
///
/// `string` becomes `"string"`, `number` becomes `0`, `boolean` becomes
/// `false` and `any` becomes `null`; `T[]` becomes a one-element array.
pub fn parse_typescript(input: &str) -> ParseResult<Value> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(failure("no data to convert"));
    }

    let open = trimmed
        .find('{')
        .ok_or_else(|| failure("expected an interface body in braces"))?;
    let close = trimmed
        .rfind('}')
        .filter(|&close| close > open)
        .ok_or_else(|| failure("expected a closing brace"))?;

    let header = trimmed[..open].trim();
    if !declaration_header().is_match(header) {
        return Err(failure(&format!(
            "expected `interface Name` or `type Name =`, found `{}`",
            header
        )));
    }

    let trailer = trimmed[close + 1..].trim();
    if !trailer.is_empty() && trailer != ";" {
        return Err(failure(&format!("unexpected text after interface: `{}`", trailer)));
    }

    let body = &trimmed[open + 1..close];
    let mut members = Vec::new();
    for raw in body.split(|c| c == ';' || c == ',' || c == '\n') {
        let member = strip_line_comment(raw).trim();
        if member.is_empty() {
            continue;
        }
        members.push(member_to_json(member)?);
    }

    let fragment = format!("{{{}}}", members.join(","));
    serde_json::from_str(&fragment).map_err(|e| failure(&e.to_string()))
}

fn member_to_json(member: &str) -> ParseResult<String> {
    let captures = member_pattern()
        .captures(member)
        .ok_or_else(|| failure(&format!("unsupported member `{}`", member)))?;

    let key = captures
        .get(1)
        .or_else(|| captures.get(2))
        .or_else(|| captures.get(3))
        .map(|m| m.as_str())
        .unwrap_or_default();
    let type_text = captures.get(4).map(|m| m.as_str().trim()).unwrap_or_default();

    let sample = sample_for(type_text)
        .ok_or_else(|| failure(&format!("unsupported type `{}` for `{}`", type_text, key)))?;

    let key_json = serde_json::to_string(key).map_err(|e| failure(&e.to_string()))?;
    Ok(format!("{}:{}", key_json, sample))
}

/// Substitute a type token with the sample literal it stands for
fn sample_for(type_text: &str) -> Option<String> {
    if let Some(element) = type_text.strip_suffix("[]") {
        return sample_for(element.trim()).map(|inner| format!("[{}]", inner));
    }
    let sample = match type_text {
        "string" => "\"string\"",
        "number" => "0",
        "boolean" => "false",
        "any" => "null",
        // literal JSON scalars pass through unchanged
        "null" | "true" | "false" => type_text,
        _ => return None,
    };
    Some(sample.to_string())
}

fn strip_line_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn failure(detail: &str) -> ParseError {
    ParseError::new(Format::TypeScript, format!("{} ({})", detail, GUIDANCE))
}
