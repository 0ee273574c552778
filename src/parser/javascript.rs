//! JavaScript object-literal evaluation
//!
//! Input is a single literal expression, optionally wrapped in a variable
//! declaration (`const data = ...;`). The expression is read by a small
//! recursive-descent parser that understands only literals: objects,
//! arrays, strings, numbers, booleans, `null`, `undefined`, `NaN` and
//! `Infinity`, plus unary `+`/`-` and parentheses. Nothing is executed and
//! no name outside the literal text can be resolved, so any other
//! identifier fails with `<name> is not defined`.

use super::number_value;
use crate::conversion::Format;
use crate::error::{ParseError, ParseResult};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

fn declaration_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:export\s+)?(?:const|let|var)\s+[A-Za-z_$][\w$]*\s*(?::[^=]*)?=\s*")
            .expect("valid declaration regex")
    })
}

/// Remove a leading `const|let|var name =` and a trailing semicolon
pub fn strip_declaration(input: &str) -> &str {
    let trimmed = input.trim();
    let body = match declaration_prefix().find(trimmed) {
        Some(m) => &trimmed[m.end()..],
        None => trimmed,
    };
    body.trim_end().strip_suffix(';').unwrap_or(body).trim_end()
}

/// Evaluate a JavaScript literal (with optional declaration wrapper)
pub fn parse_javascript(input: &str, max_depth: Option<usize>) -> ParseResult<Value> {
    evaluate_literal(strip_declaration(input), max_depth)
}

/// Evaluate a bare JavaScript literal expression
///
/// A top-level `undefined` serializes as `null`.
pub fn evaluate_literal(expression: &str, max_depth: Option<usize>) -> ParseResult<Value> {
    let mut parser = LiteralParser::new(expression, max_depth);
    let literal = parser.parse_program()?;
    Ok(literal.into_value().unwrap_or(Value::Null))
}

/// Result of evaluating one literal expression
enum Literal {
    Undefined,
    Number(f64),
    Value(Value),
}

impl Literal {
    /// JSON form of the literal; `None` for `undefined`
    fn into_value(self) -> Option<Value> {
        match self {
            Literal::Undefined => None,
            Literal::Number(n) => Some(number_value(n)),
            Literal::Value(v) => Some(v),
        }
    }

    /// JavaScript `ToNumber`
    fn to_number(&self) -> f64 {
        match self {
            Literal::Undefined => f64::NAN,
            Literal::Number(n) => *n,
            Literal::Value(Value::Null) => 0.0,
            Literal::Value(Value::Bool(true)) => 1.0,
            Literal::Value(Value::Bool(false)) => 0.0,
            Literal::Value(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
            Literal::Value(Value::String(s)) => {
                let s = s.trim();
                if s.is_empty() {
                    0.0
                } else {
                    s.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
            Literal::Value(Value::Array(_)) | Literal::Value(Value::Object(_)) => f64::NAN,
        }
    }
}

/// Recursive-descent reader for JavaScript literal expressions
struct LiteralParser {
    chars: Vec<char>,
    pos: usize,
    max_depth: Option<usize>,
}

impl LiteralParser {
    fn new(source: &str, max_depth: Option<usize>) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            max_depth,
        }
    }

    fn parse_program(&mut self) -> ParseResult<Literal> {
        self.skip_trivia()?;
        if self.peek().is_none() {
            return Err(self.error("Unexpected end of input"));
        }
        let literal = self.parse_expression(0)?;
        self.skip_trivia()?;
        match self.peek() {
            None => Ok(literal),
            Some(c) => Err(self.unexpected(c)),
        }
    }

    fn parse_expression(&mut self, depth: usize) -> ParseResult<Literal> {
        if let Some(max) = self.max_depth {
            if depth > max {
                return Err(self.error(&format!("Maximum nesting depth of {} exceeded", max)));
            }
        }

        self.skip_trivia()?;
        let c = match self.peek() {
            Some(c) => c,
            None => return Err(self.error("Unexpected end of input")),
        };

        match c {
            '{' => self.parse_object(depth).map(Literal::Value),
            '[' => self.parse_array(depth).map(Literal::Value),
            '"' | '\'' | '`' => self
                .parse_string()
                .map(|s| Literal::Value(Value::String(s))),
            '-' | '+' => {
                self.pos += 1;
                let n = self.parse_expression(depth + 1)?.to_number();
                Ok(Literal::Number(if c == '-' { -n } else { n }))
            }
            '(' => {
                self.pos += 1;
                let literal = self.parse_expression(depth + 1)?;
                self.skip_trivia()?;
                self.expect(')')?;
                Ok(literal)
            }
            c if c.is_ascii_digit() => self.parse_number().map(Literal::Number),
            '.' if self.peek_at(1).is_some_and(|d| d.is_ascii_digit()) => {
                self.parse_number().map(Literal::Number)
            }
            c if is_identifier_start(c) => {
                let start = self.pos;
                let name = self.parse_identifier();
                match name.as_str() {
                    "true" => Ok(Literal::Value(Value::Bool(true))),
                    "false" => Ok(Literal::Value(Value::Bool(false))),
                    "null" => Ok(Literal::Value(Value::Null)),
                    "undefined" => Ok(Literal::Undefined),
                    "NaN" => Ok(Literal::Number(f64::NAN)),
                    "Infinity" => Ok(Literal::Number(f64::INFINITY)),
                    _ => {
                        self.pos = start;
                        Err(self.error(&format!("{} is not defined", name)))
                    }
                }
            }
            other => Err(self.unexpected(other)),
        }
    }

    fn parse_object(&mut self, depth: usize) -> ParseResult<Value> {
        self.expect('{')?;
        let mut map = Map::new();

        loop {
            self.skip_trivia()?;
            match self.peek() {
                Some('}') => {
                    self.pos += 1;
                    break;
                }
                None => return Err(self.error("Unexpected end of input")),
                _ => {}
            }

            let key_start = self.pos;
            let (key, shorthand_ok) = self.parse_key()?;
            self.skip_trivia()?;
            match self.peek() {
                Some(':') => self.pos += 1,
                Some(',') | Some('}') if shorthand_ok => {
                    // `{ name }` reads a variable, which never exists here
                    self.pos = key_start;
                    return Err(self.error(&format!("{} is not defined", key)));
                }
                Some(c) => return Err(self.unexpected(c)),
                None => return Err(self.error("Unexpected end of input")),
            }

            match self.parse_expression(depth + 1)?.into_value() {
                Some(value) => {
                    map.insert(key, value);
                }
                // undefined properties are dropped on serialization
                None => {
                    map.shift_remove(&key);
                }
            }

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => self.pos += 1,
                Some('}') => {
                    self.pos += 1;
                    break;
                }
                Some(c) => return Err(self.unexpected(c)),
                None => return Err(self.error("Unexpected end of input")),
            }
        }

        Ok(Value::Object(map))
    }

    /// Returns the key text and whether it was a bare identifier
    fn parse_key(&mut self) -> ParseResult<(String, bool)> {
        match self.peek() {
            Some('"') | Some('\'') => Ok((self.parse_string()?, false)),
            Some(c)
                if c.is_ascii_digit()
                    || (c == '.' && self.peek_at(1).is_some_and(|d| d.is_ascii_digit())) =>
            {
                let n = self.parse_number()?;
                Ok((number_value(n).to_string(), false))
            }
            Some(c) if is_identifier_start(c) => Ok((self.parse_identifier(), true)),
            Some('[') => Err(self.error("Computed property names are not supported")),
            Some(c) => Err(self.unexpected(c)),
            None => Err(self.error("Unexpected end of input")),
        }
    }

    fn parse_array(&mut self, depth: usize) -> ParseResult<Value> {
        self.expect('[')?;
        let mut items = Vec::new();

        loop {
            self.skip_trivia()?;
            match self.peek() {
                Some(']') => {
                    self.pos += 1;
                    break;
                }
                Some(',') => {
                    // hole
                    self.pos += 1;
                    items.push(Value::Null);
                    continue;
                }
                None => return Err(self.error("Unexpected end of input")),
                _ => {}
            }

            let value = self.parse_expression(depth + 1)?.into_value();
            items.push(value.unwrap_or(Value::Null));

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => self.pos += 1,
                Some(']') => {
                    self.pos += 1;
                    break;
                }
                Some(c) => return Err(self.unexpected(c)),
                None => return Err(self.error("Unexpected end of input")),
            }
        }

        Ok(Value::Array(items))
    }

    fn parse_string(&mut self) -> ParseResult<String> {
        let quote = match self.next() {
            Some(q) => q,
            None => return Err(self.error("Unexpected end of input")),
        };
        let mut out = String::new();

        loop {
            let c = match self.next() {
                Some(c) => c,
                None => return Err(self.error("Invalid or unexpected token")),
            };
            match c {
                c if c == quote => break,
                '\\' => self.parse_escape(&mut out)?,
                '\n' | '\r' if quote != '`' => {
                    self.pos -= 1;
                    return Err(self.error("Invalid or unexpected token"));
                }
                '$' if quote == '`' && self.peek() == Some('{') => {
                    self.pos -= 1;
                    return Err(self.error("Template expressions are not supported"));
                }
                c => out.push(c),
            }
        }

        Ok(out)
    }

    fn parse_escape(&mut self, out: &mut String) -> ParseResult<()> {
        let c = match self.next() {
            Some(c) => c,
            None => return Err(self.error("Invalid or unexpected token")),
        };
        match c {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !self.peek().is_some_and(|d| d.is_ascii_digit()) => out.push('\0'),
            'x' => {
                let code = self.parse_hex_digits(2)?;
                out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
            }
            'u' => {
                let code = self.parse_unicode_escape()?;
                if (0xD800..0xDC00).contains(&code)
                    && self.peek() == Some('\\')
                    && self.peek_at(1) == Some('u')
                {
                    let save = self.pos;
                    self.pos += 2;
                    let low = self.parse_unicode_escape()?;
                    if (0xDC00..0xE000).contains(&low) {
                        let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                        out.push(char::from_u32(combined).unwrap_or('\u{fffd}'));
                        return Ok(());
                    }
                    self.pos = save;
                }
                out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
            }
            // line continuation
            '\r' => {
                if self.peek() == Some('\n') {
                    self.pos += 1;
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => out.push(other),
        }
        Ok(())
    }

    fn parse_unicode_escape(&mut self) -> ParseResult<u32> {
        if self.peek() == Some('{') {
            self.pos += 1;
            let mut code: u32 = 0;
            let mut digits = 0;
            while let Some(c) = self.peek() {
                if c == '}' {
                    break;
                }
                let d = c
                    .to_digit(16)
                    .ok_or_else(|| self.error("Invalid Unicode escape sequence"))?;
                code = code.saturating_mul(16).saturating_add(d);
                digits += 1;
                self.pos += 1;
            }
            self.expect('}')?;
            if digits == 0 || code > 0x10FFFF {
                return Err(self.error("Undefined Unicode code-point"));
            }
            Ok(code)
        } else {
            self.parse_hex_digits(4)
        }
    }

    fn parse_hex_digits(&mut self, count: usize) -> ParseResult<u32> {
        let mut code = 0;
        for _ in 0..count {
            let d = self
                .peek()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("Invalid hexadecimal escape sequence"))?;
            code = code * 16 + d;
            self.pos += 1;
        }
        Ok(code)
    }

    fn parse_number(&mut self) -> ParseResult<f64> {
        let start = self.pos;

        if self.peek() == Some('0') {
            let radix = match self.peek_at(1) {
                Some('x') | Some('X') => Some(16),
                Some('o') | Some('O') => Some(8),
                Some('b') | Some('B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                self.pos += 2;
                let mut value = 0.0f64;
                let mut digits = 0;
                while let Some(c) = self.peek() {
                    if c == '_' {
                        self.pos += 1;
                        continue;
                    }
                    match c.to_digit(radix) {
                        Some(d) => {
                            value = value * radix as f64 + d as f64;
                            digits += 1;
                            self.pos += 1;
                        }
                        None => break,
                    }
                }
                if digits == 0 {
                    self.pos = start;
                    return Err(self.error("Invalid or unexpected token"));
                }
                self.check_number_end()?;
                return Ok(value);
            }
        }

        let mut text = String::new();
        self.take_digits(&mut text);
        if self.peek() == Some('.') {
            text.push('.');
            self.pos += 1;
            self.take_digits(&mut text);
        }
        if matches!(self.peek(), Some('e') | Some('E')) {
            text.push('e');
            self.pos += 1;
            if let Some(sign @ ('+' | '-')) = self.peek() {
                text.push(sign);
                self.pos += 1;
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(self.error("Invalid or unexpected token"));
            }
            self.take_digits(&mut text);
        }

        if self.peek() == Some('n') {
            return Err(self.error("BigInt values cannot be serialized"));
        }
        self.check_number_end()?;

        if text.starts_with('.') {
            text.insert(0, '0');
        }
        text.parse::<f64>().map_err(|_| {
            self.pos = start;
            self.error("Invalid or unexpected token")
        })
    }

    fn take_digits(&mut self, text: &mut String) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                text.push(c);
            } else if c != '_' {
                break;
            }
            self.pos += 1;
        }
    }

    /// A numeric literal must not run straight into an identifier
    fn check_number_end(&self) -> ParseResult<()> {
        match self.peek() {
            Some(c) if is_identifier_start(c) || c.is_ascii_digit() => {
                Err(self.error("Invalid or unexpected token"))
            }
            _ => Ok(()),
        }
    }

    fn parse_identifier(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if is_identifier_part(c) {
                name.push(c);
                self.pos += 1;
            } else {
                break;
            }
        }
        name
    }

    /// Skip whitespace and comments
    fn skip_trivia(&mut self) -> ParseResult<()> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() || c == '\u{feff}' => self.pos += 1,
                Some('/') if self.peek_at(1) == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                Some('/') if self.peek_at(1) == Some('*') => {
                    let start = self.pos;
                    self.pos += 2;
                    loop {
                        match self.peek() {
                            Some('*') if self.peek_at(1) == Some('/') => {
                                self.pos += 2;
                                break;
                            }
                            Some(_) => self.pos += 1,
                            None => {
                                self.pos = start;
                                return Err(self.error("Invalid or unexpected token"));
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn expect(&mut self, expected: char) -> ParseResult<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(c) => Err(self.unexpected(c)),
            None => Err(self.error("Unexpected end of input")),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn unexpected(&self, c: char) -> ParseError {
        self.error(&format!("Unexpected token '{}'", c))
    }

    fn error(&self, message: &str) -> ParseError {
        let (line, column) = self.location();
        ParseError::new(
            Format::JavaScript,
            format!("{} at line {} column {}", message, line, column),
        )
        .with_location(line, column)
    }

    fn location(&self) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        for &c in self.chars.iter().take(self.pos) {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
