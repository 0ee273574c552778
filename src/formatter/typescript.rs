//! TypeScript interface synthesis
//!
//! Rules:
//! - An array samples only its first element. A non-empty array `Name`
//!   produces an interface (or alias) `NameItem` plus `type Name = NameItem[]`.
//!   An empty array produces `interface Name {}` plus `type NameArray = Name[]`.
//! - An object produces `interface Name { key: type; ... }` in key order.
//! - Field types are one level deep: a nested object field is typed `object`
//!   and never expanded into its own interface, while array fields take the
//!   type of their first element (`any[]` when empty).
//! - A primitive root produces `type Name = <kind>`, using `typeof` naming,
//!   so a `null` root is `object` while a `null` field is `null`.

use serde_json::{Map, Value};
use std::fmt;

/// Primitive type names that can appear in synthesized declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
    Null,
    Any,
    Object,
}

impl PrimitiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Null => "null",
            PrimitiveKind::Any => "any",
            PrimitiveKind::Object => "object",
        }
    }
}

/// Type of one field or alias target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    ArrayOf(Box<TypeDescriptor>),
    Named(String),
}

impl TypeDescriptor {
    pub fn array_of(inner: TypeDescriptor) -> Self {
        TypeDescriptor::ArrayOf(Box::new(inner))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(kind) => f.write_str(kind.as_str()),
            TypeDescriptor::ArrayOf(inner) => write!(f, "{}[]", inner),
            TypeDescriptor::Named(name) => f.write_str(name),
        }
    }
}

/// Synthesize TypeScript declarations describing `value`, rooted at `name`
pub fn synthesize(value: &Value, name: &str) -> String {
    match value {
        Value::Array(items) => match items.first() {
            None => format!(
                "interface {} {{}}\n\n{}",
                name,
                type_alias(
                    &format!("{}Array", name),
                    &TypeDescriptor::array_of(TypeDescriptor::Named(name.to_string()))
                )
            ),
            Some(first) => {
                let item_name = format!("{}Item", name);
                let item = synthesize(first, &item_name);
                let alias = type_alias(
                    name,
                    &TypeDescriptor::array_of(TypeDescriptor::Named(item_name)),
                );
                format!("{}\n\n{}", item, alias)
            }
        },
        Value::Object(map) => interface(name, map),
        other => type_alias(name, &TypeDescriptor::Primitive(runtime_kind(other))),
    }
}

/// Type of an object field
pub fn field_type(value: &Value) -> TypeDescriptor {
    match value {
        Value::Null => TypeDescriptor::Primitive(PrimitiveKind::Null),
        Value::Bool(_) => TypeDescriptor::Primitive(PrimitiveKind::Boolean),
        Value::Number(_) => TypeDescriptor::Primitive(PrimitiveKind::Number),
        Value::String(_) => TypeDescriptor::Primitive(PrimitiveKind::String),
        Value::Array(items) => match items.first() {
            Some(first) => TypeDescriptor::array_of(field_type(first)),
            None => TypeDescriptor::array_of(TypeDescriptor::Primitive(PrimitiveKind::Any)),
        },
        Value::Object(_) => TypeDescriptor::Primitive(PrimitiveKind::Object),
    }
}

/// `typeof`-style kind name of a value
pub fn runtime_kind(value: &Value) -> PrimitiveKind {
    match value {
        Value::Bool(_) => PrimitiveKind::Boolean,
        Value::Number(_) => PrimitiveKind::Number,
        Value::String(_) => PrimitiveKind::String,
        Value::Null | Value::Array(_) | Value::Object(_) => PrimitiveKind::Object,
    }
}

fn interface(name: &str, map: &Map<String, Value>) -> String {
    let mut out = format!("interface {} {{\n", name);
    for (key, value) in map {
        out.push_str(&format!("  {}: {};\n", key, field_type(value)));
    }
    out.push('}');
    out
}

fn type_alias(name: &str, target: &TypeDescriptor) -> String {
    format!("type {} = {};", name, target)
}
