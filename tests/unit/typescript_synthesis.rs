//! Unit tests for TypeScript interface synthesis and reading
//!
//! Tests cover:
//! - Interfaces synthesized from JSON, YAML and CSV sources
//! - Custom root names
//! - Reading simple interfaces back into sample data

use dataconv::{convert, ConversionConfig, ConversionEngine, Format};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[cfg(test)]
mod typescript_synthesis_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_interface_from_json() {
        let input = r#"{"name":"John Doe","age":30,"isActive":true,"skills":["JavaScript","TypeScript"]}"#;
        let output = convert(input, Format::Json, Format::TypeScript).unwrap();
        assert_eq!(
            output,
            "interface Root {\n  name: string;\n  age: number;\n  isActive: boolean;\n  skills: string[];\n}"
        );
    }

    /// Only the first array element is sampled
    #[test]
    fn test_array_root_samples_first_item() {
        let input = r#"[{"id":1,"title":"a"},{"id":2,"title":"b","done":true}]"#;
        let output = convert(input, Format::Json, Format::TypeScript).unwrap();
        assert_eq!(
            output,
            "interface RootItem {\n  id: number;\n  title: string;\n}\n\ntype Root = RootItem[];"
        );
    }

    #[test]
    fn test_empty_array_root() {
        let output = convert("[]", Format::Json, Format::TypeScript).unwrap();
        assert_eq!(output, "interface Root {}\n\ntype RootArray = Root[];");
    }

    /// Nested objects collapse to `object`
    #[test]
    fn test_nested_fields() {
        let input = "user:\n  name: Ann\nscores:\n  - 1\n  - 2\nnote: ~\n";
        let output = convert(input, Format::Yaml, Format::TypeScript).unwrap();
        assert_eq!(
            output,
            "interface Root {\n  user: object;\n  scores: number[];\n  note: null;\n}"
        );
    }

    /// CSV values are strings, so every field is typed `string`
    #[test]
    fn test_csv_source() {
        let output = convert("id,name\n1,Ann", Format::Csv, Format::TypeScript).unwrap();
        assert_eq!(
            output,
            "interface RootItem {\n  id: string;\n  name: string;\n}\n\ntype Root = RootItem[];"
        );
    }

    #[test]
    fn test_custom_type_name() {
        let engine = ConversionEngine::new(ConversionConfig::default().with_type_name("Order"));
        let output = engine
            .convert(r#"[{"total": 9.5}]"#, Format::Json, Format::TypeScript)
            .unwrap();
        assert_eq!(
            output,
            "interface OrderItem {\n  total: number;\n}\n\ntype Order = OrderItem[];"
        );
    }

    #[test]
    fn test_interface_to_json_sample() {
        let input = "export interface User {\n  id: number;\n  name: string;\n  admin: boolean;\n  roles: string[];\n}";
        let output = convert(input, Format::TypeScript, Format::Json).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!({"id": 0, "name": "string", "admin": false, "roles": ["string"]})
        );
    }

    /// Synthesized interfaces can be read back
    #[test]
    fn test_synthesized_interface_reads_back() {
        let ts = convert(r#"{"a":"x","b":2,"c":[true]}"#, Format::Json, Format::TypeScript).unwrap();
        let output = convert(&ts, Format::TypeScript, Format::Json).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value, json!({"a": "string", "b": 0, "c": [false]}));
    }

    #[test]
    fn test_complex_interface_rejected() {
        let err = convert(
            "interface A { child: B }",
            Format::TypeScript,
            Format::Json,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid TypeScript format: "));
        assert!(message.ends_with("(please provide a simple interface)"));
    }
}
