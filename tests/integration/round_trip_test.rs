//! Integration tests for conversions that should preserve the value tree
//!
//! These tests chain conversions through the public API:
//! - JSON -> JSON
//! - JSON -> YAML -> JSON
//! - JSON -> JavaScript -> JSON
//! - JSON -> CSV -> JSON for flat string tables

use dataconv::{convert, ConversionEngine, Format};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn parse_json(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

fn samples() -> Vec<Value> {
    vec![
        json!({"name": "Alice", "age": 30, "active": true}),
        json!([1, 2.5, -3, "four", false]),
        json!({
            "user": {
                "id": 123,
                "profile": {"email": "alice@example.com", "tags": ["admin", "ops"]},
                "scores": [[1, 2], [3, 4]]
            },
            "empty_object": {},
            "empty_array": [],
            "unicode": "héllo wörld ✓"
        }),
        json!([{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]),
        json!("just a string"),
        json!(0),
    ]
}

#[test]
fn test_json_round_trip() {
    for sample in samples() {
        let input = serde_json::to_string(&sample).unwrap();
        let output = convert(&input, Format::Json, Format::Json).unwrap();
        assert_eq!(parse_json(&output), sample);
    }
}

#[test]
fn test_yaml_round_trip() {
    for sample in samples() {
        let input = serde_json::to_string(&sample).unwrap();
        let yaml = convert(&input, Format::Json, Format::Yaml).unwrap();
        let back = convert(&yaml, Format::Yaml, Format::Json).unwrap();
        assert_eq!(parse_json(&back), sample, "via YAML:\n{}", yaml);
    }
}

/// Strings that look like YAML scalars keep their string type
#[test]
fn test_yaml_round_trip_ambiguous_strings() {
    let sample = json!({"a": "true", "b": "123", "c": "null", "d": "yes", "e": "", "f": "- item"});
    let input = serde_json::to_string(&sample).unwrap();
    let yaml = convert(&input, Format::Json, Format::Yaml).unwrap();
    let back = convert(&yaml, Format::Yaml, Format::Json).unwrap();
    assert_eq!(parse_json(&back), sample);
}

#[test]
fn test_javascript_round_trip() {
    for sample in samples() {
        let input = serde_json::to_string(&sample).unwrap();
        let js = convert(&input, Format::Json, Format::JavaScript).unwrap();
        assert!(js.starts_with("const data = "));
        assert!(js.ends_with(';'));
        let back = convert(&js, Format::JavaScript, Format::Json).unwrap();
        assert_eq!(parse_json(&back), sample, "via JavaScript:\n{}", js);
    }
}

#[test]
fn test_csv_round_trip() {
    let sample = json!([
        {"name": "John", "age": "25", "city": "New York"},
        {"name": "Jane", "age": "31", "city": "Paris, France"}
    ]);
    let input = serde_json::to_string(&sample).unwrap();
    let csv = convert(&input, Format::Json, Format::Csv).unwrap();
    let back = convert(&csv, Format::Csv, Format::Json).unwrap();
    assert_eq!(parse_json(&back), sample);
}

/// Numbers become strings after a CSV hop
#[test]
fn test_csv_round_trip_stringifies() {
    let csv = convert(r#"[{"n":1,"ok":true}]"#, Format::Json, Format::Csv).unwrap();
    let back = convert(&csv, Format::Csv, Format::Json).unwrap();
    assert_eq!(parse_json(&back), json!([{"n": "1", "ok": "true"}]));
}

/// A single engine serves independent requests without carrying state
#[test]
fn test_engine_reuse() {
    let engine = ConversionEngine::default();
    let first = engine.convert("a: 1", Format::Yaml, Format::Json).unwrap();
    assert!(engine.convert("{bad", Format::Json, Format::Yaml).is_err());
    let second = engine.convert("a: 1", Format::Yaml, Format::Json).unwrap();
    assert_eq!(first, second);
}

/// Whole-number floats read as integers from every source
#[test]
fn test_whole_floats_survive_javascript_round_trip() {
    let input = r#"{"a": 1.0, "b": 1e2, "c": -0.0, "d": [2.50, 3.0]}"#;
    let json_out = convert(input, Format::Json, Format::Json).unwrap();
    assert_eq!(json_out, "{\n  \"a\": 1,\n  \"b\": 100,\n  \"c\": 0,\n  \"d\": [\n    2.5,\n    3\n  ]\n}");

    let js = convert(input, Format::Json, Format::JavaScript).unwrap();
    let back = convert(&js, Format::JavaScript, Format::Json).unwrap();
    assert_eq!(parse_json(&back), parse_json(&json_out));

    let yaml = convert(input, Format::Json, Format::Yaml).unwrap();
    let back = convert(&yaml, Format::Yaml, Format::Json).unwrap();
    assert_eq!(back, json_out);
}

#[test]
fn test_csv_round_trip_empty_cells() {
    for sample in [json!([{"a": ""}]), json!([{"a": "x"}, {"a": ""}]), json!([{"a": "", "b": ""}])] {
        let input = serde_json::to_string(&sample).unwrap();
        let csv = convert(&input, Format::Json, Format::Csv).unwrap();
        let back = convert(&csv, Format::Csv, Format::Json).unwrap();
        assert_eq!(parse_json(&back), sample, "via CSV:\n{}", csv);
    }
}
