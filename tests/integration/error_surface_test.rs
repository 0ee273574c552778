//! Integration tests for the error messages shown in place of output

use assert_matches::assert_matches;
use dataconv::{convert, convert_by_tag, ConversionError, Format, ParseError, Stage};

#[test]
fn test_empty_input_every_pair() {
    for source in Format::ALL {
        for target in Format::ALL {
            for input in ["", "   ", "\n\t\n"] {
                let err = convert(input, source, target).unwrap_err();
                assert_matches!(&err, ConversionError::EmptyInput);
                assert_eq!(err.user_message(), "Please enter some data to convert");
            }
        }
    }
}

#[test]
fn test_unquoted_json_key() {
    let err = convert(r#"{name: "x"}"#, Format::Json, Format::Yaml).unwrap_err();
    assert_matches!(
        &err,
        ConversionError::Parse(ParseError { format: Format::Json, location: Some((1, _)), .. })
    );
    assert_eq!(err.stage(), Some(Stage::Parse));
    assert!(err.user_message().starts_with("Invalid JSON format: key must be a string"));
}

#[test]
fn test_parse_messages_name_the_format() {
    let cases = [
        ("{\"a\": }", Format::Json, "Invalid JSON format: "),
        ("{ a: b }", Format::JavaScript, "Invalid JavaScript format: "),
        ("class X {}", Format::TypeScript, "Invalid TypeScript format: "),
        ("a: [1, 2", Format::Yaml, "Invalid YAML format: "),
    ];
    for (input, format, prefix) in cases {
        let err = convert(input, format, Format::Json).unwrap_err();
        assert_eq!(err.format(), Some(format), "{}", input);
        assert!(
            err.to_string().starts_with(prefix),
            "{} produced {}",
            input,
            err
        );
    }
}

#[test]
fn test_generate_message_names_the_format() {
    let err = convert("[1, 2]", Format::Json, Format::Csv).unwrap_err();
    assert_eq!(err.stage(), Some(Stage::Generate));
    assert!(err.user_message().starts_with("Error converting to CSV: "));
}

#[test]
fn test_unsupported_tag() {
    let err = convert_by_tag("{}", "xml", "json").unwrap_err();
    assert_eq!(err.to_string(), "Unsupported format: xml");
    assert_eq!(err.stage(), None);
}

#[test]
fn test_javascript_is_never_executed() {
    let inputs = [
        "(function() { return 1 })()",
        "require('fs')",
        "{ a: 1 + 1 }",
        "new Date()",
    ];
    for input in inputs {
        let err = convert(input, Format::JavaScript, Format::Json).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::Parse), "{}", input);
    }
}
