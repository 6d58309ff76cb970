//! Integration tests for the parser proper.
//!
//! Organized from simplest to most complex: scalars and kinds, escapes,
//! malformed input, then end-to-end parse/mutate/serialize flows.

use ljson_core::{parse, parse_file, ErrorKind, ValueType};
use pretty_assertions::assert_eq;

// =============================================================================
// Well-formed documents
// =============================================================================

#[test]
fn parses_simple_document() {
    let node = parse(r#"{"name": "cat", "age": 5, "smol": true}"#).unwrap();

    assert!(node.is_object());
    assert!(node.at("name").is_value());
    assert!(node.at("name").is_string());
    assert_eq!(node.at("name").as_value().as_string(), "cat");
    assert_eq!(node.at("name").as_string(), "cat");

    assert!(node.at("age").is_integer());
    assert_eq!(node.at("age").as_integer(), 5);

    assert!(node.at("smol").is_boolean());
    assert_eq!(node.at("smol").as_boolean(), true);
    assert!(node.at("smol").as_value().try_as_boolean().is_ok());
    assert!(node.at("smol").as_value().try_as_number().is_err());
    assert!(node.at("smol").as_value().try_as_string().is_err());
    assert!(node.at("smol").as_value().try_as_null().is_err());
}

#[test]
fn object_iteration_kinds_and_text() {
    let node = parse(r#"{"name": "cat", "age": 5, "smol": true}"#).unwrap();
    let expected = [
        ("age", "5", ValueType::Integer),
        ("name", "cat", ValueType::String),
        ("smol", "true", ValueType::Boolean),
    ];

    for ((key, value), (want_key, want_text, want_type)) in
        node.as_object().iter().zip(expected)
    {
        assert_eq!(key, want_key);
        assert!(value.is_value());
        assert_eq!(value.as_value().stringify(), want_text);
        assert_eq!(value.as_value().value_type(), want_type);
    }
}

#[test]
fn array_iteration_kinds() {
    let node = parse(
        r#"
        {
            "array": [
                "meow",
                "hi",
                5,
                5.0,
                true,
                null,
            ]
        }
        "#,
    )
    .unwrap();

    assert!(node.contains("array"));
    let array = node.at("array");
    assert!(array.is_array());

    let expected = [
        ("meow", ValueType::String),
        ("hi", ValueType::String),
        ("5", ValueType::Integer),
        ("5.0", ValueType::Double),
        ("true", ValueType::Boolean),
        ("null", ValueType::Null),
    ];
    assert_eq!(array.as_array().len(), expected.len());
    for (value, (text, kind)) in array.as_array().iter().zip(expected) {
        assert!(value.is_value());
        assert_eq!(value.as_value().stringify(), text);
        assert_eq!(value.as_value().value_type(), kind);
    }
}

#[test]
fn number_classification() {
    let node = parse(r#"{"i": 5, "d0": 5.0, "d7": 5.7}"#).unwrap();
    assert_eq!(node.at("i").as_value().value_type(), ValueType::Integer);
    assert_eq!(node.at("d0").as_value().value_type(), ValueType::Double);
    assert_eq!(node.at("d7").as_value().value_type(), ValueType::Double);
    assert_eq!(node.at("d7").as_double(), 5.7);

    let err = parse(r#"{"age":3 5}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParsingErrorWrongType);
}

#[test]
fn escapes_parse_and_round_trip() {
    let node = parse(r#"{"na\rm\be\f": "c\tat", "k\ney": "val\"ue"}"#).unwrap();

    assert_eq!(
        node.dump_to_string(),
        "{\n    \"k\\ney\": \"val\\\"ue\",\n    \"na\\rm\\be\\f\": \"c\\tat\"\n}",
    );
}

#[test]
fn unicode_escape_passes_through() {
    let node = parse("{\"u\": \"snow\\u2603man\"}").unwrap();
    assert_eq!(node.at("u").as_string(), "snow\\u2603man");
}

#[test]
fn compact_document_without_spaces() {
    let node = parse(r#"{"name":"cat","age":5,"smol":true,"key":null}"#).unwrap();
    assert_eq!(node.as_object().len(), 4);
    assert!(node.at("key").is_null());
}

#[test]
fn multibyte_strings_survive() {
    let node = parse(r#"{"emoji": "cät 🐈", "кот": "kot"}"#).unwrap();
    assert_eq!(node.at("emoji").as_string(), "cät 🐈");
    assert_eq!(node.at("кот").as_string(), "kot");
}

// =============================================================================
// Malformed documents
// =============================================================================

#[test]
fn malformed_inputs_are_rejected() {
    for input in [
        "{invalid}",
        "{{}",
        r#"{"name":}"#,
        r#"{"age":3 5}"#,
        r#"{"smol":tru e}"#,
        r#"{""key":nu ll}"#,
    ] {
        let result = parse(input);
        assert!(result.is_err(), "accepted malformed input: {input}");
    }
}

#[test]
fn bad_escape_is_a_parsing_error() {
    let err = parse(r#"{"esc": "a\xb"}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParsingError);
    assert!(err.message().contains("escape sequence"), "{}", err.message());
}

#[test]
fn unknown_literal_reports_token_and_line() {
    let err = parse(r#"{"smol": truth}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParsingErrorWrongType);
    assert!(err.message().contains("truth"), "{}", err.message());
}

#[test]
fn syntax_error_names_the_expectation() {
    let err = parse("{invalid}").unwrap_err();
    assert!(err.message().contains("expected"), "{}", err.message());
    assert!(err.message().contains("found"), "{}", err.message());
}

#[test]
fn double_colon_is_rejected() {
    let err = parse(r#"{"a":: 1}"#).unwrap_err();
    assert!(err.message().contains("two consecutive colons"), "{}", err.message());
}

// =============================================================================
// End to end
// =============================================================================

#[test]
fn parse_mutate_serialize() {
    let node = parse(r#"{"name": "cat", "age": 5, "smol": true}"#).unwrap();

    node.at("age").set(8);
    node.at("name").set("new_cat");
    node.at("smol").set(ljson_core::Null);

    assert_eq!(node.at("age").as_integer(), 8);
    assert_eq!(node.at("name").as_string(), "new_cat");
    assert!(node.at("smol").is_null());

    let text = node.dump_to_string();
    assert!(text.contains("\"age\": 8"));
    assert!(text.contains("\"name\": \"new_cat\""));
    assert!(text.contains("\"smol\": null"));
}

#[test]
fn round_trip_preserves_structure() {
    let original = parse(r#"{"a": [1, 2.5, "three"], "b": {"c": null, "d": false}}"#).unwrap();
    let reparsed = parse(&original.dump_to_string()).unwrap();
    assert_eq!(reparsed, original);
}

// =============================================================================
// Files
// =============================================================================

fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("ljson_{}_{}.json", name, std::process::id()))
}

#[test]
fn file_round_trip() {
    let path = scratch_path("roundtrip");
    let node = parse(r#"{"name": "cat", "lives": 9}"#).unwrap();
    node.dump_to_file(&path).unwrap();

    let reparsed = parse_file(&path).unwrap();
    assert_eq!(reparsed, node);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_is_a_filesystem_error() {
    let err = parse_file("/nonexistent/ljson/input.json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FilesystemError);
    assert!(err.message().contains("couldn't open"), "{}", err.message());
}
