//! Boundary tests: chunk splitting and end of input.
//!
//! The machine must produce the same tree no matter how the physical
//! lines of a document are grouped into `feed` calls, and must report
//! truncated input instead of silently accepting it.

mod common;

use common::{load_fixtures_by_name, Expect, Gen};
use ljson_core::{parse, Parser};

/// Feed `lines` to a fresh parser, grouping consecutive lines into single
/// feed calls as `grouping` dictates.
fn parse_grouped(lines: &[&str], grouping: &[usize]) -> Result<ljson_core::Node, ljson_core::Error> {
    let mut parser = Parser::new();
    let mut index = 0;
    for &group in grouping {
        let group = group.max(1);
        let end = (index + group).min(lines.len());
        let joined = lines[index..end].concat();
        parser.feed(&joined)?;
        index = end;
        if index == lines.len() {
            break;
        }
    }
    while index < lines.len() {
        parser.feed(lines[index])?;
        index += 1;
    }
    parser.finish()
}

#[test]
fn line_grouping_does_not_change_the_tree() {
    let mut gen = Gen::from_env_or_random();
    let mut cases = load_fixtures_by_name("objects");
    cases.extend(load_fixtures_by_name("arrays"));

    for case in cases.iter().filter(|c| c.expect == Expect::Ok) {
        let canonical = parse(&case.json)
            .unwrap_or_else(|e| panic!("{}: canonical parse failed: {e}", case.id));

        let pretty = canonical.dump_to_string();
        let lines: Vec<&str> = pretty.lines().collect();

        // line-by-line
        let fed = parse_grouped(&lines, &[])
            .unwrap_or_else(|e| panic!("{}: line-by-line feed failed: {e}", case.id));
        assert_eq!(fed, canonical, "{}: line-by-line tree differs", case.id);

        // random groupings
        for _ in 0..3 {
            let grouping: Vec<usize> =
                (0..lines.len()).map(|_| 1 + gen.geometric(0.5)).collect();
            let fed = parse_grouped(&lines, &grouping).unwrap_or_else(|e| {
                panic!(
                    "{}: grouped feed failed: {e} (seed {}, grouping {:?})",
                    case.id, gen.seed, grouping,
                )
            });
            assert_eq!(
                fed, canonical,
                "{}: grouped tree differs (seed {})",
                case.id, gen.seed,
            );
        }
    }
}

#[test]
fn string_value_spans_feed_boundaries() {
    let mut parser = Parser::new();
    parser.feed(r#"{"a": "val"#).unwrap();
    parser.feed(r#"ue"}"#).unwrap();
    let node = parser.finish().unwrap();
    assert_eq!(node.at("a").as_string(), "value");
}

#[test]
fn truncated_prefixes_never_panic_and_never_succeed() {
    let full = r#"{"a": [1, {"b": "two"}], "c": null}"#;
    for end in full.char_indices().map(|(i, _)| i).skip(1) {
        let prefix = &full[..end];
        if let Ok(node) = parse(prefix) {
            panic!("prefix {prefix:?} parsed to {}", node.dump_to_string());
        }
    }
    assert!(parse(full).is_ok());
}

#[test]
fn truncation_errors_name_the_open_structure() {
    let err = parse(r#"{"a": [1, 2"#).unwrap_err();
    assert!(err.message().contains("array"), "{}", err.message());

    let err = parse(r#"{"a": {"b": 1"#).unwrap_err();
    assert!(err.message().contains("object"), "{}", err.message());

    let err = parse(r#"{"key"#).unwrap_err();
    assert!(err.message().contains("key"), "{}", err.message());
}

#[test]
fn windows_line_endings() {
    let node = parse("{\r\n  \"a\": 1,\r\n  \"b\": 2\r\n}\r\n").unwrap();
    assert_eq!(node.at("a").as_integer(), 1);
    assert_eq!(node.at("b").as_integer(), 2);
}
