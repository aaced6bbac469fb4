// SPDX-License-Identifier: Apache-2.0

// Rendering trees back to text and parsing the text again

use jsontree::{parse, parse_slice, stringify, Member, Value};
use test_log::test;

fn round_trip(json: &str) {
    let mut first = Value::new();
    parse(&mut first, json).unwrap_or_else(|e| panic!("{json:?} failed: {e}"));
    let text = stringify(&first);
    assert_eq!(
        text,
        json.as_bytes(),
        "compact input should render unchanged"
    );

    let mut second = Value::new();
    parse_slice(&mut second, &text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_literals() {
    round_trip("null");
    round_trip("false");
    round_trip("true");
}

#[test]
fn test_numbers() {
    for json in [
        "0",
        "-0",
        "1",
        "-1",
        "1.5",
        "-1.5",
        "3.25",
        "1.0000000000000002",
        "5e-324",
        "2.2250738585072014e-308",
        "-2.2250738585072014e-308",
        "1.7976931348623157e308",
        "1e-7",
        "1e20",
        "123456789012",
    ] {
        round_trip(json);
    }
}

#[test]
fn test_number_forms_normalize() {
    let mut value = Value::new();
    for (json, rendered) in [
        ("1E10", "10000000000"),
        ("1.234E+10", "12340000000"),
        ("1.234E-10", "1.234e-10"),
        ("0.5e1", "5"),
        ("-0.0", "-0"),
        ("1e-10000", "0"),
    ] {
        parse(&mut value, json).unwrap();
        assert_eq!(value.to_string(), rendered, "input {json}");
    }
}

#[test]
fn test_strings() {
    round_trip(r#""""#);
    round_trip(r#""Hello""#);
    round_trip(r#""Hello\nWorld""#);
    round_trip(r#""\" \\ / \b \f \n \r \t""#);
    round_trip(r#""Hello\u0000World""#);
    round_trip(r#""\u001F\u0001""#);
}

#[test]
fn test_escapes_normalize() {
    let mut value = Value::new();
    parse(&mut value, r#""\/\u0041\u00e9\t""#).unwrap();
    assert_eq!(value.to_string(), "\"/A\u{e9}\\t\"");
}

#[test]
fn test_containers() {
    round_trip("[]");
    round_trip("{}");
    round_trip("[null,false,true,123,\"abc\",[1,2,3]]");
    round_trip(r#"{"n":null,"f":false,"t":true,"i":123,"s":"abc","a":[1,2,3],"o":{"1":1,"2":2,"3":3}}"#);
    round_trip(r#"{"a":1,"a":2}"#);
    round_trip(r#"[[[]],{"":{"":[]}}]"#);
}

#[test]
fn test_built_tree_round_trips() {
    let built = Value::Object(vec![
        Member::new("key\twith\u{1}controls", Value::from("v\"al\\ue")),
        Member::new(
            "nested",
            Value::Array(vec![Value::Number(-0.25), Value::Null, Value::from(true)]),
        ),
    ]);
    let text = built.stringify();
    let mut parsed = Value::new();
    parse_slice(&mut parsed, &text).unwrap();
    assert_eq!(parsed, built);
}

#[test]
fn test_non_finite_numbers_render_as_null() {
    let value = Value::Array(vec![Value::Number(f64::NAN), Value::Number(f64::NEG_INFINITY)]);
    assert_eq!(stringify(&value), b"[null,null]");
}
