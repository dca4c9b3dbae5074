// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use dson::{decode_text, from_str, ErrorKind, Number, Object, Value};

fn test_decode_err(errors: &[(&str, &str)]) {
    for &(s, err) in errors {
        let res = decode_text(s);
        assert!(res.is_err(), "{s}");
        assert_eq!(res.err().unwrap().to_string(), err, "{s}");
    }
}

fn test_decode_ok(tests: Vec<(&str, Value<'_>)>) {
    for (s, val) in tests {
        assert_eq!(decode_text(s).unwrap(), val, "{s}");
    }
}

fn test_decode_kind(errors: &[&str], kind: ErrorKind) {
    for s in errors {
        let res = decode_text(s);
        assert!(res.is_err(), "{s}");
        assert_eq!(res.err().unwrap().kind(), kind, "{s}");
    }
}

fn string(s: &str) -> Value<'_> {
    Value::String(Cow::Borrowed(s))
}

fn int(v: i64) -> Value<'static> {
    Value::Number(Number::Int64(v))
}

fn object<'a>(fields: Vec<(&str, Value<'a>)>) -> Value<'a> {
    let mut obj = Object::new();
    for (k, v) in fields {
        obj.insert(k.to_string(), v);
    }
    Value::Object(obj)
}

#[test]
fn test_decode_scalars() {
    test_decode_ok(vec![
        ("10", int(8)),
        ("\"very\"", string("very")),
        ("empty", Value::Null),
        ("yes", Value::Bool(true)),
        ("no", Value::Bool(false)),
        ("  -17  ", int(-15)),
        ("\n\t\x0B\r 0", int(0)),
    ]);
}

#[test]
fn test_decode_objects() {
    test_decode_ok(vec![
        (
            r#"such "foo" is "bar". "doge" is "shibe" wow"#,
            object(vec![("foo", string("bar")), ("doge", string("shibe"))]),
        ),
        (
            r#"    such "asdf" is "derp"! "andy\t" is "lol" wow   "#,
            object(vec![("asdf", string("derp")), ("andy\t", string("lol"))]),
        ),
        (
            r#"    such "pradeep" is "yo man", "doge" is so 1 and 2 also 3 many wow   "#,
            object(vec![
                ("pradeep", string("yo man")),
                ("doge", Value::Array(vec![int(1), int(2), int(3)])),
            ]),
        ),
        (
            r#"such "a" is 1 ? "b" is empty . "c" is no , "d" is yes ! "e" is "" wow"#,
            object(vec![
                ("a", int(1)),
                ("b", Value::Null),
                ("c", Value::Bool(false)),
                ("d", Value::Bool(true)),
                ("e", string("")),
            ]),
        ),
        (
            r#"such "" is such "" is so many wow wow"#,
            object(vec![("", object(vec![("", Value::Array(vec![]))]))]),
        ),
    ]);
}

#[test]
fn test_decode_repeated_field_last_wins() {
    let value = decode_text(r#"such "doge" is 1, "shibe" is 2, "doge" is 3 wow"#).unwrap();
    assert_eq!(value, object(vec![("doge", int(3)), ("shibe", int(2))]));
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["doge", "shibe"]);
}

#[test]
fn test_decode_field_order() {
    let value = decode_text(r#"such "z" is 1. "a" is 2. "m" is 3 wow"#).unwrap();
    assert_eq!(value.to_string(), r#"{"z":1,"a":2,"m":3}"#);
}

#[test]
fn test_decode_arrays() {
    test_decode_ok(vec![
        (
            r#"so so "herp" also so "goddamn" many many and "asdf" and "zcat" also 123 and so "asdf" many many"#,
            Value::Array(vec![
                Value::Array(vec![
                    string("herp"),
                    Value::Array(vec![string("goddamn")]),
                ]),
                string("asdf"),
                string("zcat"),
                int(83),
                Value::Array(vec![string("asdf")]),
            ]),
        ),
        ("   so 123       many     ", Value::Array(vec![int(83)])),
        (
            r#"so such "a" is 1 wow also such wow many"#,
            Value::Array(vec![object(vec![("a", int(1))]), object(vec![])]),
        ),
        // `many` directly after a joiner closes the array
        ("so 1 and many", Value::Array(vec![int(1)])),
    ]);
}

#[test]
fn test_decode_empty_containers() {
    test_decode_ok(vec![
        ("such wow", object(vec![])),
        ("     such   wow   ", object(vec![])),
        (r#"such "empty" is such wow wow"#, object(vec![("empty", object(vec![]))])),
        ("so many", Value::Array(vec![])),
        ("so so many many", Value::Array(vec![Value::Array(vec![])])),
    ]);
}

#[test]
fn test_decode_unicode_escape() {
    test_decode_ok(vec![
        (r#""\u000142""#, string("b")),
        (r#""\u074617\u056366\u073414""#, string("福島県")),
        (
            r#"such "\u074617" is "doge" wow"#,
            object(vec![("福", string("doge"))]),
        ),
    ]);
}

#[test]
fn test_decode_borrows_plain_strings() {
    let text = String::from(r#"so "plain" and "esc\naped" many"#);
    let value = decode_text(&text).unwrap();
    let items = value.as_array().unwrap();
    assert!(matches!(&items[0], Value::String(Cow::Borrowed("plain"))));
    assert!(matches!(&items[1], Value::String(Cow::Owned(s)) if s == "esc\naped"));
}

#[test]
fn test_decode_is_deterministic() {
    let text = r#"such "foo" is so "bar" also "baz" and "fizzbuzz" many wow"#;
    let first = decode_text(text).unwrap();
    let second = from_str(&text.to_string()).unwrap().into_owned();
    assert_eq!(first, second);
}

#[test]
fn test_decode_eof_errors() {
    test_decode_kind(
        &[
            "",
            "   ",
            "so \"shib",
            "so",
            "so \"shiba\"",
            "so \"shiba\" and",
            "so \"shiba\" and 1",
            "such",
            "such \"doge\"",
            "such \"doge\" is",
            "such \"doge\" is \"very\"",
            "such \"doge\" is so",
            "\"wow \\u00",
        ],
        ErrorKind::UnexpectedEnd,
    );

    test_decode_err(&[
        (
            "so",
            "parse error at position 2: unexpected end of input, expected more data",
        ),
        (
            "so \"shib",
            "parse error at position 8: unexpected end of input, expected more data",
        ),
        (
            "such \"doge\" is 1",
            "parse error at position 16: unexpected end of input, expected more data",
        ),
    ]);
}

#[test]
fn test_decode_syntax_errors() {
    test_decode_kind(
        &[
            "such wer is 123 wow",
            "such 123",
            "such 123 is 123 wow",
            "such \"doge\" is many",
            "so 43very many",
            "so so \"herp\" also so \"goddamn\" many many \"asdf\" and \"zcat\" many",
            "so \"a\" \"b\" many",
            "so \"bad \\q\" many",
            "so 8 many",
            "so 1 and2 many",
            "Such wow",
            "{}",
            "so 1very2Very3 many",
        ],
        ErrorKind::Syntax,
    );

    test_decode_err(&[
        (
            "such 123",
            "parse error at position 5: expected quote character, found '1'",
        ),
        (
            "so 43very many",
            "parse error at position 9: invalid number \"43very\"",
        ),
        (
            "such \"doge\" is many",
            "parse error at position 19: expected 'such', 'so' or a value, found \"many\"",
        ),
        (
            "so \"a\" \"b\" many",
            "parse error at position 7: unexpected character '\"'",
        ),
        (
            "so 1 and2 many",
            "parse error at position 8: unexpected character '2'",
        ),
        ("{}", "parse error at position 0: invalid value start character '{'"),
        (
            "so 1 many, 2",
            "parse error at position 10: expected 'and', 'also' or 'many', found \"many,\"",
        ),
    ]);
}

#[test]
fn test_decode_trailing_data_errors() {
    let invalid_document_list = [
        ("so 1234 many such wow", "such wow"),
        ("so 1234 many so many", "so many"),
        ("so 1234 many 1234", "1234"),
        ("such \"wow\" is 123 wow 1234", "1234"),
        ("such \"wow\" is 123 wow so many", "so many"),
        ("such \"wow\" is 123 wow \"hello\"", "\"hello\""),
        ("1234 so many", "so many"),
        ("\"such\" such wow", "such wow"),
        ("yes such wow", "such wow"),
        ("empty such \"shibe\" is \"inu\" wow  ", "such \"shibe\" is \"inu\" wow  "),
    ];
    for (document, rest) in invalid_document_list {
        let err = decode_text(document).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TrailingData, "{document}");
        assert!(err.to_string().contains(&format!("{rest:?}")), "{document}: {err}");
        assert_eq!(err.position(), Some(document.len() - rest.len()), "{document}");
    }

    test_decode_err(&[(
        "such wow wow",
        "parse error at position 9: trailing characters \"wow\"",
    )]);
}
