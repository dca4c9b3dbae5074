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

use dson::{decode_bytes, from_slice, Error, ErrorKind, Value};

fn utf16le(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
}

#[test]
fn test_decode_utf8_bytes() {
    let bytes = br#"such "doge" is so "wow" and yes many wow"#;
    let value = from_slice(bytes).unwrap();
    assert_eq!(value.to_string(), r#"{"doge":["wow",true]}"#);

    let items = value.get("doge").and_then(Value::as_array).unwrap();
    assert!(matches!(&items[0], Value::String(Cow::Borrowed("wow"))));

    let value = decode_bytes("so \"福島県\" many".as_bytes(), "UTF8").unwrap();
    assert_eq!(value.to_string(), r#"["福島県"]"#);
}

#[test]
fn test_decode_single_byte_encodings() {
    let bytes = b"such \"caf\xe9\" is 17 wow";
    let value = decode_bytes(bytes, "latin1").unwrap();
    assert_eq!(value.get("café"), Some(&Value::from(15_i64)));

    let value = decode_bytes(b"so \"doge\" many", "ascii").unwrap();
    assert_eq!(value.to_string(), r#"["doge"]"#);
}

#[test]
fn test_decode_utf16_bytes() {
    let text = r#"such "shibe" is "柴犬" wow"#;
    let bytes = utf16le(text);
    let value = decode_bytes(&bytes, "utf-16le").unwrap();
    assert_eq!(value.get("shibe").and_then(Value::as_str), Some("柴犬"));
    assert!(matches!(value, Value::Object(_)));
}

#[test]
fn test_decode_bytes_errors() {
    let err = decode_bytes(b"so many", "doge-8").unwrap_err();
    assert_eq!(err, Error::UnknownEncoding("doge-8".to_string()));
    assert_eq!(err.kind(), ErrorKind::Encoding);
    assert_eq!(err.to_string(), "unknown encoding \"doge-8\"");

    let err = from_slice(b"so \"\xff\" many").unwrap_err();
    assert_eq!(err, Error::InvalidEncoding("UTF-8"));
    assert_eq!(err.to_string(), "input is not valid UTF-8");

    // odd number of bytes is malformed utf-16
    let mut bytes = utf16le("so many");
    bytes.push(b'x');
    let err = decode_bytes(&bytes, "utf-16le").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Encoding);
}

#[test]
fn test_decode_bytes_syntax_errors() {
    let err = from_slice(b"such 1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "parse error at position 5: expected quote character, found '1'"
    );

    let err = decode_bytes(&utf16le("so 1 many such wow"), "utf-16le").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TrailingData);
}
