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

use dson::{decode_text, Value};
use serde_json::json;
use serde_json::Value as JsonValue;

#[test]
fn test_value_serialize() {
    let tests = [
        r#"such "foo" is "bar". "doge" is "shibe" wow"#,
        r#"such "foo" is such "shiba" is "inu", "doge" is yes wow wow"#,
        r#"so "tab\tquote\"" and empty also no and -1.4 also 1234 many"#,
        r#"such "z" is 1 ! "a" is so such wow and so many many wow"#,
    ];
    for s in tests {
        let value = decode_text(s).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), value.to_string(), "{s}");
    }
}

#[test]
fn test_value_into_json_value() {
    let value = decode_text(
        r#"such "foo" is so "bar" also "baz" and "fizzbuzz" many , "n" is 1.4, "e" is empty wow"#,
    )
    .unwrap();
    let json = JsonValue::from(value);
    assert_eq!(
        json,
        json!({"foo": ["bar", "baz", "fizzbuzz"], "n": 1.5, "e": null})
    );
}

#[test]
fn test_json_value_into_value() {
    let json = json!({"doge": [1, 2.5, "wow", true, null]});
    let value = Value::from(&json);
    let decoded = decode_text(r#"such "doge" is so 1 and 2.4 and "wow" and yes and empty many wow"#)
        .unwrap();
    assert_eq!(value, decoded);
    assert_eq!(value.to_string(), json.to_string());
}
