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

use encoding_rs::Encoding;

use super::decoder::Decoder;
use super::error::Error;
use super::error::Result;
use super::value::Value;

/// Decode DSON text into a [`Value`].
///
/// Strings without escape sequences borrow from `text`.
///
/// ```
/// use dson::{decode_text, Value};
///
/// let value = decode_text(r#"such "doge" is so 12 and yes many wow"#).unwrap();
/// assert_eq!(value.to_string(), r#"{"doge":[10,true]}"#);
/// ```
pub fn decode_text(text: &str) -> Result<Value<'_>> {
    Decoder::new(text).decode()
}

/// Alias of [`decode_text`].
pub fn from_str(text: &str) -> Result<Value<'_>> {
    decode_text(text)
}

/// Decode DSON from bytes in the encoding named by `encoding`.
///
/// `encoding` is a WHATWG encoding label such as `"utf-8"`, `"latin1"` or
/// `"utf-16le"`. Malformed input is rejected rather than replaced.
pub fn decode_bytes<'a>(bytes: &'a [u8], encoding: &str) -> Result<Value<'a>> {
    let Some(encoding) = Encoding::for_label(encoding.as_bytes()) else {
        return Err(Error::UnknownEncoding(encoding.to_string()));
    };
    match encoding.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(Cow::Borrowed(text)) => decode_text(text),
        Some(Cow::Owned(text)) => decode_text(&text).map(Value::into_owned),
        None => Err(Error::InvalidEncoding(encoding.name())),
    }
}

/// Decode UTF-8 encoded DSON bytes.
pub fn from_slice(bytes: &[u8]) -> Result<Value<'_>> {
    decode_bytes(bytes, "utf-8")
}
