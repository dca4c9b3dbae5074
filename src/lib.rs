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

//! `dson` decodes [DSON](https://dogeon.xyz), the Doge Serialized Object Notation, into a dynamically typed value tree.
//!
//! DSON is JSON spelled the doge way: objects are written `such ... wow`, arrays `so ... many`,
//! field names are followed by `is`, and numbers are octal.
//!
//! ```text
//! such "foo" is "bar". "doge" is so 12 also 1.4very2 many wow
//! ```
//!
//! decodes to
//!
//! ```text
//! {"foo":"bar","doge":[10,96.0]}
//! ```
//!
//! ## Grammar
//!
//! - `such` opens an object, `wow` closes it. Fields are `"name" is <value>`, separated by any of `,` `.` `!` `?`.
//! - `so` opens an array, `many` closes it. Elements are separated by `and` or `also`.
//! - `yes`, `no` and `empty` are `true`, `false` and `null`.
//! - Numbers are octal: `-?(0|[1-7][0-7]*)(\.[0-7]+)?((very|VERY)[+-]?[0-7]+)?`, where `very` scales the value by a power of eight.
//!   Literals with a fraction or exponent decode to floats.
//! - Strings use JSON escapes, except that `\u` takes six octal digits.
//!
//! ## Decoding
//!
//! The decoder is a single pass state machine with an explicit nesting stack. Errors carry the byte offset where they
//! were detected and abort the decode; there is no partial result.

#![allow(clippy::uninlined_format_args)]

mod constants;
mod cursor;
mod decoder;
mod error;
mod from;
mod lexer;
mod number;
mod parser;
mod reader;
mod value;

pub use error::Error;
pub use error::ErrorKind;
pub use error::ParseErrorCode;
pub use error::Result;
#[allow(unused_imports)]
pub use from::*;
pub use number::Number;
pub use parser::decode_bytes;
pub use parser::decode_text;
pub use parser::from_slice;
pub use parser::from_str;
pub use value::*;
