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

use std::fmt::Display;
use std::fmt::Formatter;

/// The detailed reason of a DSON parse failure.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorCode {
    /// The input ended while a token, string, number or value was expected.
    InvalidEOF,
    ExpectedQuote(char),
    ExpectedSomeValue(char),
    UnexpectedCharacter(char),
    InvalidEscaped(char),
    InvalidOctalEscape(char),
    InvalidCodePoint(u32),
    InvalidNumberValue(String),
    NumberOutOfRange(String),
    UnexpectedKeyword {
        expected: &'static str,
        found: String,
    },
    /// A complete document was decoded but non-whitespace input remains.
    UnexpectedTrailingCharacters(String),
}

impl Display for ParseErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorCode::InvalidEOF => {
                write!(f, "unexpected end of input, expected more data")
            }
            ParseErrorCode::ExpectedQuote(c) => {
                write!(f, "expected quote character, found {c:?}")
            }
            ParseErrorCode::ExpectedSomeValue(c) => {
                write!(f, "invalid value start character {c:?}")
            }
            ParseErrorCode::UnexpectedCharacter(c) => write!(f, "unexpected character {c:?}"),
            ParseErrorCode::InvalidEscaped(c) => write!(f, "invalid escape character {c:?}"),
            ParseErrorCode::InvalidOctalEscape(c) => {
                write!(f, "invalid octal digit {c:?} in unicode escape")
            }
            ParseErrorCode::InvalidCodePoint(n) => {
                write!(f, "invalid unicode code point \\u{n:06o}")
            }
            ParseErrorCode::InvalidNumberValue(s) => write!(f, "invalid number {s:?}"),
            ParseErrorCode::NumberOutOfRange(s) => write!(f, "number out of range {s:?}"),
            ParseErrorCode::UnexpectedKeyword { expected, found } => {
                write!(f, "expected {expected}, found {found:?}")
            }
            ParseErrorCode::UnexpectedTrailingCharacters(s) => {
                write!(f, "trailing characters {s:?}")
            }
        }
    }
}

/// High level classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input exhausted while more data was expected.
    UnexpectedEnd,
    /// Malformed input.
    Syntax,
    /// A complete document followed by extra input.
    TrailingData,
    /// The bytes could not be turned into text.
    Encoding,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A parse failure at the given byte offset of the input text.
    Syntax(ParseErrorCode, usize),
    UnknownEncoding(String),
    InvalidEncoding(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Syntax(code, pos) => write!(f, "parse error at position {pos}: {code}"),
            Error::UnknownEncoding(label) => write!(f, "unknown encoding {label:?}"),
            Error::InvalidEncoding(name) => write!(f, "input is not valid {name}"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax(ParseErrorCode::InvalidEOF, _) => ErrorKind::UnexpectedEnd,
            Error::Syntax(ParseErrorCode::UnexpectedTrailingCharacters(_), _) => {
                ErrorKind::TrailingData
            }
            Error::Syntax(_, _) => ErrorKind::Syntax,
            Error::UnknownEncoding(_) | Error::InvalidEncoding(_) => ErrorKind::Encoding,
        }
    }

    /// Byte offset in the input text where the failure was detected.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Syntax(_, pos) => Some(*pos),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&ParseErrorCode> {
        match self {
            Error::Syntax(code, _) => Some(code),
            _ => None,
        }
    }

    /// Returns `true` if more input would be needed to finish the document.
    pub fn is_eof(&self) -> bool {
        self.kind() == ErrorKind::UnexpectedEnd
    }
}

pub type Result<T> = std::result::Result<T, Error>;
