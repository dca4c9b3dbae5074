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

use super::constants::*;
use super::cursor::Cursor;
use super::error::Error;
use super::error::ParseErrorCode;
use super::error::Result;
use super::number::parse_octal_number;
use super::number::Number;

/// Hand-written scanner producing the lexical units of DSON text.
pub(crate) struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(text: &'a str) -> Lexer<'a> {
        Self {
            cursor: Cursor::new(text),
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Result<char> {
        self.cursor.peek()
    }

    #[inline]
    pub(crate) fn eof(&self) -> bool {
        self.cursor.eof()
    }

    pub(crate) fn remainder(&self) -> &'a str {
        self.cursor.remainder()
    }

    pub(crate) fn error(&self, code: ParseErrorCode) -> Error {
        self.cursor.error(code)
    }

    #[inline]
    pub(crate) fn strip_whitespace(&mut self) {
        while let Ok(c) = self.cursor.peek() {
            if !is_whitespace(c) {
                break;
            }
            self.cursor.step(c);
        }
    }

    /// Read a run of `[a-z,.!?]` characters, discarding leading whitespace.
    ///
    /// The run must end at whitespace, a quote or the end of input.
    pub(crate) fn read_token(&mut self) -> Result<&'a str> {
        self.strip_whitespace();
        self.cursor.peek()?;

        let start = self.cursor.position();
        while let Ok(c) = self.cursor.peek() {
            if !is_token_char(c) {
                break;
            }
            self.cursor.step(c);
        }

        if let Ok(c) = self.cursor.peek() {
            if !is_whitespace(c) && c != QU || self.cursor.position() == start {
                return Err(self.error(ParseErrorCode::UnexpectedCharacter(c)));
            }
        }
        Ok(self.cursor.slice(start))
    }

    /// Read a quoted string, discarding leading whitespace.
    ///
    /// Strings without escapes are borrowed from the input.
    pub(crate) fn read_string(&mut self) -> Result<Cow<'a, str>> {
        self.strip_whitespace();
        let c = self.cursor.peek()?;
        if c != QU {
            return Err(self.error(ParseErrorCode::ExpectedQuote(c)));
        }
        self.cursor.step(c);

        let start = self.cursor.position();
        let mut owned: Option<String> = None;
        loop {
            let c = self.cursor.peek()?;
            match c {
                QU => {
                    let raw = self.cursor.slice(start);
                    self.cursor.step(c);
                    return Ok(match owned {
                        Some(s) => Cow::Owned(s),
                        None => Cow::Borrowed(raw),
                    });
                }
                BS => {
                    let buf = owned.get_or_insert_with(|| self.cursor.slice(start).to_string());
                    self.cursor.step(c);
                    let escaped = self.read_escape()?;
                    buf.push(escaped);
                }
                _ => {
                    self.cursor.step(c);
                    if let Some(buf) = owned.as_mut() {
                        buf.push(c);
                    }
                }
            }
        }
    }

    fn read_escape(&mut self) -> Result<char> {
        let c = self.cursor.consume()?;
        match c {
            '\\' => Ok(BS),
            '"' => Ok(QU),
            '/' => Ok(SD),
            'b' => Ok(BB),
            'f' => Ok(FF),
            'n' => Ok(NN),
            'r' => Ok(RR),
            't' => Ok(TT),
            'u' => self.read_octal_escape(),
            other => Err(self.error(ParseErrorCode::InvalidEscaped(other))),
        }
    }

    // \uNNNNNN, six octal digits naming a code point.
    fn read_octal_escape(&mut self) -> Result<char> {
        let mut code = 0_u32;
        for _ in 0..OCTAL_UNICODE_LEN {
            let c = self.cursor.peek()?;
            let Some(digit) = c.to_digit(8) else {
                return Err(self.error(ParseErrorCode::InvalidOctalEscape(c)));
            };
            self.cursor.step(c);
            code = code * 8 + digit;
        }
        char::from_u32(code).ok_or_else(|| self.error(ParseErrorCode::InvalidCodePoint(code)))
    }

    /// Read an octal number literal, discarding leading whitespace.
    ///
    /// A `.` only belongs to the literal when a digit follows it, so a number
    /// directly followed by a field separator still scans.
    pub(crate) fn read_number(&mut self) -> Result<Number> {
        self.strip_whitespace();
        self.cursor.peek()?;

        let start = self.cursor.position();
        while let Ok(c) = self.cursor.peek() {
            if !is_number_char(c) {
                break;
            }
            if c == '.' && !self.cursor.remainder()[1..].starts_with(|n: char| n.is_ascii_digit())
            {
                break;
            }
            self.cursor.step(c);
        }

        let literal = self.cursor.slice(start);
        parse_octal_number(literal).map_err(|code| self.error(code))
    }
}
