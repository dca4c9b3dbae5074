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

use super::error::Error;
use super::error::ParseErrorCode;
use super::error::Result;

/// A read-only view over the input text with a monotonic byte position.
///
/// The position always sits on a char boundary and never exceeds the length
/// of the text.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Cursor<'a> {
        Self { text, pos: 0 }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Result<char> {
        match self.text[self.pos..].chars().next() {
            Some(c) => Ok(c),
            None => Err(self.error(ParseErrorCode::InvalidEOF)),
        }
    }

    #[inline]
    pub(crate) fn consume(&mut self) -> Result<char> {
        let c = self.peek()?;
        self.step(c);
        Ok(c)
    }

    /// Advances past `c`, which must be the char returned by the last `peek`.
    #[inline]
    pub(crate) fn step(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Returns the text consumed since `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is past the current position.
    pub(crate) fn slice(&self, from: usize) -> &'a str {
        assert!(
            from <= self.pos,
            "slice position {from} cannot exceed current position {}",
            self.pos
        );
        &self.text[from..self.pos]
    }

    #[inline]
    pub(crate) fn eof(&self) -> bool {
        self.pos == self.text.len()
    }

    pub(crate) fn remainder(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub(crate) fn error(&self, code: ParseErrorCode) -> Error {
        Error::Syntax(code, self.pos)
    }
}
