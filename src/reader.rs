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

use super::constants::*;
use super::error::ParseErrorCode;
use super::error::Result;
use super::lexer::Lexer;
use super::value::Value;

/// A structural DSON token, classified once when it is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword<'a> {
    Such,
    So,
    Wow,
    Many,
    Is,
    And,
    Also,
    /// One of `,` `.` `!` `?`, all interchangeable.
    Separator(char),
    Other(&'a str),
}

impl<'a> Keyword<'a> {
    pub(crate) fn classify(token: &'a str) -> Keyword<'a> {
        match token {
            KW_SUCH => Keyword::Such,
            KW_SO => Keyword::So,
            KW_WOW => Keyword::Wow,
            KW_MANY => Keyword::Many,
            KW_IS => Keyword::Is,
            KW_AND => Keyword::And,
            KW_ALSO => Keyword::Also,
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if is_separator(c) => Keyword::Separator(c),
                    _ => Keyword::Other(token),
                }
            }
        }
    }
}

impl Display for Keyword<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Keyword::Such => write!(f, "{KW_SUCH}"),
            Keyword::So => write!(f, "{KW_SO}"),
            Keyword::Wow => write!(f, "{KW_WOW}"),
            Keyword::Many => write!(f, "{KW_MANY}"),
            Keyword::Is => write!(f, "{KW_IS}"),
            Keyword::And => write!(f, "{KW_AND}"),
            Keyword::Also => write!(f, "{KW_ALSO}"),
            Keyword::Separator(c) => write!(f, "{c}"),
            Keyword::Other(s) => write!(f, "{s}"),
        }
    }
}

/// The next lexical unit in value position.
#[derive(Debug, PartialEq)]
pub(crate) enum Lexeme<'a> {
    /// A string, number or `yes`/`no`/`empty` constant.
    Scalar(Value<'a>),
    Keyword(Keyword<'a>),
}

impl<'a> Lexer<'a> {
    /// Read whatever may start at the current position: a scalar value or a
    /// structural keyword.
    pub(crate) fn read_value(&mut self) -> Result<Lexeme<'a>> {
        self.strip_whitespace();
        let c = self.peek()?;
        match c {
            QU => Ok(Lexeme::Scalar(Value::String(self.read_string()?))),
            '0'..='9' | '-' => Ok(Lexeme::Scalar(Value::Number(self.read_number()?))),
            c if is_token_char(c) => {
                let lexeme = match self.read_token()? {
                    KW_YES => Lexeme::Scalar(Value::Bool(true)),
                    KW_NO => Lexeme::Scalar(Value::Bool(false)),
                    KW_EMPTY => Lexeme::Scalar(Value::Null),
                    token => Lexeme::Keyword(Keyword::classify(token)),
                };
                Ok(lexeme)
            }
            c => Err(self.error(ParseErrorCode::ExpectedSomeValue(c))),
        }
    }

    pub(crate) fn read_keyword(&mut self) -> Result<Keyword<'a>> {
        self.read_token().map(Keyword::classify)
    }
}
