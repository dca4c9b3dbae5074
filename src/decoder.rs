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

use super::constants::QU;
use super::error::Error;
use super::error::ParseErrorCode;
use super::error::Result;
use super::lexer::Lexer;
use super::reader::Keyword;
use super::reader::Lexeme;
use super::value::Object;
use super::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    /// A new object is to be created
    NewObject,
    /// Read name for object field
    ObjectFieldName,
    /// Read value for object field
    ObjectFieldValue,
    /// Inside an object; expect `,.!?` or `wow`
    ObjectNext,
    /// A new array is to be created
    NewArray,
    /// Read value for array
    ArrayValue,
    /// Inside an array; expect `and`, `also` or `many`
    ArrayNext,
    /// Pop the parent container off the stack and attach the finished child
    DecrementNest,
    /// Last container processed; no more data should be available
    End,
}

#[derive(Debug)]
enum Container<'a> {
    Object(Object<'a>),
    Array(Vec<Value<'a>>),
}

impl<'a> From<Container<'a>> for Value<'a> {
    fn from(container: Container<'a>) -> Self {
        match container {
            Container::Object(obj) => Value::Object(obj),
            Container::Array(array) => Value::Array(array),
        }
    }
}

/// An ancestor container waiting for the child currently being built.
///
/// Object frames carry the field name the child will be stored under,
/// array frames carry none.
#[derive(Debug)]
struct Frame<'a> {
    container: Container<'a>,
    field: Option<String>,
}

/// Single pass DSON document decoder.
///
/// Nesting is tracked with an explicit stack instead of recursion, so the
/// depth of a document is bounded only by memory.
pub(crate) struct Decoder<'a> {
    lexer: Lexer<'a>,
    stack: Vec<Frame<'a>>,
    current: Option<Container<'a>>,
    // Set between a field name and the value stored under it.
    field: Option<String>,
    document: Option<Value<'a>>,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(text: &'a str) -> Decoder<'a> {
        Self {
            lexer: Lexer::new(text),
            stack: Vec::new(),
            current: None,
            field: None,
            document: None,
        }
    }

    pub(crate) fn decode(mut self) -> Result<Value<'a>> {
        let mut state = State::Start;
        while state != State::End {
            state = self.step(state)?;
        }

        self.lexer.strip_whitespace();
        if !self.lexer.eof() {
            let rest = self.lexer.remainder().to_string();
            return Err(self
                .lexer
                .error(ParseErrorCode::UnexpectedTrailingCharacters(rest)));
        }
        self.document
            .take()
            .ok_or_else(|| self.lexer.error(ParseErrorCode::InvalidEOF))
    }

    fn step(&mut self, state: State) -> Result<State> {
        match state {
            State::Start => match self.lexer.read_value()? {
                Lexeme::Scalar(value) => {
                    self.document = Some(value);
                    Ok(State::End)
                }
                Lexeme::Keyword(Keyword::Such) => Ok(State::NewObject),
                Lexeme::Keyword(Keyword::So) => Ok(State::NewArray),
                Lexeme::Keyword(other) => Err(self.unexpected("'such', 'so' or a value", other)),
            },
            State::NewObject => {
                self.open(Container::Object(Object::new()));
                self.lexer.strip_whitespace();
                match self.lexer.peek()? {
                    QU => Ok(State::ObjectFieldName),
                    'w' => match self.lexer.read_keyword()? {
                        Keyword::Wow => Ok(State::DecrementNest),
                        other => Err(self.unexpected("a field name or 'wow'", other)),
                    },
                    c => Err(self.lexer.error(ParseErrorCode::ExpectedQuote(c))),
                }
            }
            State::NewArray => {
                self.open(Container::Array(Vec::new()));
                Ok(State::ArrayValue)
            }
            State::ObjectFieldName => {
                let name = self.lexer.read_string()?;
                match self.lexer.read_keyword()? {
                    Keyword::Is => {
                        self.field = Some(name.into_owned());
                        Ok(State::ObjectFieldValue)
                    }
                    other => Err(self.unexpected("'is' after field name", other)),
                }
            }
            State::ObjectFieldValue => match self.lexer.read_value()? {
                Lexeme::Scalar(value) => {
                    self.insert_field(value);
                    Ok(State::ObjectNext)
                }
                Lexeme::Keyword(Keyword::Such) => Ok(State::NewObject),
                Lexeme::Keyword(Keyword::So) => Ok(State::NewArray),
                Lexeme::Keyword(other) => Err(self.unexpected("'such', 'so' or a value", other)),
            },
            State::ObjectNext => match self.lexer.read_keyword()? {
                Keyword::Separator(_) => Ok(State::ObjectFieldName),
                Keyword::Wow => Ok(State::DecrementNest),
                other => Err(self.unexpected("[,.!?] or 'wow'", other)),
            },
            State::ArrayValue => match self.lexer.read_value()? {
                Lexeme::Scalar(value) => {
                    self.push_element(value);
                    Ok(State::ArrayNext)
                }
                Lexeme::Keyword(Keyword::Such) => Ok(State::NewObject),
                Lexeme::Keyword(Keyword::So) => Ok(State::NewArray),
                Lexeme::Keyword(Keyword::Many) => Ok(State::DecrementNest),
                Lexeme::Keyword(other) => {
                    Err(self.unexpected("'such', 'so', 'many' or a value", other))
                }
            },
            State::ArrayNext => match self.lexer.read_keyword()? {
                Keyword::And | Keyword::Also => Ok(State::ArrayValue),
                Keyword::Many => Ok(State::DecrementNest),
                other => Err(self.unexpected("'and', 'also' or 'many'", other)),
            },
            State::DecrementNest => Ok(self.close()),
            State::End => Ok(State::End),
        }
    }

    /// Make `child` the current container, saving the parent (if any) on the
    /// stack together with the pending field name.
    fn open(&mut self, child: Container<'a>) {
        if let Some(parent) = self.current.replace(child) {
            self.stack.push(Frame {
                container: parent,
                field: self.field.take(),
            });
        }
    }

    /// Attach the finished current container to its parent.
    fn close(&mut self) -> State {
        let finished = match self.current.take() {
            Some(container) => Value::from(container),
            None => return State::End,
        };

        match self.stack.pop() {
            None => {
                self.document = Some(finished);
                State::End
            }
            Some(Frame {
                container: Container::Object(mut obj),
                field,
            }) => {
                obj.insert(field.unwrap_or_default(), finished);
                self.current = Some(Container::Object(obj));
                State::ObjectNext
            }
            Some(Frame {
                container: Container::Array(mut array),
                ..
            }) => {
                array.push(finished);
                self.current = Some(Container::Array(array));
                State::ArrayNext
            }
        }
    }

    // Only reached from `ObjectFieldValue`, which is entered with an object open.
    fn insert_field(&mut self, value: Value<'a>) {
        match self.current.as_mut() {
            Some(Container::Object(obj)) => {
                obj.insert(self.field.take().unwrap_or_default(), value);
            }
            other => unreachable!("field value read without an open object: {other:?}"),
        }
    }

    // Only reached from `ArrayValue`, which is entered with an array open.
    fn push_element(&mut self, value: Value<'a>) {
        match self.current.as_mut() {
            Some(Container::Array(array)) => array.push(value),
            other => unreachable!("array element read without an open array: {other:?}"),
        }
    }

    fn unexpected(&self, expected: &'static str, found: Keyword<'_>) -> Error {
        self.lexer.error(ParseErrorCode::UnexpectedKeyword {
            expected,
            found: found.to_string(),
        })
    }
}
