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

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::char;
use nom::character::complete::oct_digit1;
use nom::character::complete::one_of;
use nom::combinator::map;
use nom::combinator::opt;
use nom::sequence::preceded;
use nom::IResult;
use nom::Parser;
use ordered_float::OrderedFloat;
use serde::ser::Serialize;
use serde::ser::Serializer;

use crate::constants::EXPONENT_LOWER;
use crate::constants::EXPONENT_UPPER;
use crate::error::ParseErrorCode;

/// A DSON number.
///
/// Literals without a fraction or exponent decode to `Int64`, everything
/// else decodes to `Float64`, even when the value is integral.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int64(i64),
    Float64(f64),
}

impl Number {
    pub fn is_i64(&self) -> bool {
        matches!(self, Number::Int64(_))
    }

    pub fn is_f64(&self) -> bool {
        matches!(self, Number::Float64(_))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int64(v) => Some(*v),
            Number::Float64(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int64(v) => *v as f64,
            Number::Float64(v) => *v,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int64(l), Number::Int64(r)) => l == r,
            (Number::Float64(l), Number::Float64(r)) => OrderedFloat(*l) == OrderedFloat(*r),
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Number::Int64(v) => {
                let mut buffer = itoa::Buffer::new();
                let s = buffer.format(*v);
                write!(f, "{}", s)
            }
            Number::Float64(v) => {
                let mut buffer = ryu::Buffer::new();
                let s = buffer.format(*v);
                write!(f, "{}", s)
            }
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Number::Int64(v) => serializer.serialize_i64(*v),
            Number::Float64(v) => serializer.serialize_f64(*v),
        }
    }
}

/// The pieces of a validated octal literal, borrowed from the source text.
#[derive(Debug, PartialEq)]
struct OctalLiteral<'a> {
    negative: bool,
    integer: &'a str,
    fraction: Option<&'a str>,
    exponent: Option<(bool, &'a str)>,
}

// -?[0-7]+(\.[0-7]+)?((very|VERY)[+-]?[0-7]+)?
fn octal_literal(input: &str) -> IResult<&str, OctalLiteral<'_>> {
    map(
        (
            opt(char('-')),
            oct_digit1,
            opt(preceded(char('.'), oct_digit1)),
            opt(preceded(
                alt((tag(EXPONENT_LOWER), tag(EXPONENT_UPPER))),
                (opt(one_of("+-")), oct_digit1),
            )),
        ),
        |(sign, integer, fraction, exponent)| OctalLiteral {
            negative: sign.is_some(),
            integer,
            fraction,
            exponent: exponent.map(|(sign, digits)| (sign == Some('-'), digits)),
        },
    )
    .parse(input)
}

/// Parse a complete DSON octal number literal.
pub(crate) fn parse_octal_number(literal: &str) -> Result<Number, ParseErrorCode> {
    match octal_literal(literal) {
        Ok(("", parsed)) => parsed.evaluate(literal),
        _ => Err(ParseErrorCode::InvalidNumberValue(literal.to_string())),
    }
}

impl OctalLiteral<'_> {
    fn evaluate(&self, literal: &str) -> Result<Number, ParseErrorCode> {
        let out_of_range = || ParseErrorCode::NumberOutOfRange(literal.to_string());

        if self.fraction.is_none() && self.exponent.is_none() {
            let value = i128::from_str_radix(self.integer, 8).map_err(|_| out_of_range())?;
            let value = if self.negative { -value } else { value };
            return i64::try_from(value)
                .map(Number::Int64)
                .map_err(|_| out_of_range());
        }

        let mut value = self
            .integer
            .bytes()
            .fold(0_f64, |acc, d| acc * 8.0 + f64::from(d - b'0'));
        if let Some(fraction) = self.fraction {
            let mut place = 1.0 / 8.0;
            for d in fraction.bytes() {
                value += f64::from(d - b'0') * place;
                place /= 8.0;
            }
        }
        if let Some((negative, digits)) = self.exponent {
            let exponent = i32::from_str_radix(digits, 8).map_err(|_| out_of_range())?;
            let exponent = if negative { -exponent } else { exponent };
            // zero stays zero for any exponent
            if value != 0.0 {
                let half = exponent / 2;
                value = value * 8_f64.powi(half) * 8_f64.powi(exponent - half);
            }
        }
        if !value.is_finite() {
            return Err(out_of_range());
        }
        if self.negative {
            value = -value;
        }
        Ok(Number::Float64(value))
    }
}
