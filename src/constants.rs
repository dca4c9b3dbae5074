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

// DSON text constants
pub(crate) const OCTAL_UNICODE_LEN: usize = 6;

// DSON text escape characters constants
pub(crate) const BS: char = '\x5C'; // \\ Backslash
pub(crate) const QU: char = '\x22'; // \" Double quotation mark
pub(crate) const SD: char = '\x2F'; // \/ Slash or divide
pub(crate) const BB: char = '\x08'; // \b Backspace
pub(crate) const FF: char = '\x0C'; // \f Formfeed Page Break
pub(crate) const NN: char = '\x0A'; // \n Newline
pub(crate) const RR: char = '\x0D'; // \r Carriage Return
pub(crate) const TT: char = '\x09'; // \t Horizontal Tab

// DSON keywords
pub(crate) const KW_SUCH: &str = "such";
pub(crate) const KW_SO: &str = "so";
pub(crate) const KW_WOW: &str = "wow";
pub(crate) const KW_MANY: &str = "many";
pub(crate) const KW_IS: &str = "is";
pub(crate) const KW_AND: &str = "and";
pub(crate) const KW_ALSO: &str = "also";
pub(crate) const KW_YES: &str = "yes";
pub(crate) const KW_NO: &str = "no";
pub(crate) const KW_EMPTY: &str = "empty";

pub(crate) const EXPONENT_LOWER: &str = "very";
pub(crate) const EXPONENT_UPPER: &str = "VERY";

pub(crate) const TYPE_STRING: &str = "string";
pub(crate) const TYPE_NULL: &str = "null";
pub(crate) const TYPE_BOOLEAN: &str = "boolean";
pub(crate) const TYPE_NUMBER: &str = "number";
pub(crate) const TYPE_ARRAY: &str = "array";
pub(crate) const TYPE_OBJECT: &str = "object";

/// Space, tab, vertical tab, carriage return and newline.
#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0B' | '\r' | '\n')
}

#[inline]
pub(crate) fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || is_separator(c)
}

#[inline]
pub(crate) fn is_separator(c: char) -> bool {
    matches!(c, ',' | '.' | '!' | '?')
}

#[inline]
pub(crate) fn is_number_char(c: char) -> bool {
    c.is_ascii_digit()
        || matches!(
            c,
            '-' | '+' | '.' | 'v' | 'e' | 'r' | 'y' | 'V' | 'E' | 'R' | 'Y'
        )
}
