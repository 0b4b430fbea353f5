// SPDX-License-Identifier: Apache-2.0

/// A decoded JSON number.
///
/// Lexemes containing `.`, `e` or `E` decode to [`Number::Float`]; every other
/// lexeme is an integer. Integers outside the `i64` range keep their exact
/// decimal text in [`Number::BigInteger`] instead of losing precision.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// Integer that fits in `i64`
    Integer(i64),
    /// Integer too large for `i64`, kept as its lexeme
    BigInteger(String),
    /// IEEE-754 double
    Float(f64),
}

impl Number {
    /// Decode a lexeme already accepted by the tokenizer's number rule.
    ///
    /// `f64` parsing of a well-formed lexeme saturates to infinity on
    /// overflow instead of failing.
    pub(crate) fn from_lexeme(lexeme: &str) -> Self {
        if !is_integer(lexeme) {
            return match lexeme.parse::<f64>() {
                Ok(value) => Number::Float(value),
                Err(_) => Number::BigInteger(lexeme.to_string()),
            };
        }
        match lexeme.parse::<i64>() {
            Ok(value) => Number::Integer(value),
            Err(_) => Number::BigInteger(lexeme.to_string()),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::BigInteger(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Get the number as an `i64` if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the number as an `f64`. Integers convert, possibly rounding.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Integer(value) => Some(*value as f64),
            Number::BigInteger(digits) => digits.parse::<f64>().ok(),
            Number::Float(value) => Some(*value),
        }
    }
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{value}"),
            Number::BigInteger(digits) => f.write_str(digits),
            Number::Float(value) => write!(f, "{value:?}"),
        }
    }
}

/// Integer lexemes have no fraction and no exponent.
fn is_integer(lexeme: &str) -> bool {
    !lexeme.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
}
