// SPDX-License-Identifier: Apache-2.0

use crate::tokenizer::TokenKind;

/// Classification of a syntax error.
///
/// Every failure raised by [`lex`](crate::lex) or [`parse`](crate::parse)
/// belongs to exactly one of these kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrKind {
    /// No lexical category matches at the reported offset.
    MalformedCharacter,
    /// Input ended before the closing quote of a string.
    UnterminatedString,
    /// A backslash with nothing left to escape.
    TrailingBackslash,
    /// `\u` followed by fewer than four characters.
    ShortUnicodeEscape,
    /// `\u` followed by four characters that are not all hex digits.
    InvalidHexEscape { sequence: String },
    /// A backslash followed by a character that is not a known escape.
    InvalidEscape { escape: char },
    /// A surrogate escape without its partner half.
    UnpairedSurrogate,
    /// Tokens ran out while the grammar still required one.
    UnexpectedEndOfInput,
    /// A specific token was required but a different one was found.
    UnexpectedToken {
        found: TokenKind,
        value: String,
        expected: TokenKind,
    },
    /// A token that cannot start a value appeared where a value was required.
    ValueExpected { found: TokenKind, value: String },
    /// Container nesting went past the configured maximum.
    DepthExceeded { max_depth: usize },
    /// An object repeated a key while duplicates are not allowed.
    DuplicateKey { key: String },
    /// The document root is neither an object nor an array.
    RootMustBeContainer { found: TokenKind, value: String },
    /// Tokens remain after the root value.
    ExtraData,
}

/// A located syntax error.
///
/// `offset` is the zero-based character index in the source text, present for
/// every kind that can be pinned to a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrKind,
    offset: Option<usize>,
}

impl ParseError {
    /// Creates an error located at `offset`.
    pub fn at(kind: ErrKind, offset: usize) -> Self {
        Self {
            kind,
            offset: Some(offset),
        }
    }

    /// Creates an error that has no meaningful source position.
    pub fn unlocated(kind: ErrKind) -> Self {
        Self { kind, offset: None }
    }

    /// Shorthand used by the scanners: an `Err` located at `offset`.
    pub(crate) fn new<T>(kind: ErrKind, offset: usize) -> Result<T, Self> {
        Err(Self::at(kind, offset))
    }

    pub fn kind(&self) -> &ErrKind {
        &self.kind
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Located kinds always carry an offset; fall back to 0 only if a
        // caller built one by hand without it.
        let at = self.offset.unwrap_or(0);
        match &self.kind {
            ErrKind::MalformedCharacter => write!(f, "invalid character at offset {at}"),
            ErrKind::UnterminatedString => {
                write!(f, "unterminated string starting at offset {at}")
            }
            ErrKind::TrailingBackslash => {
                write!(f, "trailing backslash in string at offset {at}")
            }
            ErrKind::ShortUnicodeEscape => write!(f, "short unicode escape at offset {at}"),
            ErrKind::InvalidHexEscape { sequence } => {
                write!(f, "invalid hex escape {sequence} at offset {at}")
            }
            ErrKind::InvalidEscape { escape } => {
                write!(f, "invalid escape \\{escape} at offset {at}")
            }
            ErrKind::UnpairedSurrogate => {
                write!(f, "unpaired surrogate in string at offset {at}")
            }
            ErrKind::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            ErrKind::UnexpectedToken {
                found,
                value,
                expected,
            } => {
                write!(f, "unexpected token {found} '{value}' at offset {at} - expected {expected}")?;
                if let Some(ch) = expected.structural_char() {
                    write!(f, " '{ch}'")?;
                }
                Ok(())
            }
            ErrKind::ValueExpected { found, value } => {
                write!(f, "unexpected token {found} '{value}' at offset {at} - value expected")
            }
            ErrKind::DepthExceeded { max_depth } => {
                write!(f, "depth limit exceeded (max {max_depth})")
            }
            ErrKind::DuplicateKey { key } => write!(f, "duplicate key {key:?} at offset {at}"),
            ErrKind::RootMustBeContainer { found, value } => write!(
                f,
                "payload must be object or array at root - got {found} '{value}' at offset {at}"
            ),
            ErrKind::ExtraData => write!(f, "extra data after root value at offset {at}"),
        }
    }
}

impl std::error::Error for ParseError {}
