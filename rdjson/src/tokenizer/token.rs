// SPDX-License-Identifier: Apache-2.0

use crate::Number;

/// The lexical category of a token.
///
/// Opening and closing braces and brackets are separate kinds so the parser
/// can dispatch on the kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    String,
    Number,
    Literal,
    BraceOpen,
    BraceClose,
    BracketOpen,
    BracketClose,
    Comma,
    Colon,
}

impl TokenKind {
    /// The fixed source character of a structural kind.
    pub fn structural_char(self) -> Option<char> {
        match self {
            TokenKind::BraceOpen => Some('{'),
            TokenKind::BraceClose => Some('}'),
            TokenKind::BracketOpen => Some('['),
            TokenKind::BracketClose => Some(']'),
            TokenKind::Comma => Some(','),
            TokenKind::Colon => Some(':'),
            TokenKind::String | TokenKind::Number | TokenKind::Literal => None,
        }
    }

    /// Whether a token of this kind may open the root value.
    pub fn is_container_open(self) -> bool {
        matches!(self, TokenKind::BraceOpen | TokenKind::BracketOpen)
    }

    fn name(self) -> &'static str {
        match self {
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Literal => "LITERAL",
            TokenKind::BraceOpen => "BRACE_OPEN",
            TokenKind::BraceClose => "BRACE_CLOSE",
            TokenKind::BracketOpen => "BRACKET_OPEN",
            TokenKind::BracketClose => "BRACKET_CLOSE",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
        }
    }
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the three JSON literal words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    True,
    False,
    Null,
}

impl Literal {
    pub(crate) const ALL: [(&'static str, Literal); 3] = [
        ("true", Literal::True),
        ("false", Literal::False),
        ("null", Literal::Null),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Literal::True => "true",
            Literal::False => "false",
            Literal::Null => "null",
        }
    }
}

/// The decoded payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Decoded string contents, escapes resolved.
    String(String),
    Number(Number),
    Literal(Literal),
    /// The raw character of a brace, bracket, comma or colon.
    Structural(char),
}

impl core::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TokenValue::String(s) => f.write_str(s),
            TokenValue::Number(n) => write!(f, "{n}"),
            TokenValue::Literal(l) => f.write_str(l.as_str()),
            TokenValue::Structural(c) => write!(f, "{c}"),
        }
    }
}

/// A classified, located unit of lexical input.
///
/// Offsets are zero-based character indices into the source text; `end` is
/// one past the last character of the lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    value: TokenValue,
    offset: usize,
    end: usize,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, value: TokenValue, offset: usize, end: usize) -> Self {
        Self {
            kind,
            value,
            offset,
            end,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    pub fn into_value(self) -> TokenValue {
        self.value
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn end(&self) -> usize {
        self.end
    }
}

/// Debug dump form, one token per line: `KIND value at offset N`.
impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.value {
            // Quote strings so control characters and spaces stay visible
            TokenValue::String(s) => write!(f, "{} {:?} at offset {}", self.kind, s, self.offset),
            other => write!(f, "{} {} at offset {}", self.kind, other, self.offset),
        }
    }
}
