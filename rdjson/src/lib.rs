// SPDX-License-Identifier: Apache-2.0

//! Strict recursive-descent JSON validator.
//!
//! Two entry points:
//!
//! - [`lex`] turns text into a lazy stream of located [`Token`]s,
//! - [`parse`] / [`parse_with_config`] decode a whole document into a
//!   [`Value`] tree.
//!
//! Every failure is a [`ParseError`] carrying its [`ErrKind`] and, where one
//! exists, the zero-based character offset in the input. The first error
//! stops the scan.
//!
//! ```
//! use rdjson::{parse, ErrKind, Value};
//!
//! let value = parse(r#"{"name": "value", "list": [1, 2.5, null]}"#).unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("value"));
//!
//! let err = parse("[1] 2").unwrap_err();
//! assert_eq!(err.kind(), &ErrKind::ExtraData);
//! assert_eq!(err.offset(), Some(4));
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod escape_processor;
pub use escape_processor::{validate_string, EscapeProcessor};

mod json_number;
pub use json_number::Number;

mod lookahead;
pub use lookahead::Lookahead;

mod parse_config;
pub use parse_config::{ParseConfig, DEFAULT_MAX_DEPTH};

mod parse_error;
pub use parse_error::{ErrKind, ParseError};

mod parser_core;
use parser_core::Parser;

mod tokenizer;
pub use tokenizer::{Lexer, Literal, Token, TokenKind, TokenValue};

mod value;
pub use value::{Map, Value};

/// Tokenize `text` lazily.
///
/// The returned iterator stops after the first error. Each call starts a
/// fresh scan from the beginning of the text.
///
/// ```
/// use rdjson::{lex, TokenKind};
///
/// let kinds: Vec<TokenKind> = lex("[true]").map(|t| t.unwrap().kind()).collect();
/// assert_eq!(kinds, [TokenKind::BracketOpen, TokenKind::Literal, TokenKind::BracketClose]);
/// ```
pub fn lex(text: &str) -> Lexer<'_> {
    Lexer::new(text)
}

/// Parse a document with the default [`ParseConfig`].
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with_config(text, &ParseConfig::default())
}

/// Parse a document whose root must be an object or an array.
///
/// The whole input must be consumed; anything after the root value is
/// [`ErrKind::ExtraData`].
pub fn parse_with_config(text: &str, config: &ParseConfig) -> Result<Value, ParseError> {
    Parser::new(text, *config)
        .parse_document()
        .inspect_err(|err| log::debug!("parse failed: {err}"))
}
