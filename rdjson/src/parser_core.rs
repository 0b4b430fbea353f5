// SPDX-License-Identifier: Apache-2.0

use log::{debug, trace};

use crate::lookahead::Lookahead;
use crate::parse_config::ParseConfig;
use crate::parse_error::{ErrKind, ParseError};
use crate::tokenizer::{Lexer, Token, TokenKind, TokenValue};
use crate::value::{Map, Value};

/// Recursive-descent parser over one text buffer.
///
/// One procedure per grammar rule. Nesting depth is threaded through the
/// calls explicitly and checked against [`ParseConfig::max_depth`], so the
/// limit does not depend on the host stack.
pub(crate) struct Parser<'a> {
    tokens: Lookahead<Lexer<'a>>,
    config: ParseConfig,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str, config: ParseConfig) -> Self {
        Self {
            tokens: Lookahead::new(Lexer::new(src)),
            config,
        }
    }

    /// Parse a whole document: a single object or array and nothing after it.
    pub fn parse_document(mut self) -> Result<Value, ParseError> {
        let first = self.tokens.expect_peek()?;
        if !first.kind().is_container_open() {
            return ParseError::new(
                ErrKind::RootMustBeContainer {
                    found: first.kind(),
                    value: first.value().to_string(),
                },
                first.offset(),
            );
        }

        let value = self.parse_value(0)?;
        if let Some(extra) = self.tokens.next_token()? {
            return ParseError::new(ErrKind::ExtraData, extra.offset());
        }
        debug!("parsed {} root", value.kind_name());
        Ok(value)
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        if depth > self.config.max_depth {
            return Err(ParseError::unlocated(ErrKind::DepthExceeded {
                max_depth: self.config.max_depth,
            }));
        }
        let token = self.tokens.expect_token()?;
        let offset = token.offset();
        match (token.kind(), token.into_value()) {
            (_, TokenValue::String(s)) => Ok(Value::String(s)),
            (_, TokenValue::Number(n)) => Ok(Value::Number(n)),
            (_, TokenValue::Literal(literal)) => Ok(Value::from(literal)),
            (TokenKind::BraceOpen, _) => self.parse_object(depth + 1),
            (TokenKind::BracketOpen, _) => self.parse_array(depth + 1),
            (found, value) => ParseError::new(
                ErrKind::ValueExpected {
                    found,
                    value: value.to_string(),
                },
                offset,
            ),
        }
    }

    /// Elements are parsed at the array's own depth.
    fn parse_array(&mut self, depth: usize) -> Result<Value, ParseError> {
        trace!("array at depth {depth}");
        let mut items = Vec::new();
        if self.close_if(TokenKind::BracketClose)? {
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.parse_value(depth)?);
            if self.close_if(TokenKind::BracketClose)? {
                return Ok(Value::Array(items));
            }
            self.expect(TokenKind::Comma)?;
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, ParseError> {
        trace!("object at depth {depth}");
        let mut members = Map::new();
        if self.close_if(TokenKind::BraceClose)? {
            return Ok(Value::Object(members));
        }
        loop {
            let (key, key_offset) = self.expect_key()?;
            self.expect(TokenKind::Colon)?;
            if !self.config.allow_duplicate_keys && members.contains_key(&key) {
                return ParseError::new(ErrKind::DuplicateKey { key }, key_offset);
            }
            let value = self.parse_value(depth)?;
            // Overwrite keeps the first position and the last value
            members.insert(key, value);
            if self.close_if(TokenKind::BraceClose)? {
                return Ok(Value::Object(members));
            }
            self.expect(TokenKind::Comma)?;
        }
    }

    /// Consume the next token if it is `close`. End of input is an error.
    fn close_if(&mut self, close: TokenKind) -> Result<bool, ParseError> {
        if self.tokens.expect_peek()?.kind() != close {
            return Ok(false);
        }
        self.tokens.next_token()?;
        Ok(true)
    }

    /// Consume the next token and require it to be of kind `expected`.
    fn expect(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        let token = self.tokens.expect_token()?;
        if token.kind() != expected {
            return ParseError::new(
                ErrKind::UnexpectedToken {
                    found: token.kind(),
                    value: token.value().to_string(),
                    expected,
                },
                token.offset(),
            );
        }
        Ok(token)
    }

    /// Consume an object key: a string token, decoded.
    fn expect_key(&mut self) -> Result<(String, usize), ParseError> {
        let token = self.tokens.expect_token()?;
        let offset = token.offset();
        match (token.kind(), token.into_value()) {
            (_, TokenValue::String(key)) => Ok((key, offset)),
            (found, value) => ParseError::new(
                ErrKind::UnexpectedToken {
                    found,
                    value: value.to_string(),
                    expected: TokenKind::String,
                },
                offset,
            ),
        }
    }
}
