// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::{ErrKind, ParseError};
use crate::tokenizer::Token;

/// One-token pushback over a fallible token stream.
///
/// At most one token is ever buffered. Lexing errors surface from whichever
/// of `peek` or `next_token` first reaches the bad input.
pub struct Lookahead<I> {
    tokens: I,
    slot: Option<Token>,
}

impl<I> Lookahead<I>
where
    I: Iterator<Item = Result<Token, ParseError>>,
{
    pub fn new(tokens: I) -> Self {
        Self { tokens, slot: None }
    }

    /// Look at the next token without consuming it.
    ///
    /// Returns `Ok(None)` at end of input. Repeated calls return the same
    /// buffered token until it is consumed.
    pub fn peek(&mut self) -> Result<Option<&Token>, ParseError> {
        if self.slot.is_none() {
            self.slot = self.tokens.next().transpose()?;
        }
        Ok(self.slot.as_ref())
    }

    /// Consume the next token, or `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        match self.slot.take() {
            Some(token) => Ok(Some(token)),
            None => self.tokens.next().transpose(),
        }
    }

    /// Consume the next token, treating end of input as an error.
    pub fn expect_token(&mut self) -> Result<Token, ParseError> {
        self.next_token()?
            .ok_or_else(|| ParseError::unlocated(ErrKind::UnexpectedEndOfInput))
    }

    /// Peek, treating end of input as an error.
    pub fn expect_peek(&mut self) -> Result<&Token, ParseError> {
        self.peek()?
            .ok_or_else(|| ParseError::unlocated(ErrKind::UnexpectedEndOfInput))
    }
}
