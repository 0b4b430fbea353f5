// SPDX-License-Identifier: Apache-2.0

use log::{debug, trace};

use super::token::{Literal, Token, TokenKind, TokenValue};
use crate::escape_processor::validate_string;
use crate::parse_error::{ErrKind, ParseError};
use crate::Number;

/// Single-pass, forward-only tokenizer over a complete text buffer.
///
/// Yields `Ok(Token)` for every lexeme and skips whitespace. Every character
/// of the input must belong to some lexeme or whitespace run; the first
/// character that does not is reported as [`ErrKind::MalformedCharacter`].
/// After the first error the iterator is fused.
pub struct Lexer<'a> {
    src: &'a str,
    /// Byte position of the scan
    pos: usize,
    /// Character offset matching `pos`
    offset: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            offset: 0,
            finished: false,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Advance past `bytes` bytes that span `chars` characters.
    fn advance(&mut self, bytes: usize, chars: usize) {
        self.pos += bytes;
        self.offset += chars;
    }

    /// Skip a run of Unicode whitespace, including the information
    /// separators U+001C..U+001F.
    fn skip_whitespace(&mut self) {
        let (bytes, chars) = self
            .rest()
            .chars()
            .take_while(|&ch| is_json_whitespace(ch))
            .fold((0, 0), |(bytes, chars), ch| (bytes + ch.len_utf8(), chars + 1));
        self.advance(bytes, chars);
    }

    fn malformed<T>(&self) -> Result<T, ParseError> {
        ParseError::new(ErrKind::MalformedCharacter, self.offset)
    }

    /// Scan the next token, or `None` once the input is exhausted.
    fn scan_token(&mut self) -> Result<Option<Token>, ParseError> {
        self.skip_whitespace();
        let Some(first) = self.rest().chars().next() else {
            return Ok(None);
        };

        // The first character selects the only category that can match, in
        // the order string, number, literal, brace, bracket, comma, colon.
        let token = match first {
            '"' => self.scan_string()?,
            '-' | '0'..='9' => self.scan_number()?,
            't' | 'f' | 'n' => self.scan_literal()?,
            '{' => self.structural(TokenKind::BraceOpen, first),
            '}' => self.structural(TokenKind::BraceClose, first),
            '[' => self.structural(TokenKind::BracketOpen, first),
            ']' => self.structural(TokenKind::BracketClose, first),
            ',' => self.structural(TokenKind::Comma, first),
            ':' => self.structural(TokenKind::Colon, first),
            _ => return self.malformed(),
        };
        trace!("token {token}");
        Ok(Some(token))
    }

    fn structural(&mut self, kind: TokenKind, ch: char) -> Token {
        let start = self.offset;
        self.advance(1, 1);
        Token::new(kind, TokenValue::Structural(ch), start, self.offset)
    }

    /// A quoted string: any run of non-quote, non-backslash, non-control
    /// characters and two-character backslash escapes, closed by a quote.
    fn scan_string(&mut self) -> Result<Token, ParseError> {
        let start = self.offset;
        let rest = self.rest();
        let mut chars = rest.char_indices().skip(1);
        let mut count = 1;

        let end = loop {
            match chars.next() {
                Some((i, '"')) => break i + 1,
                Some((_, '\\')) => {
                    // The escaped character is checked by the validator,
                    // except a line feed, which no escape may span
                    count += 1;
                    match chars.next() {
                        Some((_, '\n')) => return self.malformed(),
                        Some(_) => count += 1,
                        None => {}
                    }
                }
                Some((_, ch)) if u32::from(ch) < 0x20 => {
                    // Category does not match here
                    return self.malformed();
                }
                Some(_) => count += 1,
                None => {
                    // Input ended inside the string: the validator decides
                    // between a trailing backslash and an unterminated string
                    let err = match validate_string(rest, start) {
                        Err(err) => err,
                        Ok(_) => ParseError::at(ErrKind::UnterminatedString, start),
                    };
                    return Err(err);
                }
            }
        };
        count += 1;

        let raw = &rest[..end];
        let decoded = validate_string(raw, start)?;
        self.advance(end, count);
        Ok(Token::new(
            TokenKind::String,
            TokenValue::String(decoded),
            start,
            self.offset,
        ))
    }

    /// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
    fn scan_number(&mut self) -> Result<Token, ParseError> {
        let start = self.offset;
        let rest = self.rest();
        let Some(len) = number_len(rest.as_bytes()) else {
            return self.malformed();
        };
        // Numbers are ASCII: byte length equals character length
        if rest.as_bytes().get(len).is_some_and(u8::is_ascii_digit) {
            // A digit straight after a complete number: only a leading zero
            // stops the integer part early, and nothing matches the digit
            return ParseError::new(ErrKind::MalformedCharacter, start + len);
        }
        let number = Number::from_lexeme(&rest[..len]);
        self.advance(len, len);
        Ok(Token::new(
            TokenKind::Number,
            TokenValue::Number(number),
            start,
            self.offset,
        ))
    }

    fn scan_literal(&mut self) -> Result<Token, ParseError> {
        let start = self.offset;
        let rest = self.rest();
        let Some((word, literal)) = Literal::ALL
            .iter()
            .find(|(word, _)| rest.starts_with(word))
            .copied()
        else {
            return self.malformed();
        };
        self.advance(word.len(), word.len());
        Ok(Token::new(
            TokenKind::Literal,
            TokenValue::Literal(literal),
            start,
            self.offset,
        ))
    }
}

fn is_json_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&ch)
}

/// Length of the longest number lexeme at the start of `bytes`, if any.
///
/// Fraction and exponent are optional: an incomplete one (`1.`, `1e+`) is
/// simply not part of the lexeme.
fn number_len(bytes: &[u8]) -> Option<usize> {
    let digit_at = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);
    let digits_from = |mut i: usize| {
        while digit_at(i) {
            i += 1;
        }
        i
    };

    let mut i = usize::from(bytes.first() == Some(&b'-'));
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i = digits_from(i + 1),
        _ => return None,
    }

    if bytes.get(i) == Some(&b'.') && digit_at(i + 1) {
        i = digits_from(i + 1);
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if digit_at(j) {
            i = digits_from(j);
        }
    }
    Some(i)
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.scan_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                debug!("--finished-- {} chars", self.offset);
                self.finished = true;
                None
            }
            Err(err) => {
                debug!("lexing stopped: {err}");
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl core::iter::FusedIterator for Lexer<'_> {}
