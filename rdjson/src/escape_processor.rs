// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::{ErrKind, ParseError};

/// Pure helpers for JSON escape sequences.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Map the character after a backslash to the character it stands for.
    ///
    /// Returns `None` for anything that is not a short-form escape; `u` is
    /// handled separately because it needs four more characters.
    ///
    /// # Examples
    /// ```
    /// use rdjson::EscapeProcessor;
    ///
    /// assert_eq!(EscapeProcessor::process_simple_escape('n'), Some('\n'));
    /// assert_eq!(EscapeProcessor::process_simple_escape('/'), Some('/'));
    /// assert_eq!(EscapeProcessor::process_simple_escape('x'), None);
    /// ```
    pub fn process_simple_escape(escape_char: char) -> Option<char> {
        match escape_char {
            'n' => Some('\n'),
            't' => Some('\t'),
            'r' => Some('\r'),
            '\\' => Some('\\'),
            '"' => Some('"'),
            '/' => Some('/'),
            'b' => Some('\u{08}'), // Backspace
            'f' => Some('\u{0C}'), // Form feed
            _ => None,
        }
    }

    /// Numeric value (0-15) of a hexadecimal digit.
    pub fn validate_hex_digit(ch: char) -> Option<u32> {
        ch.to_digit(16)
    }

    /// Value of exactly four hex digits, or `None` if any is not hex.
    pub fn hex_quad(digits: &[char]) -> Option<u32> {
        if digits.len() != 4 {
            return None;
        }
        digits.iter().try_fold(0u32, |acc, &ch| {
            Self::validate_hex_digit(ch).map(|digit| (acc << 4) | digit)
        })
    }

    /// Check if a Unicode codepoint is a high surrogate (0xD800-0xDBFF)
    pub fn is_high_surrogate(codepoint: u32) -> bool {
        (0xD800..=0xDBFF).contains(&codepoint)
    }

    /// Check if a Unicode codepoint is a low surrogate (0xDC00-0xDFFF)
    pub fn is_low_surrogate(codepoint: u32) -> bool {
        (0xDC00..=0xDFFF).contains(&codepoint)
    }

    /// Combine a high and low surrogate pair into a single Unicode codepoint
    pub fn combine_surrogate_pair(high: u32, low: u32) -> Option<u32> {
        if !Self::is_high_surrogate(high) || !Self::is_low_surrogate(low) {
            return None;
        }
        Some(0x10000 + ((high & 0x3FF) << 10) + (low & 0x3FF))
    }
}

/// Validate a raw string lexeme and return its decoded text.
///
/// `raw` includes the surrounding quotes (the closing one may be missing when
/// the input ended inside the string) and `token_start` is the absolute
/// character offset of the opening quote. Checks run in a fixed order and the
/// first failure wins:
///
/// 1. the lexeme is quoted at both ends,
/// 2. every escape is syntactically complete and known,
/// 3. the interior decodes, with surrogate halves joined into pairs,
/// 4. no surrogate half is left on its own.
///
/// All reported offsets are absolute positions in the source text.
pub fn validate_string(raw: &str, token_start: usize) -> Result<String, ParseError> {
    let chars: Vec<char> = raw.chars().collect();
    let n = chars.len();

    let quoted = n >= 2 && chars.first() == Some(&'"') && chars.last() == Some(&'"');
    if !quoted {
        if chars.last() == Some(&'\\') {
            return ParseError::new(ErrKind::TrailingBackslash, token_start + n - 1);
        }
        return ParseError::new(ErrKind::UnterminatedString, token_start);
    }

    let inner = &chars[1..n - 1];
    // Interior index i sits one past the opening quote in the source
    let content_start = token_start + 1;
    check_escape_syntax(inner, content_start)?;
    let decoded = decode_interior(inner, content_start)?;
    log::trace!("validated string at {}: {:?}", token_start, decoded);
    Ok(decoded)
}

fn check_escape_syntax(inner: &[char], content_start: usize) -> Result<(), ParseError> {
    let n = inner.len();
    let mut i = 0;
    while i < n {
        if inner[i] != '\\' {
            i += 1;
            continue;
        }
        let at = content_start + i;
        let Some(&escape) = inner.get(i + 1) else {
            return ParseError::new(ErrKind::TrailingBackslash, at);
        };
        if escape == 'u' {
            if i + 6 > n {
                return ParseError::new(ErrKind::ShortUnicodeEscape, at);
            }
            if EscapeProcessor::hex_quad(&inner[i + 2..i + 6]).is_none() {
                let sequence: String = inner[i..i + 6].iter().collect();
                return ParseError::new(ErrKind::InvalidHexEscape { sequence }, at);
            }
            i += 6;
        } else if EscapeProcessor::process_simple_escape(escape).is_some() {
            i += 2;
        } else {
            return ParseError::new(ErrKind::InvalidEscape { escape }, at);
        }
    }
    Ok(())
}

/// Decode an interior whose escape syntax is already known to be valid.
fn decode_interior(inner: &[char], content_start: usize) -> Result<String, ParseError> {
    let n = inner.len();
    let mut out = String::with_capacity(n);
    let mut i = 0;
    while i < n {
        let ch = inner[i];
        if ch != '\\' {
            out.push(ch);
            i += 1;
            continue;
        }
        let escape = inner.get(i + 1).copied().unwrap_or_default();
        if escape != 'u' {
            if let Some(decoded) = EscapeProcessor::process_simple_escape(escape) {
                out.push(decoded);
            }
            i += 2;
            continue;
        }

        let at = content_start + i;
        let unpaired = || ParseError::at(ErrKind::UnpairedSurrogate, at);
        let codepoint = unicode_escape_at(inner, i).ok_or_else(unpaired)?;

        if EscapeProcessor::is_low_surrogate(codepoint) {
            return Err(unpaired());
        }
        if EscapeProcessor::is_high_surrogate(codepoint) {
            // A high half only counts when a low-half escape follows directly
            let combined = unicode_escape_at(inner, i + 6)
                .and_then(|low| EscapeProcessor::combine_surrogate_pair(codepoint, low))
                .and_then(char::from_u32)
                .ok_or_else(unpaired)?;
            out.push(combined);
            i += 12;
            continue;
        }
        out.push(char::from_u32(codepoint).ok_or_else(unpaired)?);
        i += 6;
    }
    Ok(out)
}

/// The code unit of a `\uXXXX` escape starting at `i`, if there is one.
fn unicode_escape_at(inner: &[char], i: usize) -> Option<u32> {
    match inner.get(i..i + 6)? {
        ['\\', 'u', digits @ ..] => EscapeProcessor::hex_quad(digits),
        _ => None,
    }
}
