// SPDX-License-Identifier: Apache-2.0

// Error handling tests for the public API: kinds, offsets and messages

use rdjson::{lex, parse, parse_with_config, ErrKind, ParseConfig, ParseError, TokenKind};

fn parse_err(json: &str) -> ParseError {
    match parse(json) {
        Err(e) => e,
        Ok(value) => panic!("Expected error for {json:?}, got: {value:?}"),
    }
}

fn assert_err(json: &str, kind: ErrKind, offset: Option<usize>) {
    let error = parse_err(json);
    assert_eq!(error.kind(), &kind, "kind for {json:?}");
    assert_eq!(error.offset(), offset, "offset for {json:?}");
}

#[test]
fn test_malformed_character() {
    assert_err("[1, @]", ErrKind::MalformedCharacter, Some(4));
    assert_err(r#"{name: "value"}"#, ErrKind::MalformedCharacter, Some(1));
    // No literal matches a truncated keyword
    assert_err(r#"{"a": tru}"#, ErrKind::MalformedCharacter, Some(6));
    // An incomplete fraction leaves the dot unmatched
    assert_err("[1.]", ErrKind::MalformedCharacter, Some(2));
    // Leading zeros: the second digit matches nothing
    assert_err("[012]", ErrKind::MalformedCharacter, Some(2));
    assert_err("[+1]", ErrKind::MalformedCharacter, Some(1));
}

#[test]
fn test_malformed_character_uses_char_offsets() {
    // Two multi-byte characters before the error
    assert_err("[\"\u{e9}\u{1F600}\", #]", ErrKind::MalformedCharacter, Some(7));
}

#[test]
fn test_raw_control_character_in_string() {
    assert_err("[\"tab\there\"]", ErrKind::MalformedCharacter, Some(1));
    assert_err("{\"a\":\"line\nbreak\"}", ErrKind::MalformedCharacter, Some(5));
}

#[test]
fn test_unterminated_string() {
    assert_err(r#"{"unterminated": "missing quote}"#, ErrKind::UnterminatedString, Some(17));
    assert_err(r#"[""#, ErrKind::UnterminatedString, Some(1));
}

#[test]
fn test_trailing_backslash() {
    assert_err(r#"["ab\"#, ErrKind::TrailingBackslash, Some(4));
    // The escaped quote leaves the backslash with nothing to escape
    assert_err(r#"["ab\""#, ErrKind::TrailingBackslash, Some(4));
}

#[test]
fn test_escape_errors() {
    assert_err(
        r#"{"bad_escape": "invalid\x"}"#,
        ErrKind::InvalidEscape { escape: 'x' },
        Some(23),
    );
    assert_err(r#"["\u12"]"#, ErrKind::ShortUnicodeEscape, Some(2));
    assert_err(
        r#"["\u12G4"]"#,
        ErrKind::InvalidHexEscape {
            sequence: r"\u12G4".to_string(),
        },
        Some(2),
    );
}

#[test]
fn test_unpaired_surrogates() {
    assert_err(r#"["\uDC00"]"#, ErrKind::UnpairedSurrogate, Some(2));
    assert_err(r#"["a\uD800"]"#, ErrKind::UnpairedSurrogate, Some(3));
    assert_err(r#"["\uD800A"]"#, ErrKind::UnpairedSurrogate, Some(2));
    assert_err(r#"["\uD800x\uDC00"]"#, ErrKind::UnpairedSurrogate, Some(2));
}

#[test]
fn test_unexpected_end_of_input() {
    for json in ["", "   \n", "[", "{", "[1,", r#"{"a""#, r#"{"a":"#, r#"{"a":1"#] {
        assert_err(json, ErrKind::UnexpectedEndOfInput, None);
    }
    assert_eq!(parse_err("[").to_string(), "unexpected end of input");
}

#[test]
fn test_unexpected_token() {
    assert_err(
        r#"{"a" 1}"#,
        ErrKind::UnexpectedToken {
            found: TokenKind::Number,
            value: "1".to_string(),
            expected: TokenKind::Colon,
        },
        Some(5),
    );
    assert_err(
        "{1:2}",
        ErrKind::UnexpectedToken {
            found: TokenKind::Number,
            value: "1".to_string(),
            expected: TokenKind::String,
        },
        Some(1),
    );
    assert_err(
        "[1 2]",
        ErrKind::UnexpectedToken {
            found: TokenKind::Number,
            value: "2".to_string(),
            expected: TokenKind::Comma,
        },
        Some(3),
    );
    assert_eq!(
        parse_err("[1 2]").to_string(),
        "unexpected token NUMBER '2' at offset 3 - expected COMMA ','"
    );
}

#[test]
fn test_value_expected() {
    assert_err(
        "[,]",
        ErrKind::ValueExpected {
            found: TokenKind::Comma,
            value: ",".to_string(),
        },
        Some(1),
    );
    assert_err(
        "[1,]",
        ErrKind::ValueExpected {
            found: TokenKind::BracketClose,
            value: "]".to_string(),
        },
        Some(3),
    );
    assert_err(
        r#"{"a":}"#,
        ErrKind::ValueExpected {
            found: TokenKind::BraceClose,
            value: "}".to_string(),
        },
        Some(5),
    );
}

#[test]
fn test_duplicate_key() {
    assert_err(
        r#"{"a":1,"a":2}"#,
        ErrKind::DuplicateKey {
            key: "a".to_string(),
        },
        Some(7),
    );
    // Keys compare after decoding
    assert_err(
        r#"{"a":1,"\u0061":2}"#,
        ErrKind::DuplicateKey {
            key: "a".to_string(),
        },
        Some(7),
    );
    // Duplicates in different objects are independent
    assert!(parse(r#"[{"a":1},{"a":2}]"#).is_ok());

    let config = ParseConfig::new().with_duplicate_keys(true);
    assert!(parse_with_config(r#"{"a":1,"a":2}"#, &config).is_ok());
}

#[test]
fn test_root_must_be_container() {
    assert_err(
        r#""just a string""#,
        ErrKind::RootMustBeContainer {
            found: TokenKind::String,
            value: "just a string".to_string(),
        },
        Some(0),
    );
    assert_err(
        "  42",
        ErrKind::RootMustBeContainer {
            found: TokenKind::Number,
            value: "42".to_string(),
        },
        Some(2),
    );
    assert_err(
        "]",
        ErrKind::RootMustBeContainer {
            found: TokenKind::BracketClose,
            value: "]".to_string(),
        },
        Some(0),
    );
    assert_eq!(
        parse_err("true").to_string(),
        "payload must be object or array at root - got LITERAL 'true' at offset 0"
    );
}

#[test]
fn test_extra_data() {
    assert_err("[] []", ErrKind::ExtraData, Some(3));
    assert_err("{}\n,", ErrKind::ExtraData, Some(3));
    // A bad character after the root is still a lexical error
    assert_err("{} x", ErrKind::MalformedCharacter, Some(3));
}

#[test]
fn test_depth_exceeded() {
    let config = ParseConfig::new().with_max_depth(2);
    let error = parse_with_config("[[[1]]]", &config).unwrap_err();
    assert_eq!(error.kind(), &ErrKind::DepthExceeded { max_depth: 2 });
    assert_eq!(error.offset(), None);
    assert_eq!(error.to_string(), "depth limit exceeded (max 2)");
    assert!(parse_with_config("[[1]]", &config).is_ok());

    // Deep nesting is rejected cleanly instead of exhausting the stack
    let deep = "[".repeat(100_000);
    assert_eq!(
        parse(&deep).unwrap_err().kind(),
        &ErrKind::DepthExceeded { max_depth: 19 }
    );
}

#[test]
fn test_first_error_wins() {
    // The escape error comes before the malformed character
    assert_err(
        r#"[1, "\q", @]"#,
        ErrKind::InvalidEscape { escape: 'q' },
        Some(5),
    );
    // The lexer reports the bad character before the grammar sees it
    assert_err("[1 @", ErrKind::MalformedCharacter, Some(3));
}

#[test]
fn test_lex_stops_after_first_error() {
    let results: Vec<_> = lex("[1, @, 2]").collect();
    assert_eq!(results.len(), 4);
    assert!(results[..3].iter().all(Result::is_ok));
    assert_eq!(
        results[3],
        Err(ParseError::at(ErrKind::MalformedCharacter, 4))
    );
}
