// Example: walk the token stream with one token of lookahead

use rdjson::{lex, Lookahead, ParseError, TokenKind};

fn main() -> Result<(), ParseError> {
    let json = "{\"emoji\": \"\\uD83D\\uDE00\", \"list\": [1, -2.5e3, false]}";
    println!("Input: {}", json);

    for token in lex(json) {
        println!("{}", token?);
    }

    // Count root members: a string right after '{' or ',' at depth 1 is a key
    let mut cursor = Lookahead::new(lex(json));
    let mut keys = 0;
    let mut depth = 0usize;
    while let Some(token) = cursor.next_token()? {
        match token.kind() {
            TokenKind::BraceOpen | TokenKind::BracketOpen => depth += 1,
            TokenKind::BraceClose | TokenKind::BracketClose => depth = depth.saturating_sub(1),
            _ => {}
        }
        let starts_member =
            depth == 1 && matches!(token.kind(), TokenKind::BraceOpen | TokenKind::Comma);
        if starts_member && cursor.peek()?.is_some_and(|t| t.kind() == TokenKind::String) {
            keys += 1;
        }
    }
    println!("root members: {keys}");
    Ok(())
}
