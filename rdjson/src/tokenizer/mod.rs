// SPDX-License-Identifier: Apache-2.0

mod token;
pub use token::{Literal, Token, TokenKind, TokenValue};

mod lexer;
pub use lexer::Lexer;
