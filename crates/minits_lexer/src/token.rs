//! Token values produced by the lexer.

use minits_ast::TokenKind;
use minits_core::Position;
use std::fmt;

/// A single lexical token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact lexeme. For string literals the escape sequences are
    /// already resolved; for the end-of-input token it is empty.
    pub text: String,
    /// Source position of the token's first character.
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Whether this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:?}, {:?}, {})", self.kind, self.text, self.position)
    }
}
