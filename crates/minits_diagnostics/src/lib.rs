//! minits_diagnostics: error types for the minits compiler pipeline.
//!
//! Each pipeline stage has its own error kind, and every kind is fatal:
//! the first malformed construct aborts the stage with no recovery and no
//! partial result. Errors carry the source [`Position`] of the offending
//! character or token so callers can surface the location to the user.

use minits_core::Position;
use thiserror::Error;

/// A fatal error raised by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// End of input was reached before a string literal's closing quote.
    #[error("unterminated string literal at {position}")]
    UnterminatedString { position: Position },

    /// A character that cannot start any token, or a bare `&`/`|`.
    #[error("unexpected character '{ch}' at {position}")]
    UnexpectedCharacter { ch: char, position: Position },
}

impl LexError {
    /// The source position this error points at.
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedString { position } => *position,
            LexError::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

/// A fatal error raised by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The current token did not match what the grammar requires here.
    #[error("expected {expected}, found {found} at {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: Position,
    },
}

impl ParseError {
    /// The source position this error points at.
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedToken { position, .. } => *position,
        }
    }
}

/// A fatal error raised by the code generator.
///
/// Unreachable for any tree the parser produces; raised only on an
/// internal contract violation between parser and generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    #[error("code generator cannot emit {kind} nodes")]
    UnhandledNodeKind { kind: String },
}

/// Any error the pipeline can surface, with conversions from each stage.
///
/// The parser pulls tokens lazily, so a lexical error can surface in the
/// middle of a parse; this umbrella keeps it reported as a [`LexError`]
/// rather than laundering it into a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_display() {
        let err = LexError::UnexpectedCharacter {
            ch: '&',
            position: Position::new(2, 5),
        };
        assert_eq!(err.to_string(), "unexpected character '&' at line 2, column 5");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnexpectedToken {
            expected: "identifier".to_string(),
            found: "numeric literal".to_string(),
            position: Position::new(1, 5),
        };
        assert_eq!(
            err.to_string(),
            "expected identifier, found numeric literal at line 1, column 5"
        );
    }

    #[test]
    fn test_compile_error_is_transparent() {
        let lex = LexError::UnterminatedString {
            position: Position::new(1, 9),
        };
        let wrapped = CompileError::from(lex.clone());
        assert_eq!(wrapped.to_string(), lex.to_string());
        assert_eq!(wrapped, CompileError::Lex(lex));
    }
}
