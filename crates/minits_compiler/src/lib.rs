//! minits_compiler: the full source-to-source pipeline.
//!
//! Composes the three stages in strict order: source text → token stream
//! → AST → output text. Each stage is a pure transformation; the first
//! error from any stage aborts the pipeline.

use minits_ast::node::Program;
use minits_diagnostics::{CompileError, LexError};
use minits_emitter::CodeGenerator;
use minits_lexer::{Lexer, Token};
use minits_parser::Parser;

/// Tokenize source text eagerly, draining the lexer up to and including
/// the end-of-input token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let eof = token.is_eof();
        tokens.push(token);
        if eof {
            return Ok(tokens);
        }
    }
}

/// Parse source text into a [`Program`].
pub fn parse(source: &str) -> Result<Program, CompileError> {
    Parser::new(Lexer::new(source))?.parse()
}

/// Compile source text to untyped output text.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let program = parse(source)?;
    let output = CodeGenerator::new().generate(&program)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minits_ast::TokenKind;

    #[test]
    fn test_tokenize_includes_eof() {
        let tokens = tokenize("let x;").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFileToken);
    }

    #[test]
    fn test_compile_simple_declaration() {
        assert_eq!(compile("let x = 1 + 2;").unwrap(), "let x = 1 + 2;");
    }

    #[test]
    fn test_compile_propagates_lex_errors() {
        assert!(matches!(compile("let x = ~;"), Err(CompileError::Lex(_))));
    }

    #[test]
    fn test_compile_propagates_parse_errors() {
        assert!(matches!(compile("let = 1;"), Err(CompileError::Parse(_))));
    }
}
