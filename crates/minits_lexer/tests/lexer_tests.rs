//! Lexer integration tests.
//!
//! Verifies tokenization of whole source snippets, including position
//! tracking, keyword classification, and end-of-input behavior.

use minits_ast::TokenKind;
use minits_core::Position;
use minits_diagnostics::LexError;
use minits_lexer::{Lexer, Token};

/// Helper: lex all tokens (excluding the end-of-input token) as
/// (kind, text) pairs.
fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token().expect("lex failure");
        if token.is_eof() {
            break;
        }
        tokens.push((token.kind, token.text));
    }
    tokens
}

/// Helper: lex all token kinds.
fn lex_kinds(source: &str) -> Vec<TokenKind> {
    lex_all(source).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn test_empty_source() {
    assert!(lex_all("").is_empty());
}

#[test]
fn test_whitespace_only() {
    assert!(lex_all("   \n\t  ").is_empty());
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    for _ in 0..10 {
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::EndOfFileToken);
        assert_eq!(token.text, "");
    }
}

#[test]
fn test_eof_is_idempotent_on_empty_input() {
    let mut lexer = Lexer::new("");
    for _ in 0..3 {
        assert!(lexer.next_token().unwrap().is_eof());
    }
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        lex_all("let const function return if else while for value _tmp x1"),
        vec![
            (TokenKind::LetKeyword, "let".to_string()),
            (TokenKind::ConstKeyword, "const".to_string()),
            (TokenKind::FunctionKeyword, "function".to_string()),
            (TokenKind::ReturnKeyword, "return".to_string()),
            (TokenKind::IfKeyword, "if".to_string()),
            (TokenKind::ElseKeyword, "else".to_string()),
            (TokenKind::WhileKeyword, "while".to_string()),
            (TokenKind::ForKeyword, "for".to_string()),
            (TokenKind::Identifier, "value".to_string()),
            (TokenKind::Identifier, "_tmp".to_string()),
            (TokenKind::Identifier, "x1".to_string()),
        ]
    );
}

#[test]
fn test_boolean_and_type_keywords() {
    assert_eq!(
        lex_all("true false void number string boolean"),
        vec![
            (TokenKind::BooleanLiteral, "true".to_string()),
            (TokenKind::BooleanLiteral, "false".to_string()),
            (TokenKind::TypeKeyword, "void".to_string()),
            (TokenKind::TypeKeyword, "number".to_string()),
            (TokenKind::TypeKeyword, "string".to_string()),
            (TokenKind::TypeKeyword, "boolean".to_string()),
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(
        lex_kinds("lettuce constant fortune"),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_positions_are_recorded_at_token_start() {
    let mut lexer = Lexer::new("let value = 42;");
    let expected = [
        (TokenKind::LetKeyword, 1, 1),
        (TokenKind::Identifier, 1, 5),
        (TokenKind::EqualsToken, 1, 11),
        (TokenKind::NumericLiteral, 1, 13),
        (TokenKind::SemicolonToken, 1, 15),
        (TokenKind::EndOfFileToken, 1, 16),
    ];
    for (kind, line, column) in expected {
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, kind);
        assert_eq!(token.position, Position::new(line, column));
    }
}

#[test]
fn test_positions_across_lines_and_comments() {
    let mut lexer = Lexer::new("let a;\n// comment\n  const b;");
    let a = lexer.next_token().unwrap();
    assert_eq!(a.position, Position::new(1, 1));
    lexer.next_token().unwrap(); // a
    lexer.next_token().unwrap(); // ;
    let konst = lexer.next_token().unwrap();
    assert_eq!(konst.kind, TokenKind::ConstKeyword);
    assert_eq!(konst.position, Position::new(3, 3));
}

#[test]
fn test_string_literal_values() {
    assert_eq!(
        lex_all(r#""hello" "a\tb" "say \"hi\"" "back\\slash""#),
        vec![
            (TokenKind::StringLiteral, "hello".to_string()),
            (TokenKind::StringLiteral, "a\tb".to_string()),
            (TokenKind::StringLiteral, "say \"hi\"".to_string()),
            (TokenKind::StringLiteral, "back\\slash".to_string()),
        ]
    );
}

#[test]
fn test_unterminated_string_fails() {
    let mut lexer = Lexer::new(r#"let s = "abc;"#);
    for _ in 0..3 {
        lexer.next_token().unwrap();
    }
    assert!(matches!(
        lexer.next_token(),
        Err(LexError::UnterminatedString { .. })
    ));
}

#[test]
fn test_string_opened_with_single_quote_never_closed_by_one() {
    // 'abc' runs past the second ' and fails at end of input, because
    // only '"' is recognized as a closing delimiter.
    let mut lexer = Lexer::new("'abc'");
    assert!(matches!(
        lexer.next_token(),
        Err(LexError::UnterminatedString { .. })
    ));
}

#[test]
fn test_token_display() {
    let token = Token::new(TokenKind::NumericLiteral, "42", Position::new(1, 5));
    assert_eq!(
        token.to_string(),
        "Token(NumericLiteral, \"42\", line 1, column 5)"
    );
}

#[test]
fn test_full_statement_token_sequence() {
    assert_eq!(
        lex_kinds("function add(a: number, b: number): number { return a + b; }"),
        vec![
            TokenKind::FunctionKeyword,
            TokenKind::Identifier,
            TokenKind::OpenParenToken,
            TokenKind::Identifier,
            TokenKind::ColonToken,
            TokenKind::TypeKeyword,
            TokenKind::CommaToken,
            TokenKind::Identifier,
            TokenKind::ColonToken,
            TokenKind::TypeKeyword,
            TokenKind::CloseParenToken,
            TokenKind::ColonToken,
            TokenKind::TypeKeyword,
            TokenKind::OpenBraceToken,
            TokenKind::ReturnKeyword,
            TokenKind::Identifier,
            TokenKind::PlusToken,
            TokenKind::Identifier,
            TokenKind::SemicolonToken,
            TokenKind::CloseBraceToken,
        ]
    );
}
