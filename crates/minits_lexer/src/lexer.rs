//! The minits lexer.
//!
//! A pull-based tokenizer: the parser asks for one token at a time and no
//! token sequence is ever materialized up front. The cursor tracks the
//! absolute character offset plus a 1-based line/column position, and
//! positions are recorded at each token's first character.

use crate::char_codes::*;
use crate::token::Token;
use minits_ast::TokenKind;
use minits_core::Position;
use minits_diagnostics::LexError;

/// The lexer converts minits source text into tokens on demand.
pub struct Lexer {
    /// The source text being scanned.
    text: Vec<char>,
    /// Current character offset into the text.
    pos: usize,
    /// Line/column of the character at `pos`.
    position: Position,
}

impl Lexer {
    /// Create a new lexer over the given source text.
    pub fn new(source: &str) -> Self {
        Self {
            text: source.chars().collect(),
            pos: 0,
            position: Position::start(),
        }
    }

    /// Scan and return the next token.
    ///
    /// Whitespace and `//` comments before the token are skipped. At end
    /// of input this returns the end-of-input token, and keeps returning
    /// it on every further call.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia();

        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(Token::new(TokenKind::EndOfFileToken, "", start));
        };

        if is_identifier_start(ch) {
            return Ok(self.scan_identifier());
        }
        if is_digit(ch) {
            return Ok(self.scan_number());
        }
        if ch == '"' || ch == '\'' {
            return self.scan_string();
        }
        self.scan_operator(ch, start)
    }

    // ========================================================================
    // Cursor management
    // ========================================================================

    /// Look at the character at the current position without advancing.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at position pos + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    /// Advance past the current character, updating line/column.
    #[inline]
    fn advance(&mut self) {
        if let Some(&ch) = self.text.get(self.pos) {
            self.position.advance(ch);
            self.pos += 1;
        }
    }

    /// Skip whitespace and `//`-to-end-of-line comments. Multiple runs of
    /// either between two tokens are all consumed in one call.
    fn skip_trivia(&mut self) {
        loop {
            match self.current_char() {
                Some(ch) if is_white_space(ch) => self.advance(),
                Some('/') if self.char_at(1) == Some('/') => {
                    while let Some(ch) = self.current_char() {
                        if ch == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    // ========================================================================
    // Token scanning
    // ========================================================================

    /// Scan a maximal identifier run and classify it against the keyword
    /// table. Unmatched runs are plain identifiers.
    fn scan_identifier(&mut self) -> Token {
        let start = self.position;
        let mut text = String::new();
        while let Some(ch) = self.current_char() {
            if !is_identifier_part(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        let kind = TokenKind::from_keyword(&text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, start)
    }

    /// Scan a maximal digit run, plus a fractional part when a `.` is
    /// directly followed by another digit. A lone trailing `.` is left
    /// unconsumed.
    fn scan_number(&mut self) -> Token {
        let start = self.position;
        let mut text = String::new();
        while let Some(ch) = self.current_char() {
            if !is_digit(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }

        if self.current_char() == Some('.') && self.char_at(1).is_some_and(is_digit) {
            text.push('.');
            self.advance();
            while let Some(ch) = self.current_char() {
                if !is_digit(ch) {
                    break;
                }
                text.push(ch);
                self.advance();
            }
        }

        Token::new(TokenKind::NumericLiteral, text, start)
    }

    /// Scan a string literal, resolving escape sequences.
    ///
    /// A string opens with `"` or `'`, but only `"` closes it either way;
    /// this asymmetry is part of the grammar. Reaching end of input before
    /// the closing quote is a fatal error.
    fn scan_string(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance();
                    break;
                }
                None => {
                    return Err(LexError::UnterminatedString {
                        position: self.position,
                    })
                }
                Some('\\') => {
                    self.advance();
                    let Some(escaped) = self.current_char() else {
                        return Err(LexError::UnterminatedString {
                            position: self.position,
                        });
                    };
                    value.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '"' => '"',
                        '\\' => '\\',
                        // Unrecognized escapes pass the character through.
                        other => other,
                    });
                    self.advance();
                }
                Some(ch) => {
                    value.push(ch);
                    self.advance();
                }
            }
        }

        Ok(Token::new(TokenKind::StringLiteral, value, start))
    }

    /// Scan an operator or delimiter, longest match first.
    fn scan_operator(&mut self, ch: char, start: Position) -> Result<Token, LexError> {
        let kind = match ch {
            '+' => self.scan_single(TokenKind::PlusToken),
            '-' => self.scan_single(TokenKind::MinusToken),
            '*' => self.scan_single(TokenKind::AsteriskToken),
            '/' => self.scan_single(TokenKind::SlashToken),
            '=' => self.scan_equals_tail(TokenKind::EqualsEqualsToken, TokenKind::EqualsToken),
            '!' => self.scan_equals_tail(
                TokenKind::ExclamationEqualsToken,
                TokenKind::ExclamationToken,
            ),
            '<' => self.scan_equals_tail(TokenKind::LessThanEqualsToken, TokenKind::LessThanToken),
            '>' => self.scan_equals_tail(
                TokenKind::GreaterThanEqualsToken,
                TokenKind::GreaterThanToken,
            ),
            '&' if self.char_at(1) == Some('&') => {
                self.advance();
                self.scan_single(TokenKind::AmpersandAmpersandToken)
            }
            '|' if self.char_at(1) == Some('|') => {
                self.advance();
                self.scan_single(TokenKind::BarBarToken)
            }
            '(' => self.scan_single(TokenKind::OpenParenToken),
            ')' => self.scan_single(TokenKind::CloseParenToken),
            '{' => self.scan_single(TokenKind::OpenBraceToken),
            '}' => self.scan_single(TokenKind::CloseBraceToken),
            '[' => self.scan_single(TokenKind::OpenBracketToken),
            ']' => self.scan_single(TokenKind::CloseBracketToken),
            ';' => self.scan_single(TokenKind::SemicolonToken),
            ':' => self.scan_single(TokenKind::ColonToken),
            ',' => self.scan_single(TokenKind::CommaToken),
            '.' => self.scan_single(TokenKind::DotToken),
            // A bare `&` or `|`, or anything else unrecognized.
            other => {
                return Err(LexError::UnexpectedCharacter {
                    ch: other,
                    position: start,
                })
            }
        };

        let text = kind.token_text().unwrap_or("");
        Ok(Token::new(kind, text, start))
    }

    /// Consume one character and produce the given kind.
    #[inline]
    fn scan_single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Consume the current character, then resolve against a trailing `=`:
    /// `double` when one follows, `single` otherwise.
    fn scan_equals_tail(&mut self, double: TokenKind, single: TokenKind) -> TokenKind {
        self.advance();
        if self.current_char() == Some('=') {
            self.advance();
            double
        } else {
            single
        }
    }
}
