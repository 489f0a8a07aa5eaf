//! TokenKind enum - every kind of token the lexer can produce.

/// The kind of a lexical token.
///
/// Note that `true`/`false` lex as a single `BooleanLiteral` kind and the
/// primitive type names `void`/`number`/`string`/`boolean` lex as a single
/// `TypeKeyword` kind; the token text distinguishes the members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    LetKeyword,
    ConstKeyword,
    FunctionKeyword,
    ReturnKeyword,
    IfKeyword,
    ElseKeyword,
    WhileKeyword,
    ForKeyword,

    // Literals and names
    BooleanLiteral,
    TypeKeyword,
    Identifier,
    NumericLiteral,
    StringLiteral,

    // Operators
    PlusToken,
    MinusToken,
    AsteriskToken,
    SlashToken,
    EqualsToken,
    EqualsEqualsToken,
    ExclamationToken,
    ExclamationEqualsToken,
    LessThanToken,
    LessThanEqualsToken,
    GreaterThanToken,
    GreaterThanEqualsToken,
    AmpersandAmpersandToken,
    BarBarToken,

    // Delimiters
    OpenParenToken,
    CloseParenToken,
    OpenBraceToken,
    CloseBraceToken,
    OpenBracketToken,
    CloseBracketToken,
    SemicolonToken,
    ColonToken,
    CommaToken,
    DotToken,

    // Special
    EndOfFileToken,
}

impl TokenKind {
    /// Classify an identifier-shaped lexeme against the keyword table.
    /// Returns `None` for plain identifiers.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "let" => Some(TokenKind::LetKeyword),
            "const" => Some(TokenKind::ConstKeyword),
            "function" => Some(TokenKind::FunctionKeyword),
            "return" => Some(TokenKind::ReturnKeyword),
            "if" => Some(TokenKind::IfKeyword),
            "else" => Some(TokenKind::ElseKeyword),
            "while" => Some(TokenKind::WhileKeyword),
            "for" => Some(TokenKind::ForKeyword),
            "true" | "false" => Some(TokenKind::BooleanLiteral),
            "void" | "number" | "string" | "boolean" => Some(TokenKind::TypeKeyword),
            _ => None,
        }
    }

    /// The fixed source text of this token kind, for kinds whose lexeme
    /// never varies (operators, delimiters, single-member keywords).
    pub fn token_text(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::LetKeyword => "let",
            TokenKind::ConstKeyword => "const",
            TokenKind::FunctionKeyword => "function",
            TokenKind::ReturnKeyword => "return",
            TokenKind::IfKeyword => "if",
            TokenKind::ElseKeyword => "else",
            TokenKind::WhileKeyword => "while",
            TokenKind::ForKeyword => "for",
            TokenKind::PlusToken => "+",
            TokenKind::MinusToken => "-",
            TokenKind::AsteriskToken => "*",
            TokenKind::SlashToken => "/",
            TokenKind::EqualsToken => "=",
            TokenKind::EqualsEqualsToken => "==",
            TokenKind::ExclamationToken => "!",
            TokenKind::ExclamationEqualsToken => "!=",
            TokenKind::LessThanToken => "<",
            TokenKind::LessThanEqualsToken => "<=",
            TokenKind::GreaterThanToken => ">",
            TokenKind::GreaterThanEqualsToken => ">=",
            TokenKind::AmpersandAmpersandToken => "&&",
            TokenKind::BarBarToken => "||",
            TokenKind::OpenParenToken => "(",
            TokenKind::CloseParenToken => ")",
            TokenKind::OpenBraceToken => "{",
            TokenKind::CloseBraceToken => "}",
            TokenKind::OpenBracketToken => "[",
            TokenKind::CloseBracketToken => "]",
            TokenKind::SemicolonToken => ";",
            TokenKind::ColonToken => ":",
            TokenKind::CommaToken => ",",
            TokenKind::DotToken => ".",
            _ => return None,
        })
    }

    /// A human-readable description of this token kind for diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            TokenKind::BooleanLiteral => "boolean literal",
            TokenKind::TypeKeyword => "type name",
            TokenKind::Identifier => "identifier",
            TokenKind::NumericLiteral => "numeric literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::EndOfFileToken => "end of input",
            kind => kind.token_text().unwrap_or("token"),
        }
    }

    /// Whether this kind marks the end of the token stream.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::EndOfFileToken)
    }
}
