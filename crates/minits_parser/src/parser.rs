//! The minits parser implementation.
//!
//! Each grammar rule is one function. The expression hierarchy runs from
//! lowest precedence to highest: assignment → additive → multiplicative →
//! call → primary. Assignment recurses on its right-hand side and is
//! represented as an ordinary binary expression with operator `=`; the
//! additive and multiplicative levels fold left-associatively.
//!
//! Every failure is fatal: the first malformed construct aborts the whole
//! parse with no recovery and no partial AST.

use minits_ast::node::*;
use minits_ast::TokenKind;
use minits_diagnostics::{CompileError, ParseError};
use minits_lexer::{Lexer, Token};

/// The parser produces a [`Program`] from a stream of tokens.
pub struct Parser {
    lexer: Lexer,
    /// The single lookahead token.
    current: Token,
}

impl Parser {
    /// Construct a parser over a lexer, priming one lookahead token.
    ///
    /// Priming already lexes, so construction fails if the very first
    /// token is malformed.
    pub fn new(mut lexer: Lexer) -> Result<Self, CompileError> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the whole token stream into a [`Program`].
    pub fn parse(&mut self) -> Result<Program, CompileError> {
        let mut body = Vec::new();
        while !self.current.is_eof() {
            body.push(self.parse_statement()?);
        }
        Ok(Program { body })
    }

    // ========================================================================
    // Token management
    // ========================================================================

    /// Advance to the next token, returning the one just consumed.
    fn bump(&mut self) -> Result<Token, CompileError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume the current token if it has the given kind, else fail.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, CompileError> {
        if self.current.kind == kind {
            self.bump()
        } else {
            Err(self.unexpected_token(kind.description()))
        }
    }

    fn unexpected_token(&self, expected: &str) -> CompileError {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.current.kind.description().to_string(),
            position: self.current.position,
        }
        .into()
    }

    // ========================================================================
    // Statement parsing
    // ========================================================================

    fn parse_statement(&mut self) -> Result<Statement, CompileError> {
        match self.current.kind {
            TokenKind::LetKeyword | TokenKind::ConstKeyword => self
                .parse_variable_declaration()
                .map(Statement::VariableDeclaration),
            TokenKind::FunctionKeyword => self
                .parse_function_declaration()
                .map(Statement::FunctionDeclaration),
            TokenKind::ReturnKeyword => {
                self.parse_return_statement().map(Statement::ReturnStatement)
            }
            _ => self
                .parse_expression_statement()
                .map(Statement::ExpressionStatement),
        }
    }

    fn parse_variable_declaration(&mut self) -> Result<VariableDeclaration, CompileError> {
        let kind = match self.current.kind {
            TokenKind::ConstKeyword => VariableKind::Const,
            _ => VariableKind::Let,
        };
        self.bump()?;

        // Single declarator only; the comma-separated multi-declarator
        // form is not part of the grammar.
        let id = self.parse_identifier()?;
        let init = if self.current.kind == TokenKind::EqualsToken {
            self.bump()?;
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(TokenKind::SemicolonToken)?;

        Ok(VariableDeclaration {
            kind,
            declarations: vec![VariableDeclarator { id, init }],
        })
    }

    fn parse_function_declaration(&mut self) -> Result<FunctionDeclaration, CompileError> {
        self.expect(TokenKind::FunctionKeyword)?;
        let id = self.parse_identifier()?;

        self.expect(TokenKind::OpenParenToken)?;
        let params = self.parse_parameters()?;
        self.expect(TokenKind::CloseParenToken)?;

        let return_type = if self.current.kind == TokenKind::ColonToken {
            self.bump()?;
            self.parse_type_annotation()?
        } else {
            TypeAnnotation::void()
        };

        let body = self.parse_block_statement()?;

        Ok(FunctionDeclaration {
            id,
            params,
            return_type,
            body,
        })
    }

    fn parse_parameters(&mut self) -> Result<Vec<Parameter>, CompileError> {
        let mut params = Vec::new();
        while self.current.kind != TokenKind::CloseParenToken {
            let name = self.parse_identifier()?;
            self.expect(TokenKind::ColonToken)?;
            let type_annotation = self.parse_type_annotation()?;
            params.push(Parameter {
                name,
                type_annotation,
            });

            if self.current.kind == TokenKind::CommaToken {
                self.bump()?;
            } else {
                break;
            }
        }
        Ok(params)
    }

    /// Parse a type annotation after a `:`.
    ///
    /// The type name must lex as an identifier. The primitive names
    /// `number`/`string`/`boolean`/`void` lex as a distinct keyword kind
    /// and are therefore rejected here; that gap is part of the grammar.
    fn parse_type_annotation(&mut self) -> Result<TypeAnnotation, CompileError> {
        let token = self.expect(TokenKind::Identifier)?;
        Ok(TypeAnnotation::new(token.text))
    }

    fn parse_block_statement(&mut self) -> Result<BlockStatement, CompileError> {
        self.expect(TokenKind::OpenBraceToken)?;
        let mut body = Vec::new();
        while self.current.kind != TokenKind::CloseBraceToken {
            body.push(self.parse_statement()?);
        }
        self.expect(TokenKind::CloseBraceToken)?;
        Ok(BlockStatement { body })
    }

    fn parse_return_statement(&mut self) -> Result<ReturnStatement, CompileError> {
        self.expect(TokenKind::ReturnKeyword)?;
        let argument = if self.current.kind != TokenKind::SemicolonToken {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(TokenKind::SemicolonToken)?;
        Ok(ReturnStatement { argument })
    }

    fn parse_expression_statement(&mut self) -> Result<ExpressionStatement, CompileError> {
        let expression = self.parse_expression()?;
        self.expect(TokenKind::SemicolonToken)?;
        Ok(ExpressionStatement { expression })
    }

    // ========================================================================
    // Expression parsing (lowest precedence first)
    // ========================================================================

    fn parse_expression(&mut self) -> Result<Expression, CompileError> {
        self.parse_assignment_expression()
    }

    /// Assignment is right-recursive and emitted as a plain binary
    /// expression with operator `=`, not a distinct node kind.
    fn parse_assignment_expression(&mut self) -> Result<Expression, CompileError> {
        let left = self.parse_additive_expression()?;

        if self.current.kind == TokenKind::EqualsToken {
            self.bump()?;
            let right = self.parse_assignment_expression()?;
            return Ok(Expression::Binary(Box::new(BinaryExpression {
                operator: BinaryOperator::Assign,
                left,
                right,
            })));
        }

        Ok(left)
    }

    fn parse_additive_expression(&mut self) -> Result<Expression, CompileError> {
        let mut left = self.parse_multiplicative_expression()?;

        loop {
            let operator = match self.current.kind {
                TokenKind::PlusToken => BinaryOperator::Add,
                TokenKind::MinusToken => BinaryOperator::Subtract,
                _ => break,
            };
            self.bump()?;
            let right = self.parse_multiplicative_expression()?;
            left = Expression::Binary(Box::new(BinaryExpression {
                operator,
                left,
                right,
            }));
        }

        Ok(left)
    }

    fn parse_multiplicative_expression(&mut self) -> Result<Expression, CompileError> {
        let mut left = self.parse_call_expression()?;

        loop {
            let operator = match self.current.kind {
                TokenKind::AsteriskToken => BinaryOperator::Multiply,
                TokenKind::SlashToken => BinaryOperator::Divide,
                _ => break,
            };
            self.bump()?;
            let right = self.parse_call_expression()?;
            left = Expression::Binary(Box::new(BinaryExpression {
                operator,
                left,
                right,
            }));
        }

        Ok(left)
    }

    /// A primary expression optionally followed by one argument list.
    /// Calls do not chain: `f()()` is not part of the grammar.
    fn parse_call_expression(&mut self) -> Result<Expression, CompileError> {
        let callee = self.parse_primary_expression()?;

        if self.current.kind == TokenKind::OpenParenToken {
            self.bump()?;
            let arguments = self.parse_arguments()?;
            self.expect(TokenKind::CloseParenToken)?;
            return Ok(Expression::Call(Box::new(CallExpression {
                callee,
                arguments,
            })));
        }

        Ok(callee)
    }

    fn parse_arguments(&mut self) -> Result<Vec<Expression>, CompileError> {
        let mut arguments = Vec::new();
        if self.current.kind != TokenKind::CloseParenToken {
            arguments.push(self.parse_expression()?);
            while self.current.kind == TokenKind::CommaToken {
                self.bump()?;
                arguments.push(self.parse_expression()?);
            }
        }
        Ok(arguments)
    }

    fn parse_primary_expression(&mut self) -> Result<Expression, CompileError> {
        match self.current.kind {
            TokenKind::Identifier => Ok(Expression::Identifier(self.parse_identifier()?)),
            TokenKind::NumericLiteral => {
                let token = self.bump()?;
                // The lexeme is a digit run with an optional fraction; a
                // failure here means the lexer broke that contract.
                let value = token
                    .text
                    .parse()
                    .expect("numeric lexeme parses as f64");
                Ok(Expression::NumericLiteral(NumericLiteral { value }))
            }
            TokenKind::StringLiteral => {
                let token = self.bump()?;
                Ok(Expression::StringLiteral(StringLiteral { value: token.text }))
            }
            TokenKind::OpenParenToken => {
                self.bump()?;
                let expression = self.parse_expression()?;
                self.expect(TokenKind::CloseParenToken)?;
                Ok(expression)
            }
            _ => Err(self.unexpected_token("expression")),
        }
    }

    fn parse_identifier(&mut self) -> Result<Identifier, CompileError> {
        let token = self.expect(TokenKind::Identifier)?;
        Ok(Identifier::new(token.text))
    }
}
