//! AST node definitions for the minits compiler.
//!
//! Nodes form a pure tree: every non-root node is owned by exactly one
//! parent field, so there is no sharing and no cycles. Trees are built
//! bottom-up by the parser and never mutated afterwards.

use std::fmt;

/// The root of a parse: an ordered sequence of top-level statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Statement>,
}

/// Every statement form the parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    ReturnStatement(ReturnStatement),
    ExpressionStatement(ExpressionStatement),
}

/// Which declaration keyword introduced a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Let,
    Const,
}

impl VariableKind {
    pub fn text(&self) -> &'static str {
        match self {
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// `let x = 1;` / `const y;`
///
/// `declarations` is a sequence for structural compatibility with the
/// emitted form, but the grammar only ever produces a single declarator.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
}

/// One `identifier [= initializer]` unit inside a variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub id: Identifier,
    pub init: Option<Expression>,
}

/// `function name(params): type { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub id: Identifier,
    pub params: Vec<Parameter>,
    /// Defaults to `void` when the declaration carries no `:` clause.
    pub return_type: TypeAnnotation,
    pub body: BlockStatement,
}

/// A function parameter; the type annotation is mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Identifier,
    pub type_annotation: TypeAnnotation,
}

/// A parsed type name. Stored but never validated.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnnotation {
    pub type_name: String,
}

impl TypeAnnotation {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    /// The synthetic annotation used for functions without a `:` clause.
    pub fn void() -> Self {
        Self::new("void")
    }
}

/// `{ ... }` — may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub body: Vec<Statement>,
}

/// `return;` / `return expr;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub argument: Option<Expression>,
}

/// An expression in statement position, e.g. `add(1, 2);`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

/// Every expression form the parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Binary(Box<BinaryExpression>),
    Identifier(Identifier),
    NumericLiteral(NumericLiteral),
    StringLiteral(StringLiteral),
    Call(Box<CallExpression>),
}

/// The operators a binary expression can carry.
///
/// Assignment is deliberately a plain binary operator here, not a distinct
/// node kind; the parser builds it right-recursively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn text(&self) -> &'static str {
        match self {
            BinaryOperator::Assign => "=",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// `left op right`. Both operands are owned exclusively by this node.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Expression,
    pub right: Expression,
}

/// A plain name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A numeric literal, already parsed out of its lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericLiteral {
    pub value: f64,
}

/// A string literal with escape sequences already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
}

/// `callee(arguments)`. Calls cannot chain; the callee is never itself
/// a call expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Expression,
    pub arguments: Vec<Expression>,
}

impl Expression {
    /// A short name for this expression's kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Binary(_) => "BinaryExpression",
            Expression::Identifier(_) => "Identifier",
            Expression::NumericLiteral(_) => "NumericLiteral",
            Expression::StringLiteral(_) => "StringLiteral",
            Expression::Call(_) => "CallExpression",
        }
    }
}

impl Statement {
    /// A short name for this statement's kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::VariableDeclaration(_) => "VariableDeclaration",
            Statement::FunctionDeclaration(_) => "FunctionDeclaration",
            Statement::ReturnStatement(_) => "ReturnStatement",
            Statement::ExpressionStatement(_) => "ExpressionStatement",
        }
    }
}
