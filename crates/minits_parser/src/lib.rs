//! minits_parser: recursive descent parser for minits.
//!
//! Pulls tokens from the lexer one at a time (exactly one token of
//! lookahead, no backtracking) and builds an owned AST. Expression
//! precedence is encoded by the call order of the grammar functions, not
//! by a precedence table.

mod parser;

pub use parser::Parser;
