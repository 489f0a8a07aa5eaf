//! minits_ast: token kinds and abstract syntax tree definitions.
//!
//! The AST is a closed family of node types: every statement and
//! expression kind is a variant of an enum, so consumers (notably the
//! code generator) match exhaustively and adding a node kind forces every
//! consumer to handle it at compile time.

pub mod node;
pub mod token_kind;

pub use node::*;
pub use token_kind::TokenKind;
