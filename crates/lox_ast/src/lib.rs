//! lox_ast: Token and syntax tree definitions for Lox.
//!
//! Defines the closed set of token kinds, the reserved-word table, the
//! token value produced by the scanner, and the expression tree consumed
//! by downstream tools.

pub mod expr;
pub mod token;
pub mod token_kind;
pub mod value;

pub use token::{Literal, Token};
pub use token_kind::{lookup_keyword, TokenKind};
pub use value::LiteralValue;
