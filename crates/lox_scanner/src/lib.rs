//! lox_scanner: Lexer for Lox source code.
//!
//! Converts source text into an ordered sequence of tokens in a single
//! left-to-right pass. Lexical problems are reported as diagnostics and
//! scanning continues, so one run surfaces every error in the input.
//! The returned sequence always ends with exactly one `Eof` token.

mod char_codes;
mod error;
mod scanner;

pub use error::ScanError;
pub use lox_ast::{Literal, Token, TokenKind};
pub use scanner::{scan, ScanResult, Scanner};
