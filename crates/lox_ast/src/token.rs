//! Tokens produced by the scanner.

use crate::token_kind::TokenKind;
use crate::value::format_number;
use lox_core::text::TextSpan;
use serde::Serialize;
use std::fmt;

/// The value carried by a literal token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Literal<'a> {
    Number(f64),
    /// The text between the quotes of a string literal, escapes uninterpreted.
    Text(&'a str),
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => f.write_str(&format_number(*n)),
            Literal::Text(s) => f.write_str(s),
        }
    }
}

/// One recognized lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The exact source text of the token; empty for `Eof`.
    pub lexeme: &'a str,
    /// Only `String` and `Number` tokens carry a literal.
    pub literal: Option<Literal<'a>>,
    /// 1-based source line.
    pub line: u32,
    /// Byte range of `lexeme` in the source.
    pub span: TextSpan,
}

impl<'a> Token<'a> {
    pub fn new(
        kind: TokenKind,
        lexeme: &'a str,
        literal: Option<Literal<'a>>,
        line: u32,
        span: TextSpan,
    ) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
            span,
        }
    }

    /// The end-of-input sentinel at the given line and byte offset.
    pub fn eof(line: u32, pos: u32) -> Self {
        Self {
            kind: TokenKind::Eof,
            lexeme: "",
            literal: None,
            line,
            span: TextSpan::empty(pos),
        }
    }

    /// A token that does not come from scanned source, e.g. one built by
    /// hand for a syntax tree.
    pub fn synthetic(kind: TokenKind, lexeme: &'a str, line: u32) -> Self {
        Self {
            kind,
            lexeme,
            literal: None,
            line,
            span: TextSpan::default(),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Renders `KIND "lexeme" literal line`, e.g. `NUMBER "1" 1.0 1` or
/// `EOF "" null 3`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\" ", self.kind, self.lexeme)?;
        match self.literal {
            Some(literal) => write!(f, "{}", literal)?,
            None => f.write_str("null")?,
        }
        write!(f, " {}", self.line)
    }
}
