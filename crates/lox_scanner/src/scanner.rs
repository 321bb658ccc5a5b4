//! The Lox scanner.
//!
//! A cursor-driven state machine over the source text. Each step records
//! the start of the next lexeme, consumes one character and dispatches on
//! it; literals, identifiers and line comments are consumed by dedicated
//! methods that return to the main loop when done. Offsets are byte
//! offsets into the source.

use crate::char_codes::*;
use crate::error::ScanError;
use lox_ast::token::{Literal, Token};
use lox_ast::token_kind::TokenKind;
use lox_core::text::{text_pos, TextSpan};
use lox_diagnostics::DiagnosticCollection;

/// The outcome of scanning one source text.
#[derive(Debug, Clone)]
pub struct ScanResult<'a> {
    /// Tokens in source order, terminated by exactly one `Eof` token.
    pub tokens: Vec<Token<'a>>,
    /// Everything reported while scanning, in the order it was found.
    pub diagnostics: DiagnosticCollection,
}

impl ScanResult<'_> {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Scan a whole source text.
///
/// Spans are `u32` byte offsets. Past `lox_core::MAX_SOURCE_LEN` bytes they
/// saturate, so callers should reject larger sources up front.
pub fn scan(source: &str) -> ScanResult<'_> {
    Scanner::new(source).scan_tokens()
}

/// The scanner converts Lox source text into tokens.
pub struct Scanner<'a> {
    source: &'a str,
    /// Start of the lexeme being scanned.
    start: usize,
    /// The next byte to consume.
    current: usize,
    /// 1-based line of `current`.
    line: u32,
    tokens: Vec<Token<'a>>,
    diagnostics: DiagnosticCollection,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Run the scanner to the end of input.
    pub fn scan_tokens(mut self) -> ScanResult<'a> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line, text_pos(self.current)));

        tracing::debug!(
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            lines = self.line,
            "scan finished"
        );

        ScanResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    fn scan_token(&mut self) {
        let Some(ch) = self.advance() else {
            return;
        };

        match ch {
            OPEN_PAREN => self.add_token(TokenKind::LeftParen),
            CLOSE_PAREN => self.add_token(TokenKind::RightParen),
            OPEN_BRACE => self.add_token(TokenKind::LeftBrace),
            CLOSE_BRACE => self.add_token(TokenKind::RightBrace),
            COMMA => self.add_token(TokenKind::Comma),
            DOT => self.add_token(TokenKind::Dot),
            MINUS => self.add_token(TokenKind::Minus),
            PLUS => self.add_token(TokenKind::Plus),
            SEMICOLON => self.add_token(TokenKind::Semicolon),
            ASTERISK => self.add_token(TokenKind::Star),

            SLASH => {
                if self.match_char(SLASH) {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            EXCLAMATION => self.add_one_or_two(TokenKind::Bang, TokenKind::BangEqual),
            EQUALS => self.add_one_or_two(TokenKind::Equal, TokenKind::EqualEqual),
            LESS_THAN => self.add_one_or_two(TokenKind::Less, TokenKind::LessEqual),
            GREATER_THAN => self.add_one_or_two(TokenKind::Greater, TokenKind::GreaterEqual),

            SPACE | CARRIAGE_RETURN | TAB => {}
            LINE_FEED => self.line += 1,

            DOUBLE_QUOTE => self.scan_string(),

            _ if is_identifier_start(ch) => self.scan_identifier(),
            _ if is_digit(ch) => self.scan_number(),

            _ => self.report(ScanError::UnexpectedCharacter {
                line: self.line,
                character: ch,
            }),
        }
    }

    /// Consume one whole character.
    #[inline]
    fn advance(&mut self) -> Option<char> {
        let ch = self.source[self.current..].chars().next()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    /// Consume the next character only if it is `expected`.
    #[inline]
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    #[inline]
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    /// Maximal munch for `!`, `=`, `<` and `>`: take a trailing `=` if present.
    fn add_one_or_two(&mut self, single: TokenKind, with_equals: TokenKind) {
        let kind = if self.match_char(EQUALS) {
            with_equals
        } else {
            single
        };
        self.add_token(kind);
    }

    /// Skip to the next line feed, leaving it for the main loop to count.
    fn skip_line_comment(&mut self) {
        let rest = &self.source.as_bytes()[self.current..];
        self.current += memchr::memchr(b'\n', rest).unwrap_or(rest.len());
    }

    fn scan_string(&mut self) {
        let source = self.source;
        let rest = &source.as_bytes()[self.current..];
        match memchr::memchr(b'"', rest) {
            Some(offset) => {
                self.line += count_line_feeds(&rest[..offset]);
                // Skip the body and the closing quote.
                self.current += offset + 1;
                let value = &source[self.start + 1..self.current - 1];
                self.add_token_with_literal(TokenKind::String, Literal::Text(value));
            }
            None => {
                self.line += count_line_feeds(rest);
                self.current = source.len();
                self.report(ScanError::UnterminatedString { line: self.line });
            }
        }
    }

    fn scan_number(&mut self) {
        self.skip_digits();

        if self.peek() == Some(DOT) && self.peek_next().map_or(false, is_digit) {
            self.current += 1;
            self.skip_digits();
        }

        let text = &self.source[self.start..self.current];
        // `digits` or `digits.digits` always parses.
        let value: f64 = text.parse().unwrap_or(f64::NAN);
        self.add_token_with_literal(TokenKind::Number, Literal::Number(value));
    }

    fn skip_digits(&mut self) {
        while self.peek().map_or(false, is_digit) {
            self.current += 1;
        }
    }

    fn scan_identifier(&mut self) {
        while self.peek().map_or(false, is_identifier_part) {
            self.current += 1;
        }

        let text = &self.source[self.start..self.current];
        let kind = TokenKind::from_keyword(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    // ========================================================================
    // Output
    // ========================================================================

    fn span(&self) -> TextSpan {
        TextSpan::from_offsets(self.start, self.current)
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None);
    }

    fn add_token_with_literal(&mut self, kind: TokenKind, literal: Literal<'a>) {
        self.push_token(kind, Some(literal));
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal<'a>>) {
        let source = self.source;
        let lexeme = &source[self.start..self.current];
        self.tokens
            .push(Token::new(kind, lexeme, literal, self.line, self.span()));
    }

    fn report(&mut self, error: ScanError) {
        tracing::trace!(%error, line = error.line(), "lexical error");
        let diagnostic = error.to_diagnostic().with_span(self.span());
        self.diagnostics.add(diagnostic);
    }
}

fn count_line_feeds(bytes: &[u8]) -> u32 {
    memchr::memchr_iter(b'\n', bytes).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_single_char_tokens() {
        assert_eq!(
            kinds("(){},.+-*/;"),
            vec![
                LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Plus, Minus, Star,
                Slash, Semicolon, Eof
            ]
        );
    }

    #[test]
    fn test_plus_is_not_semicolon() {
        let result = scan("+;");
        assert_eq!(result.tokens[0].kind, Plus);
        assert_eq!(result.tokens[1].kind, Semicolon);
    }

    #[test]
    fn test_two_char_tokens() {
        assert_eq!(
            kinds("! != = == < <= > >="),
            vec![
                Bang,
                BangEqual,
                Equal,
                EqualEqual,
                Less,
                LessEqual,
                Greater,
                GreaterEqual,
                Eof
            ]
        );
    }

    #[test]
    fn test_maximal_munch_without_spaces() {
        // `===` is `==` then `=`; `!==` is `!=` then `=`.
        assert_eq!(kinds("==="), vec![EqualEqual, Equal, Eof]);
        assert_eq!(kinds("!=="), vec![BangEqual, Equal, Eof]);
        assert_eq!(kinds("<=>"), vec![LessEqual, Greater, Eof]);
    }

    #[test]
    fn test_whitespace_and_lines() {
        let result = scan(" \t\r\n(\n)");
        let lines: Vec<u32> = result.tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![2, 3, 3]);
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let result = scan("1 // trailing");
        assert_eq!(result.tokens.len(), 2);
        assert_eq!(result.tokens[1].span, TextSpan::empty(13));
    }

    #[test]
    fn test_slash_is_not_a_comment() {
        assert_eq!(kinds("1 / 2"), vec![Number, Slash, Number, Eof]);
    }

    #[test]
    fn test_string_value_and_span() {
        let result = scan("x = \"hi there\";");
        let token = result.tokens[2];
        assert_eq!(token.kind, String);
        assert_eq!(token.lexeme, "\"hi there\"");
        assert_eq!(token.literal, Some(Literal::Text("hi there")));
        assert_eq!(token.span, TextSpan::from_bounds(4, 14));
    }

    #[test]
    fn test_empty_string() {
        let result = scan("\"\"");
        assert_eq!(result.tokens[0].literal, Some(Literal::Text("")));
        assert!(!result.has_errors());
    }

    #[test]
    fn test_escapes_are_not_interpreted() {
        let result = scan(r#""a\n""#);
        assert_eq!(result.tokens[0].literal, Some(Literal::Text(r"a\n")));
    }

    #[test]
    fn test_unicode_in_strings_and_comments() {
        let result = scan("\"héllo ✓\" // ünïcode\nx");
        assert!(!result.has_errors());
        assert_eq!(result.tokens[0].literal, Some(Literal::Text("héllo ✓")));
        assert_eq!(result.tokens[1].lexeme, "x");
        assert_eq!(result.tokens[1].line, 2);
    }

    #[test]
    fn test_unexpected_multibyte_character() {
        let result = scan("a é b");
        assert_eq!(kinds("a é b"), vec![Identifier, Identifier, Eof]);
        assert_eq!(result.diagnostics.len(), 1);
        let diag = &result.diagnostics.diagnostics()[0];
        assert_eq!(diag.message_text, "Unexpected character 'é'.");
        assert_eq!(diag.span, Some(TextSpan::from_bounds(2, 4)));
    }

    #[test]
    fn test_numbers() {
        let result = scan("42 2.5 007");
        let literals: Vec<_> = result.tokens.iter().map(|t| t.literal).collect();
        assert_eq!(
            literals,
            vec![
                Some(Literal::Number(42.0)),
                Some(Literal::Number(2.5)),
                Some(Literal::Number(7.0)),
                None
            ]
        );
    }

    #[test]
    fn test_leading_dot_is_not_a_number() {
        assert_eq!(kinds(".5"), vec![Dot, Number, Eof]);
    }

    #[test]
    fn test_method_call_on_number() {
        assert_eq!(kinds("1.abs"), vec![Number, Dot, Identifier, Eof]);
        assert_eq!(kinds("1.2.3"), vec![Number, Dot, Number, Eof]);
    }

    #[test]
    fn test_identifiers_and_keywords() {
        let result = scan("var foo_1 = true;");
        let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![Var, Identifier, Equal, True, Semicolon, Eof]);
        assert_eq!(result.tokens[1].lexeme, "foo_1");
        assert_eq!(result.tokens[1].literal, None);
    }

    #[test]
    fn test_identifier_directly_after_number() {
        assert_eq!(kinds("123abc"), vec![Number, Identifier, Eof]);
    }
}
