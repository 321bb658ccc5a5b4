//! Property-based tests for the scanner.
//!
//! Random inputs, both arbitrary text and Lox-shaped token soup, must
//! never panic and must always produce a well-formed token stream.

use lox_scanner::{scan, TokenKind};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Arbitrary ASCII, control characters and newlines included.
fn arbitrary_ascii() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,400}").unwrap()
}

/// Strings that look like Lox source.
fn lox_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(lox_fragment(), 0..60).prop_map(|parts| parts.join(" "))
}

fn lox_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just(";".to_string()),
        Just("!=".to_string()),
        Just("==".to_string()),
        Just("<=".to_string()),
        Just(">=".to_string()),
        Just("/".to_string()),
        Just("\n".to_string()),
        Just("var".to_string()),
        Just("fun".to_string()),
        Just("while".to_string()),
        Just("nil".to_string()),
        (0u32..100_000).prop_map(|n| n.to_string()),
        (0.0f64..1000.0).prop_map(|f| format!("{:.3}", f)),
        r#""[a-z \n]{0,12}""#.prop_map(|s| s),
        r#""[a-z]{0,12}"#.prop_map(|s| s),
        "[a-zA-Z_][a-zA-Z0-9_]{0,10}".prop_map(|s| s),
        "//[^\n]{0,20}\n".prop_map(|s| s),
        "[@#$%^&|~`]".prop_map(|s| s),
    ]
}

fn check_well_formed(source: &str) -> Result<(), TestCaseError> {
    let result = scan(source);
    let tokens = &result.tokens;

    prop_assert!(!tokens.is_empty());
    let eof_count = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
    prop_assert_eq!(eof_count, 1);
    let eof = tokens[tokens.len() - 1];
    prop_assert!(eof.is_eof());
    prop_assert_eq!(eof.lexeme, "");

    let newlines = source.bytes().filter(|&b| b == b'\n').count() as u32;
    prop_assert_eq!(eof.line, newlines + 1);

    for pair in tokens.windows(2) {
        prop_assert!(pair[0].line <= pair[1].line);
        prop_assert!(pair[0].span.end() <= pair[1].span.start);
    }

    for token in tokens {
        prop_assert_eq!(token.lexeme, &source[token.span.to_range()]);
        let carries_literal = matches!(token.kind, TokenKind::String | TokenKind::Number);
        prop_assert_eq!(token.literal.is_some(), carries_literal);
    }

    for diagnostic in &result.diagnostics {
        prop_assert!(diagnostic.line >= 1 && diagnostic.line <= eof.line);
    }
    Ok(())
}

proptest! {
    /// The scanner never panics on arbitrary ASCII.
    #[test]
    fn scanner_never_panics(source in arbitrary_ascii()) {
        let _ = scan(&source);
    }

    /// Arbitrary printable unicode, multibyte scalars included.
    #[test]
    fn scanner_handles_unicode(source in "\\PC{0,120}") {
        check_well_formed(&source)?;
    }

    #[test]
    fn token_stream_is_well_formed(source in arbitrary_ascii()) {
        check_well_formed(&source)?;
    }

    #[test]
    fn lox_like_token_stream_is_well_formed(source in lox_like_string()) {
        check_well_formed(&source)?;
    }

    /// Scanning is a pure function of its input.
    #[test]
    fn scanning_is_deterministic(source in lox_like_string()) {
        let first = scan(&source);
        let second = scan(&source);
        prop_assert_eq!(first.tokens, second.tokens);
        prop_assert_eq!(first.diagnostics.len(), second.diagnostics.len());
    }

    /// Integer literals survive scanning as exact numbers.
    #[test]
    fn integer_literal_value(n in 0u32..1_000_000) {
        let source = n.to_string();
        let result = scan(&source);
        prop_assert_eq!(result.tokens.len(), 2);
        prop_assert_eq!(
            result.tokens[0].literal,
            Some(lox_scanner::Literal::Number(n as f64))
        );
    }
}

// =============================================================================
// REGRESSIONS
// =============================================================================

#[test]
fn regression_null_bytes() {
    let result = scan("\0\0x");
    assert_eq!(result.diagnostics.len(), 2);
    assert_eq!(result.tokens.len(), 2);
}

#[test]
fn regression_very_long_number() {
    let source = "9".repeat(400);
    let result = scan(&source);
    assert!(!result.has_errors());
    assert_eq!(result.tokens[0].kind, TokenKind::Number);
}

#[test]
fn regression_very_long_string() {
    let source = format!("\"{}\"", "x".repeat(100_000));
    let result = scan(&source);
    assert!(!result.has_errors());
    assert_eq!(result.tokens.len(), 2);
}

#[test]
fn regression_only_comments() {
    let result = scan("// one\n// two\n//");
    assert_eq!(result.tokens.len(), 1);
    assert_eq!(result.tokens[0].line, 3);
}
