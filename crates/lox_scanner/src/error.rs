//! Lexical errors.

use lox_diagnostics::{messages, Diagnostic};
use thiserror::Error;

/// A recoverable lexical error. The scanner reports it and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A character that starts no token.
    #[error("Unexpected character '{character}'.")]
    UnexpectedCharacter { line: u32, character: char },
    /// End of input inside a string literal.
    #[error("Unterminated string.")]
    UnterminatedString { line: u32 },
}

impl ScanError {
    pub fn line(&self) -> u32 {
        match self {
            ScanError::UnexpectedCharacter { line, .. } | ScanError::UnterminatedString { line } => {
                *line
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ScanError::UnexpectedCharacter { line, character } => Diagnostic::new(
                &messages::UNEXPECTED_CHARACTER,
                &[&character.to_string()],
                *line,
            ),
            ScanError::UnterminatedString { line } => {
                Diagnostic::new(&messages::UNTERMINATED_STRING, &[], *line)
            }
        }
    }
}

impl From<ScanError> for Diagnostic {
    fn from(error: ScanError) -> Self {
        error.to_diagnostic()
    }
}
