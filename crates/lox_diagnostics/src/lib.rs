//! lox_diagnostics: Diagnostic reports produced while processing Lox source.
//!
//! A diagnostic is a `(line, message)` report with a stable numeric code.
//! Producers push diagnostics into a [`DiagnosticCollection`] and keep going;
//! the owner of the collection decides whether the run failed.

use lox_core::text::TextSpan;
use std::fmt;

/// A diagnostic message template with a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g. 1001).
    pub code: u32,
    /// The message template. May contain `{0}`, `{1}`, ... placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// The file the diagnostic belongs to, if known.
    pub file: Option<String>,
    /// 1-based source line.
    pub line: u32,
    /// The offending source bytes, if known.
    pub span: Option<TextSpan>,
    pub message_text: String,
    pub code: u32,
}

impl Diagnostic {
    /// Create a diagnostic from a message template at the given line.
    pub fn new(message: &DiagnosticMessage, args: &[&str], line: u32) -> Self {
        Self {
            file: None,
            line,
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
        }
    }

    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether this diagnostic was created from the given template.
    pub fn is(&self, message: &DiagnosticMessage) -> bool {
        self.code == message.code
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}: ", file)?;
        }
        write!(f, "[line {}] Error: {}", self.line, self.message_text)
    }
}

/// Format a message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Diagnostics accumulated during one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Every Lox diagnostic is an error, so any report fails the run.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Sort diagnostics by file, then line, then span start. Reports that
    /// compare equal keep their insertion order.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then(a.line.cmp(&b.line))
                .then_with(|| {
                    let a_pos = a.span.map(|s| s.start).unwrap_or(0);
                    let b_pos = b.span.map(|s| s.start).unwrap_or(0);
                    a_pos.cmp(&b_pos)
                })
        });
    }
}

impl<'c> IntoIterator for &'c DiagnosticCollection {
    type Item = &'c Diagnostic;
    type IntoIter = std::slice::Iter<'c, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

// ============================================================================
// Diagnostic messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage { code: $code, message: $msg }
        };
    }

    // Scanner errors (1000-1099)
    pub const UNEXPECTED_CHARACTER: DiagnosticMessage = diag!(1001, "Unexpected character '{0}'.");
    pub const UNTERMINATED_STRING: DiagnosticMessage = diag!(1002, "Unterminated string.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(format_message("'{0}' and '{1}'", &["a", "b"]), "'a' and 'b'");
        assert_eq!(format_message("no args", &[]), "no args");
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::new(&messages::UNEXPECTED_CHARACTER, &["@"], 3);
        assert_eq!(d.to_string(), "[line 3] Error: Unexpected character '@'.");
        let d = Diagnostic::new(&messages::UNTERMINATED_STRING, &[], 7).with_file("main.lox");
        assert_eq!(d.to_string(), "main.lox: [line 7] Error: Unterminated string.");
    }

    #[test]
    fn test_collection() {
        let mut diags = DiagnosticCollection::new();
        assert!(!diags.has_errors());
        diags.add(Diagnostic::new(&messages::UNTERMINATED_STRING, &[], 4));
        diags.add(Diagnostic::new(&messages::UNEXPECTED_CHARACTER, &["#"], 2));
        assert!(diags.has_errors());
        assert_eq!(diags.error_count(), 2);

        diags.sort();
        let lines: Vec<u32> = diags.diagnostics().iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![2, 4]);
        assert!(diags.diagnostics()[0].is(&messages::UNEXPECTED_CHARACTER));
        assert_eq!(diags.len(), 2);

        let owned = diags.into_diagnostics();
        assert_eq!(owned.len(), 2);
        assert_eq!(owned[1].line, 4);
    }

    #[test]
    fn test_sort_is_stable_within_a_line() {
        let mut diags = DiagnosticCollection::new();
        diags.add(Diagnostic::new(&messages::UNEXPECTED_CHARACTER, &["a"], 1));
        diags.add(Diagnostic::new(&messages::UNEXPECTED_CHARACTER, &["b"], 1));
        diags.sort();
        let texts: Vec<&str> = diags.into_iter().map(|d| d.message_text.as_str()).collect();
        assert_eq!(texts, vec!["Unexpected character 'a'.", "Unexpected character 'b'."]);
    }
}
