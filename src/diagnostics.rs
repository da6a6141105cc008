//! Error reporting shared by the scanner and the parser.
//!
//! The driver owns a [`Diagnostics`] sink, lends it to each scan and parse,
//! and inspects [`Diagnostics::had_error`] afterwards. Nothing here is global:
//! a REPL calls [`Diagnostics::reset`] between lines.

use std::fmt;

use crate::ast::Token;

/// Which stage reported a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unexpected character or unterminated string
    Lexical,
    /// Unexpected token or missing closing delimiter
    Syntax,
}

/// A single line-tagged error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub line: usize,
    /// Empty, `" at end"`, or `" at '<lexeme>'"`
    pub location: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.message
        )
    }
}

/// Accumulates diagnostics for one run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    reported: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Records a diagnostic and returns a copy of it.
    pub fn report(
        &mut self,
        kind: ErrorKind,
        line: usize,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Diagnostic {
        let diagnostic = Diagnostic {
            kind,
            line,
            location: location.into(),
            message: message.into(),
        };
        tracing::trace!(%diagnostic, "diagnostic reported");
        self.reported.push(diagnostic.clone());
        diagnostic
    }

    /// Reports a lexical error with no location.
    pub fn error(&mut self, line: usize, message: impl Into<String>) -> Diagnostic {
        self.report(ErrorKind::Lexical, line, "", message)
    }

    /// Reports a syntax error positioned at `token`.
    pub fn error_at(&mut self, token: &Token, message: impl Into<String>) -> Diagnostic {
        let location = if token.is_eof() {
            " at end".to_string()
        } else {
            format!(" at '{}'", token.lexeme)
        };
        self.report(ErrorKind::Syntax, token.line, location, message)
    }

    pub fn had_error(&self) -> bool {
        !self.reported.is_empty()
    }

    pub fn reset(&mut self) {
        self.reported.clear();
    }

    pub fn len(&self) -> usize {
        self.reported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.reported.iter()
    }

    /// Removes and returns everything reported so far.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.reported)
    }
}
