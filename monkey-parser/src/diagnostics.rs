// Monkey Parser Diagnostics
// Diagnostic error types and ordered error collection for parsing

use crate::token::{Span, TokenKind};
use miette::{Diagnostic, SourceSpan};
use std::fmt;
use thiserror::Error;

/// A single problem found while parsing. The `Display` text is the
/// plain diagnostic message reported to callers.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticError {
    #[error("expected next token to be {expected}, got {found} instead")]
    #[diagnostic(
        code(monkey::parse::unexpected_token),
        help("insert `{expected}` here")
    )]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        #[label("unexpected {found}")]
        span: SourceSpan,
    },

    #[error("no parse rule for {token}")]
    #[diagnostic(
        code(monkey::parse::no_parse_rule),
        help("an expression cannot start with this token")
    )]
    NoParseRule {
        token: TokenKind,
        #[label("not the start of an expression")]
        span: SourceSpan,
    },

    #[error("could not parse {literal} as integer")]
    #[diagnostic(
        code(monkey::parse::invalid_integer),
        help("integer literals must fit in a signed 64-bit integer")
    )]
    InvalidInteger {
        literal: String,
        #[label("integer out of range")]
        span: SourceSpan,
    },
}

impl DiagnosticError {
    /// Create an unexpected token error
    pub fn unexpected_token(expected: TokenKind, found: TokenKind, span: Span) -> Self {
        DiagnosticError::UnexpectedToken {
            expected,
            found,
            span: span.into(),
        }
    }

    /// Create a missing prefix rule error
    pub fn no_parse_rule(token: TokenKind, span: Span) -> Self {
        DiagnosticError::NoParseRule {
            token,
            span: span.into(),
        }
    }

    /// Create an invalid integer error
    pub fn invalid_integer(literal: String, span: Span) -> Self {
        DiagnosticError::InvalidInteger {
            literal,
            span: span.into(),
        }
    }

    /// Get the source span of this diagnostic
    pub fn span(&self) -> SourceSpan {
        match self {
            DiagnosticError::UnexpectedToken { span, .. } => *span,
            DiagnosticError::NoParseRule { span, .. } => *span,
            DiagnosticError::InvalidInteger { span, .. } => *span,
        }
    }
}

/// Accumulates diagnostics in the order they were found
#[derive(Debug, Clone)]
pub struct DiagnosticCollector {
    /// Source code being parsed
    source: String,
    diagnostics: Vec<DiagnosticError>,
    /// Maximum number of diagnostics to keep
    max_errors: usize,
}

impl DiagnosticCollector {
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_max_errors(source, 100)
    }

    pub fn with_max_errors(source: impl Into<String>, max_errors: usize) -> Self {
        Self {
            source: source.into(),
            diagnostics: Vec::new(),
            max_errors,
        }
    }

    /// Record a diagnostic unless the limit has been reached
    pub fn add_diagnostic(&mut self, diagnostic: DiagnosticError) {
        if self.diagnostics.len() < self.max_errors {
            log::debug!("parse diagnostic: {}", diagnostic);
            self.diagnostics.push(diagnostic);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[DiagnosticError] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<DiagnosticError> {
        self.diagnostics
    }

    /// Plain-text messages, in discovery order
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Create miette reports against a named copy of the source
    pub fn create_reports_with_filename(&self, filename: &str) -> Vec<miette::Report> {
        let named_source = miette::NamedSource::new(filename, self.source.clone());

        self.diagnostics
            .iter()
            .map(|diagnostic| {
                miette::Report::new(diagnostic.clone()).with_source_code(named_source.clone())
            })
            .collect()
    }
}

impl fmt::Display for DiagnosticCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}
