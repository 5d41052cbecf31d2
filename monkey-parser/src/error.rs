// Monkey Parser Error Handling
// Error returned when a program could not be parsed cleanly

use crate::diagnostics::{DiagnosticCollector, DiagnosticError};
use miette::Diagnostic;
use thiserror::Error;

/// Parsing finished with one or more diagnostics
#[derive(Error, Diagnostic, Debug, Clone)]
#[error("parsing failed with {} error(s)", diagnostics.len())]
#[diagnostic(
    code(monkey::parse::failed),
    help("fix the reported problems and try again")
)]
pub struct ParseError {
    #[source_code]
    pub src: String,
    #[related]
    pub diagnostics: Vec<DiagnosticError>,
}

impl ParseError {
    pub fn from_collector(collector: DiagnosticCollector) -> Self {
        Self {
            src: collector.source().to_string(),
            diagnostics: collector.into_diagnostics(),
        }
    }

    /// Plain-text diagnostic messages, in discovery order
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
