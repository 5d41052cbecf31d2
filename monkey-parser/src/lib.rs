// Monkey Parser Library
// Hand-written lexer and Pratt parser for the Monkey programming language

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::*;
pub use diagnostics::{DiagnosticCollector, DiagnosticError};
pub use error::{ParseError, ParseResult};
pub use lexer::Lexer;
pub use parser::{Parser, Precedence};
pub use token::{Span, Token, TokenKind};

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;

/// Parse source text into a program plus its diagnostic messages.
///
/// The program is only trustworthy when the message list is empty.
pub fn parse(input: &str) -> (Program, Vec<String>) {
    let (program, diagnostics) = parse_program_with_diagnostics(input);
    (program, diagnostics.messages())
}

/// Parse source text, keeping the structured diagnostics for reporting
pub fn parse_program_with_diagnostics(input: &str) -> (Program, DiagnosticCollector) {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    (program, parser.into_diagnostics())
}

/// Parse source text, failing if any diagnostic was recorded
pub fn parse_program(input: &str) -> ParseResult<Program> {
    let (program, diagnostics) = parse_program_with_diagnostics(input);
    if diagnostics.has_errors() {
        Err(ParseError::from_collector(diagnostics))
    } else {
        Ok(program)
    }
}

// Version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
