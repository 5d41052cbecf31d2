// Monkey Parser
// Recursive-descent statements with Pratt (precedence-climbing) expressions

mod collections;
mod control_flow;
mod expressions;
mod functions;
mod literals;
mod statements;
mod tracing;

use crate::ast::Program;
use crate::diagnostics::{DiagnosticCollector, DiagnosticError};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

pub(crate) use tracing::Trace;

/// Binding strength of operators, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

impl Precedence {
    /// Infix precedence of a token; tokens without an infix rule bind lowest
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            TokenKind::LBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }
}

/// Pulls tokens from a [`Lexer`] with one token of lookahead and builds a
/// [`Program`]. Problems are recorded as diagnostics; parsing always runs
/// to the end of input.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
    diagnostics: DiagnosticCollector,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        let diagnostics = DiagnosticCollector::new(lexer.source());

        Self {
            lexer,
            current,
            peek,
            diagnostics,
        }
    }

    /// Parse every statement up to the end of input
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.advance();
        }

        program
    }

    pub fn diagnostics(&self) -> &DiagnosticCollector {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> DiagnosticCollector {
        self.diagnostics
    }

    /// Diagnostic messages recorded so far, in order
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics.messages()
    }

    pub(crate) fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    pub(crate) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(crate) fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    /// Advance if the next token has the given kind, otherwise record a
    /// diagnostic and leave the cursor where it is
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.advance();
            Some(())
        } else {
            self.peek_error(kind);
            None
        }
    }

    /// Consume an optional `;` after a statement
    pub(crate) fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.diagnostics.add_diagnostic(DiagnosticError::unexpected_token(
            expected,
            self.peek.kind,
            self.peek.span,
        ));
    }

    pub(crate) fn error(&mut self, diagnostic: DiagnosticError) {
        self.diagnostics.add_diagnostic(diagnostic);
    }
}
