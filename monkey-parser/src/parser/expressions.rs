// Expression parsing module
// Pratt loop, prefix/infix rule tables and operator expressions

use crate::ast::*;
use crate::diagnostics::DiagnosticError;
use crate::parser::{Parser, Precedence, Trace};
use crate::token::TokenKind;

/// Parses an expression that starts at the current token
type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Option<Expression>;

/// Extends an already parsed left operand; the current token is the operator
type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Option<Expression>;

impl<'a> Parser<'a> {
    fn prefix_rule(kind: TokenKind) -> Option<PrefixParseFn<'a>> {
        match kind {
            TokenKind::Ident => Some(Self::parse_identifier),
            TokenKind::Int => Some(Self::parse_integer_literal),
            TokenKind::String => Some(Self::parse_string_literal),
            TokenKind::True | TokenKind::False => Some(Self::parse_boolean),
            TokenKind::Bang | TokenKind::Minus => Some(Self::parse_prefix_expression),
            TokenKind::LParen => Some(Self::parse_grouped_expression),
            TokenKind::If => Some(Self::parse_if_expression),
            TokenKind::Function => Some(Self::parse_function_literal),
            TokenKind::LBracket => Some(Self::parse_array_literal),
            TokenKind::LBrace => Some(Self::parse_hash_literal),
            _ => None,
        }
    }

    fn infix_rule(kind: TokenKind) -> Option<InfixParseFn<'a>> {
        match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::NotEq => Some(Self::parse_infix_expression),
            TokenKind::LParen => Some(Self::parse_call_expression),
            TokenKind::LBracket => Some(Self::parse_index_expression),
            _ => None,
        }
    }

    /// Parse an expression, folding in infix operators that bind tighter
    /// than `precedence`
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let _trace = Trace::begin("parse_expression");

        let Some(prefix) = Self::prefix_rule(self.current.kind) else {
            self.error(DiagnosticError::no_parse_rule(
                self.current.kind,
                self.current.span,
            ));
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = Self::infix_rule(self.peek.kind) else {
                return Some(left);
            };
            self.advance();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let _trace = Trace::begin("parse_prefix_expression");
        let operator = match self.current.kind {
            TokenKind::Bang => PrefixOperator::Bang,
            _ => PrefixOperator::Minus,
        };
        self.advance();

        let operand = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix(PrefixExpression {
            operator,
            operand: Box::new(operand),
        }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let _trace = Trace::begin("parse_infix_expression");
        let operator = match self.current.kind {
            TokenKind::Plus => InfixOperator::Plus,
            TokenKind::Minus => InfixOperator::Minus,
            TokenKind::Asterisk => InfixOperator::Multiply,
            TokenKind::Slash => InfixOperator::Divide,
            TokenKind::Lt => InfixOperator::Less,
            TokenKind::Gt => InfixOperator::Greater,
            TokenKind::Eq => InfixOperator::Equal,
            _ => InfixOperator::NotEqual,
        };
        let precedence = self.current_precedence();
        self.advance();

        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix(InfixExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        let _trace = Trace::begin("parse_grouped_expression");
        self.advance();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(expression)
    }
}
