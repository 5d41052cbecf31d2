// Control flow parsing module
// if / else expressions

use crate::ast::*;
use crate::parser::{Parser, Precedence, Trace};
use crate::token::TokenKind;

impl Parser<'_> {
    /// `if (<condition>) { ... } [else { ... }]`
    pub(crate) fn parse_if_expression(&mut self) -> Option<Expression> {
        let _trace = Trace::begin("parse_if_expression");
        self.expect_peek(TokenKind::LParen)?;
        self.advance();

        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }
}
