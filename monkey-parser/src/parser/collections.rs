// Collection parsing module
// Arrays, hashes, index expressions and the shared delimited-list helper

use crate::ast::*;
use crate::parser::{Parser, Precedence, Trace};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parse `item (, item)* end` where the current token is the opening
    /// delimiter. Every list in the grammar goes through here.
    pub(crate) fn parse_delimited<T>(
        &mut self,
        end: TokenKind,
        item: fn(&mut Parser<'a>) -> Option<T>,
    ) -> Option<Vec<T>> {
        let _trace = Trace::begin("parse_delimited");
        let mut items = Vec::new();

        if self.peek_is(end) {
            self.advance();
            return Some(items);
        }

        self.advance();
        items.push(item(self)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            items.push(item(self)?);
        }

        self.expect_peek(end)?;
        Some(items)
    }

    pub(crate) fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        self.parse_delimited(end, |parser| parser.parse_expression(Precedence::Lowest))
    }

    pub(crate) fn parse_array_literal(&mut self) -> Option<Expression> {
        let _trace = Trace::begin("parse_array_literal");
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expression::Array(ArrayLiteral { elements }))
    }

    /// `<collection>[<index>]`; the current token is `[`
    pub(crate) fn parse_index_expression(&mut self, collection: Expression) -> Option<Expression> {
        let _trace = Trace::begin("parse_index_expression");
        self.advance();

        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Some(Expression::Index(IndexExpression {
            collection: Box::new(collection),
            index: Box::new(index),
        }))
    }

    pub(crate) fn parse_hash_literal(&mut self) -> Option<Expression> {
        let _trace = Trace::begin("parse_hash_literal");
        let pairs = self.parse_delimited(TokenKind::RBrace, Self::parse_hash_pair)?;
        Some(Expression::Hash(HashLiteral { pairs }))
    }

    fn parse_hash_pair(&mut self) -> Option<(Expression, Expression)> {
        let key = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Colon)?;
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        Some((key, value))
    }
}
