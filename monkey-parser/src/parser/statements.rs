// Statement parsing module
// let, return, expression statements and blocks

use crate::ast::*;
use crate::parser::{Parser, Precedence, Trace};
use crate::token::TokenKind;

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        let _trace = Trace::begin("parse_statement");
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self
                .parse_expression_statement()
                .map(Statement::Expression),
        }
    }

    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let _trace = Trace::begin("parse_let_statement");
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.current.literal.clone());

        self.expect_peek(TokenKind::Assign)?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(LetStatement { name, value })
    }

    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let _trace = Trace::begin("parse_return_statement");
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(ReturnStatement { value })
    }

    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let _trace = Trace::begin("parse_expression_statement");
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(ExpressionStatement { expression })
    }

    /// Parse statements after a `{` up to the matching `}` or end of input
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let _trace = Trace::begin("parse_block_statement");
        let mut block = BlockStatement::default();
        self.advance();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                block.statements.push(statement);
            }
            self.advance();
        }

        block
    }
}
