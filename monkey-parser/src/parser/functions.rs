// Function parsing module
// Function literals, parameter lists and call expressions

use std::rc::Rc;

use crate::ast::*;
use crate::diagnostics::DiagnosticError;
use crate::parser::{Parser, Trace};
use crate::token::TokenKind;

impl Parser<'_> {
    /// `fn(<params>) { <body> }`
    pub(crate) fn parse_function_literal(&mut self) -> Option<Expression> {
        let _trace = Trace::begin("parse_function_literal");
        self.expect_peek(TokenKind::LParen)?;

        let parameters = self.parse_delimited(TokenKind::RParen, Self::parse_parameter)?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement();

        Some(Expression::Function(Rc::new(FunctionLiteral {
            parameters,
            body,
        })))
    }

    fn parse_parameter(&mut self) -> Option<Identifier> {
        if self.current_is(TokenKind::Ident) {
            Some(Identifier::new(self.current.literal.clone()))
        } else {
            self.error(DiagnosticError::unexpected_token(
                TokenKind::Ident,
                self.current.kind,
                self.current.span,
            ));
            None
        }
    }

    /// `<callee>(<args>)`; the current token is the opening parenthesis
    pub(crate) fn parse_call_expression(&mut self, callee: Expression) -> Option<Expression> {
        let _trace = Trace::begin("parse_call_expression");
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expression::Call(CallExpression {
            callee: Box::new(callee),
            arguments,
        }))
    }
}
