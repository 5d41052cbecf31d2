// Literal parsing module
// Identifiers, integers, booleans and strings

use crate::ast::*;
use crate::diagnostics::DiagnosticError;
use crate::parser::Parser;
use crate::token::TokenKind;

impl Parser<'_> {
    pub(crate) fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::new(
            self.current.literal.clone(),
        )))
    }

    pub(crate) fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral { value })),
            Err(_) => {
                self.error(DiagnosticError::invalid_integer(
                    self.current.literal.clone(),
                    self.current.span,
                ));
                None
            }
        }
    }

    pub(crate) fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(BooleanLiteral {
            value: self.current_is(TokenKind::True),
        }))
    }

    pub(crate) fn parse_string_literal(&mut self) -> Option<Expression> {
        Some(Expression::String(StringLiteral {
            value: self.current.literal.clone(),
        }))
    }
}
