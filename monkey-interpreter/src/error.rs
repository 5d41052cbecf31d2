//! Runtime error types for the Monkey interpreter.
//!
//! The `Display` text of every [`RuntimeError`] is the exact message that
//! the language reports as an `ERROR:` value.

use miette::Diagnostic;
use monkey_parser::ParseError;
use thiserror::Error;

/// Errors raised while evaluating a program
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("type mismatch: {left} {operator} {right}")]
    #[diagnostic(
        code(monkey::runtime::type_mismatch),
        help("both operands of an arithmetic operator must have the same type")
    )]
    TypeMismatch {
        left: &'static str,
        operator: String,
        right: &'static str,
    },

    #[error("unknown operator: {operator}{operand}")]
    #[diagnostic(code(monkey::runtime::unknown_operator))]
    UnknownPrefixOperator {
        operator: String,
        operand: &'static str,
    },

    #[error("unknown operator: {left} {operator} {right}")]
    #[diagnostic(code(monkey::runtime::unknown_operator))]
    UnknownInfixOperator {
        left: &'static str,
        operator: String,
        right: &'static str,
    },

    #[error("identifier not found: {name}")]
    #[diagnostic(
        code(monkey::runtime::identifier_not_found),
        help("bind the name with `let` before using it")
    )]
    IdentifierNotFound { name: String },

    #[error("not a function: {found}")]
    #[diagnostic(code(monkey::runtime::not_a_function))]
    NotAFunction { found: &'static str },

    #[error("index operator not supported: {found}")]
    #[diagnostic(
        code(monkey::runtime::index_not_supported),
        help("only arrays (by integer) and hashes can be indexed")
    )]
    IndexNotSupported { found: &'static str },

    #[error("unusable as hash key: {found}")]
    #[diagnostic(
        code(monkey::runtime::unusable_hash_key),
        help("hash keys must be integers, booleans or strings")
    )]
    UnusableHashKey { found: &'static str },

    #[error("wrong number of arguments: want={expected}, got={found}")]
    #[diagnostic(code(monkey::runtime::wrong_arity))]
    WrongArity { expected: usize, found: usize },

    #[error("division by zero")]
    #[diagnostic(code(monkey::runtime::division_by_zero))]
    DivisionByZero,

    /// Failure reported by a built-in function
    #[error("{0}")]
    #[diagnostic(code(monkey::runtime::builtin))]
    Builtin(String),
}

impl RuntimeError {
    pub fn type_mismatch(left: &'static str, operator: impl ToString, right: &'static str) -> Self {
        Self::TypeMismatch {
            left,
            operator: operator.to_string(),
            right,
        }
    }

    pub fn unknown_prefix_operator(operator: impl ToString, operand: &'static str) -> Self {
        Self::UnknownPrefixOperator {
            operator: operator.to_string(),
            operand,
        }
    }

    pub fn unknown_infix_operator(
        left: &'static str,
        operator: impl ToString,
        right: &'static str,
    ) -> Self {
        Self::UnknownInfixOperator {
            left,
            operator: operator.to_string(),
            right,
        }
    }

    pub fn identifier_not_found(name: impl Into<String>) -> Self {
        Self::IdentifierNotFound { name: name.into() }
    }

    pub fn builtin(message: impl Into<String>) -> Self {
        Self::Builtin(message.into())
    }

    /// Arity error in the format used by built-in functions
    pub fn builtin_arity(found: usize, expected: usize) -> Self {
        Self::Builtin(format!(
            "wrong number of arguments. got={}, want={}",
            found, expected
        ))
    }
}

/// Failure of the parse-then-evaluate convenience entry point
#[derive(Error, Diagnostic, Debug)]
pub enum InterpreterError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Type alias for evaluation results
pub type Result<T> = std::result::Result<T, RuntimeError>;
