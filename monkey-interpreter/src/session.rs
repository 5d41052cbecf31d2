//! Interpreter session for the Monkey interpreter
//!
//! A session owns one environment and evaluates successive inputs against
//! it, so bindings persist from one input to the next the way they do in
//! the REPL. It also provides assertion helpers for tests.

use crate::{Environment, InterpreterError, Value, evaluate_source};
use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur during session operations
#[derive(Debug, Error, Diagnostic)]
pub enum SessionError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Interpreter(#[from] InterpreterError),

    #[error("Assertion failed: expected {expected}, but got {actual}")]
    #[diagnostic(code(monkey::session::assertion_failed))]
    AssertionFailed { expected: String, actual: String },
}

/// Persistent evaluation context
#[derive(Debug, Default)]
pub struct InterpreterSession {
    env: Environment,
}

impl InterpreterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and evaluate `source` against the session environment
    pub fn evaluate(&mut self, source: &str) -> Result<Value, SessionError> {
        Ok(evaluate_source(source, &self.env)?)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Drop every binding made so far
    pub fn reset(&mut self) {
        self.env = Environment::new();
    }

    pub fn define_variable(&mut self, name: &str, value: Value) {
        self.env.define(name, value);
    }

    pub fn get_variable(&self, name: &str) -> Option<Value> {
        self.env.get(name)
    }

    pub fn assert_evaluates_to_value(
        &mut self,
        source: &str,
        expected: Value,
    ) -> Result<(), SessionError> {
        let actual = self.evaluate(source)?;
        if actual == expected {
            Ok(())
        } else {
            Err(SessionError::AssertionFailed {
                expected: format!("{:?}", expected),
                actual: format!("{:?}", actual),
            })
        }
    }

    pub fn assert_evaluates_to_integer(
        &mut self,
        source: &str,
        expected: i64,
    ) -> Result<(), SessionError> {
        self.assert_evaluates_to_value(source, Value::Integer(expected))
    }

    pub fn assert_evaluates_to_boolean(
        &mut self,
        source: &str,
        expected: bool,
    ) -> Result<(), SessionError> {
        self.assert_evaluates_to_value(source, Value::boolean(expected))
    }

    pub fn assert_evaluates_to_string(
        &mut self,
        source: &str,
        expected: &str,
    ) -> Result<(), SessionError> {
        self.assert_evaluates_to_value(source, Value::string(expected))
    }

    pub fn assert_evaluates_to_null(&mut self, source: &str) -> Result<(), SessionError> {
        self.assert_evaluates_to_value(source, Value::NULL)
    }

    /// Assert that evaluation fails at runtime with exactly `message`
    pub fn assert_runtime_error(&mut self, source: &str, message: &str) -> Result<(), SessionError> {
        match self.evaluate(source) {
            Err(SessionError::Interpreter(InterpreterError::Runtime(error)))
                if error.to_string() == message =>
            {
                Ok(())
            }
            Err(SessionError::Interpreter(InterpreterError::Runtime(error))) => {
                Err(SessionError::AssertionFailed {
                    expected: message.to_string(),
                    actual: error.to_string(),
                })
            }
            Err(other) => Err(other),
            Ok(value) => Err(SessionError::AssertionFailed {
                expected: format!("error `{}`", message),
                actual: value.to_string(),
            }),
        }
    }
}
