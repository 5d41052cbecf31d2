//! Monkey Interpreter
//!
//! Evaluates programs produced by `monkey-parser` by walking the AST.
//! Bindings live in a shared, chained [`Environment`]; callers that want
//! bindings to survive between inputs (such as a REPL) keep one
//! environment alive and pass it to every call.

pub mod builtins;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod session;
pub mod value;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;

// Re-export public API
pub use environment::Environment;
pub use error::{InterpreterError, RuntimeError};
pub use evaluator::{Evaluator, eval};
pub use session::{InterpreterSession, SessionError};
pub use value::{Builtin, BuiltinFn, Function, HashKey, HashPair, Value};

/// Parse and evaluate source text in one step
///
/// Parse diagnostics and runtime failures are both returned as errors;
/// use [`eval`] when failures should come back as [`Value::Error`].
pub fn evaluate_source(source: &str, env: &Environment) -> Result<Value, InterpreterError> {
    let program = monkey_parser::parse_program(source)?;
    let value = Evaluator::new().evaluate_program(&program, env)?;
    Ok(value)
}
