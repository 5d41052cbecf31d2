//! Evaluation tests for the Monkey interpreter
//!
//! Each module drives the parser → evaluator pipeline through an
//! `InterpreterSession`.

mod test_collections;
