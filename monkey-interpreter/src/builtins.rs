//! Built-in functions for the Monkey interpreter.
//!
//! Built-ins are resolved by name after the environment chain, so a user
//! binding with the same name hides them.

use crate::error::{Result, RuntimeError};
use crate::value::{Builtin, BuiltinFn, Value};

const BUILTINS: &[(&str, BuiltinFn)] = &[
    ("len", builtin_len),
    ("first", builtin_first),
    ("last", builtin_last),
    ("rest", builtin_rest),
    ("push", builtin_push),
    ("puts", builtin_puts),
];

/// Find a built-in function by name
pub fn lookup(name: &str) -> Option<Value> {
    BUILTINS
        .iter()
        .find(|(builtin_name, _)| *builtin_name == name)
        .map(|(builtin_name, function)| {
            Value::Builtin(Builtin {
                name: *builtin_name,
                function: *function,
            })
        })
}

/// Names of every built-in, in registration order
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|(name, _)| *name)
}

fn expect_arity(args: &[Value], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(RuntimeError::builtin_arity(args.len(), expected));
    }
    Ok(())
}

/// Unwrap the single array argument of `first`, `last` and `rest`
fn array_argument<'a>(name: &str, args: &'a [Value]) -> Result<&'a [Value]> {
    expect_arity(args, 1)?;
    match &args[0] {
        Value::Array(elements) => Ok(elements.as_slice()),
        other => Err(RuntimeError::builtin(format!(
            "argument to `{}` must be ARRAY, got {}",
            name,
            other.type_name()
        ))),
    }
}

/// Length of a string in bytes or of an array in elements
fn builtin_len(args: &[Value]) -> Result<Value> {
    expect_arity(args, 1)?;

    match &args[0] {
        Value::String(s) => Ok(Value::Integer(s.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        other => Err(RuntimeError::builtin(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        ))),
    }
}

fn builtin_first(args: &[Value]) -> Result<Value> {
    let elements = array_argument("first", args)?;
    Ok(elements.first().cloned().unwrap_or(Value::NULL))
}

fn builtin_last(args: &[Value]) -> Result<Value> {
    let elements = array_argument("last", args)?;
    Ok(elements.last().cloned().unwrap_or(Value::NULL))
}

/// New array holding everything but the first element
fn builtin_rest(args: &[Value]) -> Result<Value> {
    let elements = array_argument("rest", args)?;
    match elements.split_first() {
        Some((_, rest)) => Ok(Value::array(rest.to_vec())),
        None => Ok(Value::NULL),
    }
}

/// New array with the value appended; the argument is left untouched
fn builtin_push(args: &[Value]) -> Result<Value> {
    expect_arity(args, 2)?;

    match &args[0] {
        Value::Array(elements) => {
            let mut extended = Vec::with_capacity(elements.len() + 1);
            extended.extend(elements.iter().cloned());
            extended.push(args[1].clone());
            Ok(Value::array(extended))
        }
        other => Err(RuntimeError::builtin(format!(
            "argument to `push` must be ARRAY, got {}",
            other.type_name()
        ))),
    }
}

/// Print each argument on its own line
fn builtin_puts(args: &[Value]) -> Result<Value> {
    for arg in args {
        println!("{}", arg);
    }
    Ok(Value::NULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: &[Value]) -> Result<Value> {
        match lookup(name) {
            Some(Value::Builtin(builtin)) => (builtin.function)(args),
            other => panic!("Expected builtin {}, got {:?}", name, other),
        }
    }

    fn ints(values: &[i64]) -> Value {
        Value::array(values.iter().map(|n| Value::Integer(*n)).collect())
    }

    #[test]
    fn test_lookup() {
        for name in names() {
            assert!(lookup(name).is_some(), "missing builtin {}", name);
        }
        assert!(lookup("print").is_none());
    }

    #[test]
    fn test_len() {
        assert_eq!(call("len", &[Value::string("")]), Ok(Value::Integer(0)));
        assert_eq!(call("len", &[Value::string("four")]), Ok(Value::Integer(4)));
        assert_eq!(call("len", &[ints(&[1, 2, 3])]), Ok(Value::Integer(3)));
        assert_eq!(
            call("len", &[Value::Integer(1)]).unwrap_err().to_string(),
            "argument to `len` not supported, got INTEGER"
        );
        assert_eq!(
            call("len", &[Value::string("one"), Value::string("two")])
                .unwrap_err()
                .to_string(),
            "wrong number of arguments. got=2, want=1"
        );
    }

    #[test]
    fn test_first_last_rest() {
        assert_eq!(call("first", &[ints(&[1, 2, 3])]), Ok(Value::Integer(1)));
        assert_eq!(call("last", &[ints(&[1, 2, 3])]), Ok(Value::Integer(3)));
        assert_eq!(call("rest", &[ints(&[1, 2, 3])]), Ok(ints(&[2, 3])));

        assert_eq!(call("first", &[ints(&[])]), Ok(Value::NULL));
        assert_eq!(call("last", &[ints(&[])]), Ok(Value::NULL));
        assert_eq!(call("rest", &[ints(&[])]), Ok(Value::NULL));

        assert_eq!(
            call("first", &[Value::Integer(1)]).unwrap_err().to_string(),
            "argument to `first` must be ARRAY, got INTEGER"
        );
        assert_eq!(
            call("last", &[Value::NULL]).unwrap_err().to_string(),
            "argument to `last` must be ARRAY, got NULL"
        );
    }

    #[test]
    fn test_push_leaves_argument_untouched() {
        let original = ints(&[1]);

        assert_eq!(
            call("push", &[original.clone(), Value::Integer(2)]),
            Ok(ints(&[1, 2]))
        );
        assert_eq!(original, ints(&[1]));
        assert_eq!(
            call("push", &[Value::Integer(1), Value::Integer(2)])
                .unwrap_err()
                .to_string(),
            "argument to `push` must be ARRAY, got INTEGER"
        );
    }

    #[test]
    fn test_puts_returns_null() {
        assert_eq!(call("puts", &[]), Ok(Value::NULL));
        assert_eq!(call("puts", &[Value::string("hello")]), Ok(Value::NULL));
    }
}
