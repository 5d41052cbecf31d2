//! Runtime value representation for the Monkey interpreter.
//!
//! This module defines the [`Value`] enum covering every runtime value,
//! the [`HashKey`] projection used to index hashes, and the `Inspect`
//! rendering (through `Display`) shown to users.

use crate::environment::Environment;
use crate::error::Result;
use indexmap::IndexMap;
use monkey_parser::FunctionLiteral;
use std::fmt;
use std::rc::Rc;

/// Signature shared by every built-in function
pub type BuiltinFn = fn(&[Value]) -> Result<Value>;

/// Runtime values in the Monkey interpreter
#[derive(Debug, Clone)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),
    Boolean(bool),
    /// UTF-8 string
    String(String),
    /// The absence of a value
    Null,

    /// Marks a `return` travelling out of nested blocks; unwrapped at the
    /// enclosing call (or at the top of the program)
    ReturnValue(Box<Value>),
    /// Evaluation failure as seen by callers of `eval`
    Error(String),

    /// User-defined function together with its defining scope
    Function(Rc<Function>),
    /// Native function
    Builtin(Builtin),

    /// Ordered sequence of values
    Array(Rc<Vec<Value>>),
    /// Insertion-ordered map keyed by the hash key of each key value
    Hash(Rc<IndexMap<HashKey, HashPair>>),
}

/// A closure: the function literal plus the environment it was defined in
#[derive(Debug)]
pub struct Function {
    pub literal: Rc<FunctionLiteral>,
    pub closure: Environment,
}

#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub function: BuiltinFn,
}

/// A hash entry keeps the original key so it can be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

/// Typed 64-bit projection of a hashable value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub type_name: &'static str,
    pub value: u64,
}

impl Value {
    pub const TRUE: Value = Value::Boolean(true);
    pub const FALSE: Value = Value::Boolean(false);
    pub const NULL: Value = Value::Null;

    /// Canonical boolean for a host `bool`
    pub fn boolean(value: bool) -> Value {
        if value { Self::TRUE } else { Self::FALSE }
    }

    pub fn string(value: impl Into<String>) -> Value {
        Value::String(value.into())
    }

    pub fn array(elements: Vec<Value>) -> Value {
        Value::Array(Rc::new(elements))
    }

    /// The type tag used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::String(_) => "STRING",
            Value::Null => "NULL",
            Value::ReturnValue(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
        }
    }

    /// Only `false` and `null` are falsy
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Hash key for integers, booleans and strings; `None` for anything else
    pub fn hash_key(&self) -> Option<HashKey> {
        let value = match self {
            Value::Integer(n) => *n as u64,
            Value::Boolean(b) => u64::from(*b),
            Value::String(s) => fnv1a_64(s.as_bytes()),
            _ => return None,
        };

        Some(HashKey {
            type_name: self.type_name(),
            value,
        })
    }

    /// The `==` of the language for operands that are not both integers or
    /// both strings: booleans and null compare by value, collections and
    /// functions by identity, and values of different types never match
    pub fn identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Hash(a), Value::Hash(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

/// Structural equality, used by tests and hash entries. The language's
/// own `==` is [`Value::identical`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::ReturnValue(a), Value::ReturnValue(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => a == b,
            _ => false,
        }
    }
}

/// 64-bit FNV-1a over the string's bytes
fn fnv1a_64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    bytes.iter().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(PRIME)
    })
}

// Inspect

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{}", s),
            Value::Null => write!(f, "null"),
            Value::ReturnValue(value) => write!(f, "{}", value),
            Value::Error(message) => write!(f, "ERROR: {}", message),
            Value::Function(function) => write!(f, "{}", function),
            Value::Builtin(_) => write!(f, "builtin function"),
            Value::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            Value::Hash(pairs) => {
                write!(f, "{{")?;
                for (i, pair) in pairs.values().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters: Vec<&str> = self
            .literal
            .parameters
            .iter()
            .map(|param| param.name.as_str())
            .collect();

        writeln!(f, "fn({}) {{", parameters.join(", "))?;
        for statement in &self.literal.body.statements {
            writeln!(f, "{}", statement)?;
        }
        write!(f, "}}")
    }
}
