//! Environment and scope management for the Monkey interpreter.
//!
//! An [`Environment`] is a cheap handle to a shared scope. Function calls
//! create a scope enclosed by the function's defining scope, so closures
//! see (and share) the bindings that were visible where they were written.

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Shared handle to a variable scope and, through it, its enclosing scopes
#[derive(Clone, Default)]
pub struct Environment {
    scope: Rc<RefCell<Scope>>,
}

/// A single scope containing variable bindings
#[derive(Default)]
struct Scope {
    /// Variable name to value mapping
    variables: HashMap<String, Value>,
    /// Scope this one was created inside of
    outer: Option<Environment>,
}

impl Environment {
    /// Create a new top-level environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh scope whose lookups fall back to `outer`
    pub fn enclosed(outer: &Environment) -> Self {
        Self {
            scope: Rc::new(RefCell::new(Scope {
                variables: HashMap::new(),
                outer: Some(outer.clone()),
            })),
        }
    }

    /// Look a name up, walking outward through enclosing scopes
    pub fn get(&self, name: &str) -> Option<Value> {
        let scope = self.scope.borrow();
        match scope.variables.get(name) {
            Some(value) => Some(value.clone()),
            None => scope.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Bind a name in this scope, shadowing any outer binding
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.scope.borrow_mut().variables.insert(name.into(), value);
    }

    /// Check if a name is bound in this scope or any enclosing one
    pub fn exists(&self, name: &str) -> bool {
        let scope = self.scope.borrow();
        scope.variables.contains_key(name)
            || scope.outer.as_ref().is_some_and(|outer| outer.exists(name))
    }

    /// Bindings of this scope only, sorted by name (for the REPL `:env` command)
    pub fn current_scope_vars(&self) -> Vec<(String, Value)> {
        let mut vars: Vec<(String, Value)> = self
            .scope
            .borrow()
            .variables
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        vars.sort_by(|a, b| a.0.cmp(&b.0));
        vars
    }

    /// Number of enclosing scopes (0 = top level)
    pub fn scope_depth(&self) -> usize {
        match &self.scope.borrow().outer {
            Some(outer) => outer.scope_depth() + 1,
            None => 0,
        }
    }

    /// Whether two handles refer to the same scope
    pub fn same_scope(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.scope, &other.scope)
    }
}

// Closures store their environment, which may store the closure again, so
// only the names of the innermost scope are printed.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        let mut names: Vec<&String> = scope.variables.keys().collect();
        names.sort();

        f.debug_struct("Environment")
            .field("variables", &names)
            .field("depth", &self.scope_depth())
            .finish()
    }
}
