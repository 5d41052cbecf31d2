//! Tree-walking evaluator
//!
//! Walks a parsed [`Program`] against an [`Environment`]. Failures travel
//! as [`RuntimeError`]s through `?`, which stops the enclosing statement
//! list, operand list or call at the first error. `return` travels as
//! [`Value::ReturnValue`] until the enclosing call (or the program) unwraps it.

use crate::builtins;
use crate::environment::Environment;
use crate::error::{Result, RuntimeError};
use crate::value::{Function, HashPair, Value};
use indexmap::IndexMap;
use log::{debug, trace};
use monkey_parser::{
    BlockStatement, Expression, HashLiteral, InfixOperator, PrefixOperator, Program, Statement,
};
use std::rc::Rc;

/// Evaluate a program, reporting failures as [`Value::Error`]
pub fn eval(program: &Program, env: &Environment) -> Value {
    match Evaluator::new().evaluate_program(program, env) {
        Ok(value) => value,
        Err(error) => Value::Error(error.to_string()),
    }
}

/// Evaluates AST nodes to runtime values
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Number of user function calls currently executing
    call_depth: usize,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate every statement in order; the result is the value of the
    /// last statement, or of the first `return` reached
    pub fn evaluate_program(&mut self, program: &Program, env: &Environment) -> Result<Value> {
        let mut result = Value::NULL;

        for statement in &program.statements {
            match self.evaluate_statement(statement, env)? {
                Value::ReturnValue(value) => return Ok(*value),
                value => result = value,
            }
        }

        Ok(result)
    }

    /// Like a program, except that a `return` stays wrapped so it keeps
    /// escaping through enclosing blocks
    fn evaluate_block(&mut self, block: &BlockStatement, env: &Environment) -> Result<Value> {
        let mut result = Value::NULL;

        for statement in &block.statements {
            result = self.evaluate_statement(statement, env)?;
            if matches!(result, Value::ReturnValue(_)) {
                return Ok(result);
            }
        }

        Ok(result)
    }

    fn evaluate_statement(&mut self, statement: &Statement, env: &Environment) -> Result<Value> {
        match statement {
            Statement::Let(let_stmt) => {
                let value = self.evaluate_expression(&let_stmt.value, env)?;
                env.define(let_stmt.name.name.clone(), value);
                Ok(Value::NULL)
            }
            Statement::Return(return_stmt) => {
                let value = self.evaluate_expression(&return_stmt.value, env)?;
                Ok(Value::ReturnValue(Box::new(value)))
            }
            Statement::Expression(expr_stmt) => self.evaluate_expression(&expr_stmt.expression, env),
        }
    }

    pub fn evaluate_expression(&mut self, expression: &Expression, env: &Environment) -> Result<Value> {
        match expression {
            Expression::Integer(lit) => Ok(Value::Integer(lit.value)),
            Expression::Boolean(lit) => Ok(Value::boolean(lit.value)),
            Expression::String(lit) => Ok(Value::string(lit.value.as_str())),

            Expression::Identifier(ident) => env
                .get(&ident.name)
                .or_else(|| builtins::lookup(&ident.name))
                .ok_or_else(|| RuntimeError::identifier_not_found(ident.name.as_str())),

            Expression::Prefix(prefix) => {
                let operand = self.evaluate_expression(&prefix.operand, env)?;
                evaluate_prefix(prefix.operator, operand)
            }

            Expression::Infix(infix) => {
                let left = self.evaluate_expression(&infix.left, env)?;
                let right = self.evaluate_expression(&infix.right, env)?;
                evaluate_infix(infix.operator, &left, &right)
            }

            Expression::If(if_expr) => {
                let condition = self.evaluate_expression(&if_expr.condition, env)?;
                if condition.is_truthy() {
                    self.evaluate_block(&if_expr.consequence, env)
                } else if let Some(alternative) = &if_expr.alternative {
                    self.evaluate_block(alternative, env)
                } else {
                    Ok(Value::NULL)
                }
            }

            Expression::Function(literal) => Ok(Value::Function(Rc::new(Function {
                literal: Rc::clone(literal),
                closure: env.clone(),
            }))),

            Expression::Call(call) => {
                let callee = self.evaluate_expression(&call.callee, env)?;
                let arguments = self.evaluate_expressions(&call.arguments, env)?;
                self.apply_function(&callee, arguments)
            }

            Expression::Array(array) => {
                let elements = self.evaluate_expressions(&array.elements, env)?;
                Ok(Value::array(elements))
            }

            Expression::Index(index) => {
                let collection = self.evaluate_expression(&index.collection, env)?;
                let key = self.evaluate_expression(&index.index, env)?;
                evaluate_index(&collection, &key)
            }

            Expression::Hash(hash) => self.evaluate_hash_literal(hash, env),
        }
    }

    /// Evaluate left to right, stopping at the first error
    fn evaluate_expressions(
        &mut self,
        expressions: &[Expression],
        env: &Environment,
    ) -> Result<Vec<Value>> {
        expressions
            .iter()
            .map(|expression| self.evaluate_expression(expression, env))
            .collect()
    }

    fn evaluate_hash_literal(&mut self, hash: &HashLiteral, env: &Environment) -> Result<Value> {
        let mut pairs = IndexMap::with_capacity(hash.pairs.len());

        for (key_expression, value_expression) in &hash.pairs {
            let key = self.evaluate_expression(key_expression, env)?;
            let hash_key = key.hash_key().ok_or(RuntimeError::UnusableHashKey {
                found: key.type_name(),
            })?;
            let value = self.evaluate_expression(value_expression, env)?;

            pairs.insert(hash_key, HashPair { key, value });
        }

        Ok(Value::Hash(Rc::new(pairs)))
    }

    /// Call a function or built-in with already evaluated arguments
    pub fn apply_function(&mut self, callee: &Value, arguments: Vec<Value>) -> Result<Value> {
        match callee {
            Value::Function(function) => {
                let parameters = &function.literal.parameters;
                if parameters.len() != arguments.len() {
                    return Err(RuntimeError::WrongArity {
                        expected: parameters.len(),
                        found: arguments.len(),
                    });
                }

                let call_env = Environment::enclosed(&function.closure);
                for (parameter, argument) in parameters.iter().zip(arguments) {
                    call_env.define(parameter.name.clone(), argument);
                }

                self.call_depth += 1;
                debug!(
                    "calling fn({}) at depth {}",
                    parameters.len(),
                    self.call_depth
                );
                let result = self.evaluate_block(&function.literal.body, &call_env);
                self.call_depth -= 1;

                match result? {
                    Value::ReturnValue(value) => Ok(*value),
                    value => Ok(value),
                }
            }
            Value::Builtin(builtin) => {
                trace!("calling builtin `{}` with {} argument(s)", builtin.name, arguments.len());
                (builtin.function)(&arguments)
            }
            other => Err(RuntimeError::NotAFunction {
                found: other.type_name(),
            }),
        }
    }
}

fn evaluate_prefix(operator: PrefixOperator, operand: Value) -> Result<Value> {
    match operator {
        PrefixOperator::Bang => Ok(Value::boolean(!operand.is_truthy())),
        PrefixOperator::Minus => match operand {
            Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
            other => Err(RuntimeError::unknown_prefix_operator(
                operator,
                other.type_name(),
            )),
        },
    }
}

fn evaluate_infix(operator: InfixOperator, left: &Value, right: &Value) -> Result<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => evaluate_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => match operator {
            InfixOperator::Plus => Ok(Value::String(format!("{}{}", l, r))),
            _ => Err(RuntimeError::unknown_infix_operator(
                "STRING", operator, "STRING",
            )),
        },
        _ => match operator {
            InfixOperator::Equal => Ok(Value::boolean(left.identical(right))),
            InfixOperator::NotEqual => Ok(Value::boolean(!left.identical(right))),
            _ if left.type_name() != right.type_name() => Err(RuntimeError::type_mismatch(
                left.type_name(),
                operator,
                right.type_name(),
            )),
            _ => Err(RuntimeError::unknown_infix_operator(
                left.type_name(),
                operator,
                right.type_name(),
            )),
        },
    }
}

fn evaluate_integer_infix(operator: InfixOperator, left: i64, right: i64) -> Result<Value> {
    let value = match operator {
        InfixOperator::Plus => Value::Integer(left.wrapping_add(right)),
        InfixOperator::Minus => Value::Integer(left.wrapping_sub(right)),
        InfixOperator::Multiply => Value::Integer(left.wrapping_mul(right)),
        InfixOperator::Divide => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_div(right))
        }
        InfixOperator::Less => Value::boolean(left < right),
        InfixOperator::Greater => Value::boolean(left > right),
        InfixOperator::Equal => Value::boolean(left == right),
        InfixOperator::NotEqual => Value::boolean(left != right),
    };
    Ok(value)
}

fn evaluate_index(collection: &Value, index: &Value) -> Result<Value> {
    match (collection, index) {
        (Value::Array(elements), Value::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(Value::NULL)),
        (Value::Hash(pairs), key) => {
            let hash_key = key.hash_key().ok_or(RuntimeError::UnusableHashKey {
                found: key.type_name(),
            })?;
            Ok(pairs
                .get(&hash_key)
                .map(|pair| pair.value.clone())
                .unwrap_or(Value::NULL))
        }
        _ => Err(RuntimeError::IndexNotSupported {
            found: collection.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_parser::parse_program;

    fn run(input: &str) -> Value {
        let program = parse_program(input).unwrap();
        eval(&program, &Environment::new())
    }

    #[test]
    fn test_program_result_is_last_statement() {
        assert_eq!(run("1; 2; 3"), Value::Integer(3));
        assert_eq!(run("let x = 1;"), Value::NULL);
        assert_eq!(run(""), Value::NULL);
    }

    #[test]
    fn test_return_is_unwrapped_at_top_level() {
        assert_eq!(run("return 10; 9;"), Value::Integer(10));
        assert_eq!(run("9; return 2 * 5; 9;"), Value::Integer(10));
    }

    #[test]
    fn test_call_depth_is_restored_after_errors() {
        let program = parse_program("let f = fn() { 1 + true }; f()").unwrap();
        let mut evaluator = Evaluator::new();

        assert!(evaluator.evaluate_program(&program, &Environment::new()).is_err());
        assert_eq!(evaluator.call_depth, 0);
    }
}
