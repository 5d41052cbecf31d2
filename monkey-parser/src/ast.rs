// Monkey AST Definitions
// Statement and expression nodes with canonical source reconstruction

use std::rc::Rc;

/// Capabilities shared by every node: the literal of the token that
/// introduces it, and (through `Display`) its canonical source text.
pub trait Node: std::fmt::Display {
    fn token_literal(&self) -> String;
}

/// Root of a parsed program
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub name: Identifier,
    pub value: Expression,
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Expression,
}

/// A bare expression used as a statement
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

/// `{ ... }` body of an `if` branch or a function
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    String(StringLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    /// Shared so that function values can hold on to their definition
    Function(Rc<FunctionLiteral>),
    Call(CallExpression),
    Array(ArrayLiteral),
    Index(IndexExpression),
    Hash(HashLiteral),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Bang,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Less,
    Greater,
    Equal,
    NotEqual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub operator: PrefixOperator,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub operator: InfixOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// If expression with optional else branch
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpression {
    pub collection: Box<Expression>,
    pub index: Box<Expression>,
}

/// Hash literal; pairs keep their source order
#[derive(Debug, Clone, PartialEq)]
pub struct HashLiteral {
    pub pairs: Vec<(Expression, Expression)>,
}

impl PrefixOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixOperator::Bang => "!",
            PrefixOperator::Minus => "-",
        }
    }
}

impl InfixOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfixOperator::Plus => "+",
            InfixOperator::Minus => "-",
            InfixOperator::Multiply => "*",
            InfixOperator::Divide => "/",
            InfixOperator::Less => "<",
            InfixOperator::Greater => ">",
            InfixOperator::Equal => "==",
            InfixOperator::NotEqual => "!=",
        }
    }
}

// Token literals

impl Node for Program {
    fn token_literal(&self) -> String {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or_default()
    }
}

impl Node for Statement {
    fn token_literal(&self) -> String {
        match self {
            Statement::Let(_) => "let".to_string(),
            Statement::Return(_) => "return".to_string(),
            Statement::Expression(stmt) => stmt.expression.token_literal(),
        }
    }
}

impl Node for BlockStatement {
    fn token_literal(&self) -> String {
        "{".to_string()
    }
}

impl Node for Expression {
    fn token_literal(&self) -> String {
        match self {
            Expression::Identifier(ident) => ident.name.clone(),
            Expression::Integer(lit) => lit.value.to_string(),
            Expression::Boolean(lit) => lit.value.to_string(),
            Expression::String(lit) => lit.value.clone(),
            Expression::Prefix(prefix) => prefix.operator.as_str().to_string(),
            Expression::Infix(infix) => infix.operator.as_str().to_string(),
            Expression::If(_) => "if".to_string(),
            Expression::Function(_) => "fn".to_string(),
            Expression::Call(_) => "(".to_string(),
            Expression::Array(_) => "[".to_string(),
            Expression::Index(_) => "[".to_string(),
            Expression::Hash(_) => "{".to_string(),
        }
    }
}

// Canonical source reconstruction. The output re-parses to an equivalent
// tree: strings keep their quotes, blocks keep their braces, and an
// expression statement followed by another statement is closed with `;`.

fn write_statements(
    f: &mut std::fmt::Formatter<'_>,
    statements: &[Statement],
) -> std::fmt::Result {
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", stmt)?;
        if matches!(stmt, Statement::Expression(_)) && i + 1 < statements.len() {
            write!(f, ";")?;
        }
    }
    Ok(())
}

fn write_separated<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter<'_>,
    items: &[T],
) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

impl std::fmt::Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

impl std::fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "return {};", self.value)
    }
}

impl std::fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl std::fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ ")?;
        write_statements(f, &self.statements)?;
        write!(f, " }}")
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::Integer(lit) => write!(f, "{}", lit.value),
            Expression::Boolean(lit) => write!(f, "{}", lit.value),
            Expression::String(lit) => write!(f, "\"{}\"", lit.value),
            Expression::Prefix(prefix) => write!(f, "{}", prefix),
            Expression::Infix(infix) => write!(f, "{}", infix),
            Expression::If(if_expr) => write!(f, "{}", if_expr),
            Expression::Function(func) => write!(f, "{}", func),
            Expression::Call(call) => write!(f, "{}", call),
            Expression::Array(array) => write!(f, "{}", array),
            Expression::Index(index) => write!(f, "{}", index),
            Expression::Hash(hash) => write!(f, "{}", hash),
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.operand)
    }
}

impl std::fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl std::fmt::Display for IfExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if ({}) {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {}", alternative)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fn(")?;
        write_separated(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

impl std::fmt::Display for CallExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.callee)?;
        write_separated(f, &self.arguments)?;
        write!(f, ")")
    }
}

impl std::fmt::Display for ArrayLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        write_separated(f, &self.elements)?;
        write!(f, "]")
    }
}

impl std::fmt::Display for IndexExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}[{}])", self.collection, self.index)
    }
}

impl std::fmt::Display for HashLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Expression {
        Expression::Identifier(Identifier::new(name))
    }

    #[test]
    fn test_let_statement_display() {
        let program = Program {
            statements: vec![Statement::Let(LetStatement {
                name: Identifier::new("myVar"),
                value: ident("anotherVar"),
            })],
        };

        assert_eq!(program.to_string(), "let myVar = anotherVar;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_expression_statements_are_separated() {
        let program = Program {
            statements: vec![
                Statement::Expression(ExpressionStatement {
                    expression: ident("a"),
                }),
                Statement::Expression(ExpressionStatement {
                    expression: Expression::Array(ArrayLiteral { elements: vec![] }),
                }),
            ],
        };

        assert_eq!(program.to_string(), "a; []");
    }

    #[test]
    fn test_nested_expression_display() {
        let expr = Expression::If(IfExpression {
            condition: Box::new(Expression::Infix(InfixExpression {
                operator: InfixOperator::Less,
                left: Box::new(ident("x")),
                right: Box::new(ident("y")),
            })),
            consequence: BlockStatement {
                statements: vec![Statement::Return(ReturnStatement {
                    value: Expression::String(StringLiteral {
                        value: "lt".to_string(),
                    }),
                })],
            },
            alternative: Some(BlockStatement::default()),
        });

        assert_eq!(
            expr.to_string(),
            "if ((x < y)) { return \"lt\"; } else { }"
        );
        assert_eq!(expr.token_literal(), "if");
    }
}
