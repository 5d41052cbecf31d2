use crate::{ast::*, parse_program};

fn single_expression(input: &str) -> Expression {
    let mut program = parse_program(input).unwrap();
    assert_eq!(program.statements.len(), 1, "input: {}", input);
    match program.statements.remove(0) {
        Statement::Expression(stmt) => stmt.expression,
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_identifier_expression() {
    match single_expression("foobar;") {
        Expression::Identifier(ident) => assert_eq!(ident.name, "foobar"),
        other => panic!("Expected identifier, got {:?}", other),
    }
}

#[test]
fn test_integer_literal() {
    match single_expression("5;") {
        Expression::Integer(lit) => assert_eq!(lit.value, 5),
        other => panic!("Expected integer, got {:?}", other),
    }

    match single_expression("9223372036854775807") {
        Expression::Integer(lit) => assert_eq!(lit.value, i64::MAX),
        other => panic!("Expected integer, got {:?}", other),
    }
}

#[test]
fn test_boolean_literals() {
    for (input, expected) in [("true;", true), ("false;", false)] {
        match single_expression(input) {
            Expression::Boolean(lit) => assert_eq!(lit.value, expected),
            other => panic!("Expected boolean, got {:?}", other),
        }
    }
}

#[test]
fn test_string_literal() {
    match single_expression(r#""hello world";"#) {
        Expression::String(lit) => assert_eq!(lit.value, "hello world"),
        other => panic!("Expected string, got {:?}", other),
    }
}

#[test]
fn test_prefix_expressions() {
    let cases = [
        ("!5;", PrefixOperator::Bang, "5"),
        ("-15;", PrefixOperator::Minus, "15"),
        ("!true;", PrefixOperator::Bang, "true"),
        ("-x", PrefixOperator::Minus, "x"),
    ];

    for (input, operator, operand) in cases {
        match single_expression(input) {
            Expression::Prefix(prefix) => {
                assert_eq!(prefix.operator, operator);
                assert_eq!(prefix.operand.to_string(), operand);
            }
            other => panic!("Expected prefix expression for '{}', got {:?}", input, other),
        }
    }
}

#[test]
fn test_infix_expressions() {
    let cases = [
        ("5 + 5;", InfixOperator::Plus),
        ("5 - 5;", InfixOperator::Minus),
        ("5 * 5;", InfixOperator::Multiply),
        ("5 / 5;", InfixOperator::Divide),
        ("5 > 5;", InfixOperator::Greater),
        ("5 < 5;", InfixOperator::Less),
        ("5 == 5;", InfixOperator::Equal),
        ("5 != 5;", InfixOperator::NotEqual),
    ];

    for (input, operator) in cases {
        match single_expression(input) {
            Expression::Infix(infix) => {
                assert_eq!(infix.operator, operator);
                assert_eq!(*infix.left, Expression::Integer(IntegerLiteral { value: 5 }));
                assert_eq!(*infix.right, Expression::Integer(IntegerLiteral { value: 5 }));
            }
            other => panic!("Expected infix expression for '{}', got {:?}", input, other),
        }
    }
}

#[test]
fn test_token_literals() {
    assert_eq!(single_expression("foo").token_literal(), "foo");
    assert_eq!(single_expression("42").token_literal(), "42");
    assert_eq!(single_expression("-1").token_literal(), "-");
    assert_eq!(single_expression("1 == 2").token_literal(), "==");
    assert_eq!(single_expression("fn() {}").token_literal(), "fn");
}
