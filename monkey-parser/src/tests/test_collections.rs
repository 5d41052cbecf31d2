use crate::{ast::*, parse_program};

fn single_expression(input: &str) -> Expression {
    let mut program = parse_program(input).unwrap();
    assert_eq!(program.statements.len(), 1, "input: {}", input);
    match program.statements.remove(0) {
        Statement::Expression(stmt) => stmt.expression,
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

fn extract_array(expr: Expression) -> ArrayLiteral {
    match expr {
        Expression::Array(array) => array,
        other => panic!("Expected array, got {:?}", other),
    }
}

fn extract_hash(expr: Expression) -> HashLiteral {
    match expr {
        Expression::Hash(hash) => hash,
        other => panic!("Expected hash, got {:?}", other),
    }
}

// === ARRAY TESTS ===

#[test]
fn test_parse_array_literal() {
    let array = extract_array(single_expression("[1, 2 * 2, 3 + 3]"));

    assert_eq!(array.elements.len(), 3);
    assert_eq!(array.elements[0].to_string(), "1");
    assert_eq!(array.elements[1].to_string(), "(2 * 2)");
    assert_eq!(array.elements[2].to_string(), "(3 + 3)");
}

#[test]
fn test_parse_empty_array() {
    let array = extract_array(single_expression("[]"));
    assert!(array.elements.is_empty());
}

#[test]
fn test_parse_nested_array() {
    let array = extract_array(single_expression("[[1], [], [2, [3]]]"));

    assert_eq!(array.elements.len(), 3);
    assert_eq!(array.elements[2].to_string(), "[2, [3]]");
}

#[test]
fn test_parse_index_expression() {
    match single_expression("myArray[1 + 1]") {
        Expression::Index(index) => {
            assert_eq!(index.collection.to_string(), "myArray");
            assert_eq!(index.index.to_string(), "(1 + 1)");
        }
        other => panic!("Expected index expression, got {:?}", other),
    }
}

// === HASH TESTS ===

#[test]
fn test_parse_hash_with_string_keys() {
    let hash = extract_hash(single_expression(r#"{"one": 1, "two": 2, "three": 3}"#));

    let pairs: Vec<(String, String)> = hash
        .pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("\"one\"".to_string(), "1".to_string()),
            ("\"two\"".to_string(), "2".to_string()),
            ("\"three\"".to_string(), "3".to_string()),
        ]
    );
}

#[test]
fn test_parse_empty_hash() {
    let hash = extract_hash(single_expression("{}"));
    assert!(hash.pairs.is_empty());
}

#[test]
fn test_parse_hash_with_mixed_keys() {
    let hash = extract_hash(single_expression("{1: true, true: \"yes\", x: y}"));

    assert_eq!(hash.pairs.len(), 3);
    assert!(matches!(hash.pairs[0].0, Expression::Integer(_)));
    assert!(matches!(hash.pairs[1].0, Expression::Boolean(_)));
    assert!(matches!(hash.pairs[2].0, Expression::Identifier(_)));
}

#[test]
fn test_parse_hash_with_expression_values() {
    let hash = extract_hash(single_expression(
        r#"{"one": 0 + 1, "two": 10 - 8, "three": 15 / 5}"#,
    ));

    let values: Vec<String> = hash.pairs.iter().map(|(_, v)| v.to_string()).collect();
    assert_eq!(values, vec!["(0 + 1)", "(10 - 8)", "(15 / 5)"]);
}

#[test]
fn test_hash_display_keeps_source_order() {
    let program = parse_program(r#"{"b": 2, "a": 1}"#).unwrap();
    assert_eq!(program.to_string(), r#"{"b": 2, "a": 1}"#);
}
