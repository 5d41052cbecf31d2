//! Array and hash literals and index expressions

use crate::{InterpreterSession, Value};

fn ints(values: &[i64]) -> Value {
    Value::array(values.iter().map(|n| Value::Integer(*n)).collect())
}

#[test]
fn test_array_literals() {
    let mut session = InterpreterSession::new();

    session
        .assert_evaluates_to_value("[1, 2 * 2, 3 + 3]", ints(&[1, 4, 6]))
        .unwrap();
    session.assert_evaluates_to_value("[]", ints(&[])).unwrap();
}

#[test]
fn test_array_index_expressions() {
    let mut session = InterpreterSession::new();
    let cases = [
        ("[1, 2, 3][0]", Value::Integer(1)),
        ("[1, 2, 3][1]", Value::Integer(2)),
        ("[1, 2, 3][2]", Value::Integer(3)),
        ("let i = 0; [1][i];", Value::Integer(1)),
        ("[1, 2, 3][1 + 1];", Value::Integer(3)),
        ("let myArray = [1, 2, 3]; myArray[2];", Value::Integer(3)),
        (
            "let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
            Value::Integer(6),
        ),
        (
            "let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]",
            Value::Integer(2),
        ),
        ("[1, 2, 3][3]", Value::NULL),
        ("[1, 2, 3][9]", Value::NULL),
        ("[1, 2, 3][-1]", Value::NULL),
    ];

    for (input, expected) in cases {
        session
            .assert_evaluates_to_value(input, expected)
            .unwrap_or_else(|e| panic!("{}: {}", input, e));
    }
}

#[test]
fn test_hash_literals() {
    let mut session = InterpreterSession::new();

    let value = session
        .evaluate(
            r#"let two = "two";
               {
                   "one": 10 - 9,
                   two: 1 + 1,
                   "thr" + "ee": 6 / 2,
                   4: 4,
                   true: 5,
                   false: 6
               }"#,
        )
        .unwrap();

    match value {
        Value::Hash(pairs) => {
            let expected = [
                (Value::string("one"), 1),
                (Value::string("two"), 2),
                (Value::string("three"), 3),
                (Value::Integer(4), 4),
                (Value::TRUE, 5),
                (Value::FALSE, 6),
            ];
            assert_eq!(pairs.len(), expected.len());

            for (key, value) in expected {
                let pair = pairs
                    .get(&key.hash_key().unwrap())
                    .unwrap_or_else(|| panic!("missing key {}", key));
                assert_eq!(pair.key, key);
                assert_eq!(pair.value, Value::Integer(value));
            }
        }
        other => panic!("Expected hash, got {:?}", other),
    }
}

#[test]
fn test_hash_keeps_insertion_order_and_last_duplicate() {
    let mut session = InterpreterSession::new();

    let value = session
        .evaluate(r#"{"b": 1, "a": 2, "b": 3}"#)
        .unwrap();
    assert_eq!(value.to_string(), "{b: 3, a: 2}");
}

#[test]
fn test_hash_index_expressions() {
    let mut session = InterpreterSession::new();
    let cases = [
        (r#"{"foo": 5}["foo"]"#, Value::Integer(5)),
        (r#"{"foo": 5}["bar"]"#, Value::NULL),
        (r#"let key = "foo"; {"foo": 5}[key]"#, Value::Integer(5)),
        (r#"{}["foo"]"#, Value::NULL),
        ("{5: 5}[5]", Value::Integer(5)),
        ("{true: 5}[true]", Value::Integer(5)),
        ("{false: 5}[false]", Value::Integer(5)),
        ("{1: 5}[true]", Value::NULL),
        (r#"{"a": 1}["a"]"#, Value::Integer(1)),
    ];

    for (input, expected) in cases {
        session
            .assert_evaluates_to_value(input, expected)
            .unwrap_or_else(|e| panic!("{}: {}", input, e));
    }
}

#[test]
fn test_same_string_evaluated_twice_gives_same_key() {
    let mut session = InterpreterSession::new();

    let first = session.evaluate(r#""name""#).unwrap();
    let second = session.evaluate(r#""na" + "me""#).unwrap();
    assert_eq!(first.hash_key(), second.hash_key());
    assert!(first.hash_key().is_some());
}

#[test]
fn test_collection_inspect() {
    let mut session = InterpreterSession::new();

    let value = session
        .evaluate(r#"[1, "two", [true], {"k": if (false) { 1 }}]"#)
        .unwrap();
    assert_eq!(value.to_string(), "[1, two, [true], {k: null}]");
}
