// Whole-program parsing tests
// Exercise the public API on realistic Monkey programs

use monkey_parser::{ast::*, parse, parse_program, Lexer, Parser, TokenKind};

const FIBONACCI: &str = r#"
let fibonacci = fn(x) {
    if (x < 2) {
        return x;
    } else {
        fibonacci(x - 1) + fibonacci(x - 2);
    }
};

let results = [fibonacci(0), fibonacci(10)];
puts(results);
"#;

const MAP_REDUCE: &str = r#"
let map = fn(arr, f) {
    let iter = fn(arr, accumulated) {
        if (len(arr) == 0) {
            accumulated
        } else {
            iter(rest(arr), push(accumulated, f(first(arr))));
        }
    };
    iter(arr, []);
};

let people = [{"name": "Alice", "age": 24}, {"name": "Anna", "age": 28}];
map(people, fn(p) { p["name"] });
"#;

#[test]
fn test_parse_fibonacci_program() {
    let program = parse_program(FIBONACCI).unwrap();

    assert_eq!(program.statements.len(), 3);
    match &program.statements[0] {
        Statement::Let(let_stmt) => {
            assert_eq!(let_stmt.name.name, "fibonacci");
            match &let_stmt.value {
                Expression::Function(func) => {
                    assert_eq!(func.parameters, vec![Identifier::new("x")]);
                    assert_eq!(func.body.statements.len(), 1);
                }
                other => panic!("Expected function literal, got {:?}", other),
            }
        }
        other => panic!("Expected let statement, got {:?}", other),
    }
}

#[test]
fn test_parse_map_reduce_program() {
    let program = parse_program(MAP_REDUCE).unwrap();

    assert_eq!(program.statements.len(), 3);
    assert_eq!(
        program.statements[2].to_string(),
        "map(people, fn(p) { (p[\"name\"]) })"
    );
}

#[test]
fn test_printed_programs_reparse() {
    for source in [FIBONACCI, MAP_REDUCE] {
        let program = parse_program(source).unwrap();
        let reparsed = parse_program(&program.to_string()).unwrap();
        assert_eq!(program, reparsed);
    }
}

#[test]
fn test_parse_returns_partial_program_with_errors() {
    let (program, errors) = parse("let x = ; let y = 2; y");

    assert_eq!(errors, vec!["no parse rule for ;".to_string()]);
    assert_eq!(program.to_string(), "let y = 2; y");
}

#[test]
fn test_parser_driven_from_lexer() {
    let mut parser = Parser::new(Lexer::new("let five = 5;"));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "let five = 5;");
}

#[test]
fn test_lexer_is_an_iterator_of_tokens() {
    let kinds: Vec<TokenKind> = Lexer::new("x != 10;").map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::NotEq,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}
