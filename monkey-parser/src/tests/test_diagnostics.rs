use crate::{parse, parse_program, parse_program_with_diagnostics, DiagnosticError, TokenKind};
use pretty_assertions::assert_eq;

fn errors_for(input: &str) -> Vec<String> {
    let (_, errors) = parse(input);
    errors
}

#[test]
fn test_errors_are_reported_in_order() {
    let (program, errors) = parse("let x = 5; let = 10; let 838383;");

    assert_eq!(
        errors,
        vec![
            "expected next token to be IDENT, got = instead".to_string(),
            "no parse rule for =".to_string(),
            "expected next token to be IDENT, got INT instead".to_string(),
        ]
    );
    // `let x = 5`, `10` and `838383` survive
    assert_eq!(program.statements.len(), 3);
}

#[test]
fn test_missing_let_name() {
    let (program, errors) = parse("let = 5;");

    assert_eq!(errors.len(), 2);
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_missing_assign() {
    assert_eq!(
        errors_for("let x 5;")[0],
        "expected next token to be =, got INT instead"
    );
}

#[test]
fn test_integer_overflow() {
    assert_eq!(
        errors_for("9223372036854775808"),
        vec!["could not parse 9223372036854775808 as integer".to_string()]
    );
}

#[test]
fn test_unclosed_delimiters() {
    assert_eq!(
        errors_for("(1 + 2"),
        vec!["expected next token to be ), got EOF instead".to_string()]
    );
    assert_eq!(
        errors_for("[1, 2"),
        vec!["expected next token to be ], got EOF instead".to_string()]
    );
    assert_eq!(
        errors_for("add(1, 2"),
        vec!["expected next token to be ), got EOF instead".to_string()]
    );
}

#[test]
fn test_illegal_token_has_no_parse_rule() {
    assert_eq!(
        errors_for("@"),
        vec!["no parse rule for ILLEGAL".to_string()]
    );
}

#[test]
fn test_hash_pair_requires_colon() {
    assert_eq!(
        errors_for("{1 2}")[0],
        "expected next token to be :, got INT instead"
    );
}

#[test]
fn test_function_parameters_must_be_identifiers() {
    assert_eq!(
        errors_for("fn(1) {}")[0],
        "expected next token to be IDENT, got INT instead"
    );
}

#[test]
fn test_if_requires_parenthesised_condition() {
    assert_eq!(
        errors_for("if x { 1 }")[0],
        "expected next token to be (, got IDENT instead"
    );
}

#[test]
fn test_structured_diagnostics_carry_spans() {
    let (_, collector) = parse_program_with_diagnostics("let = 5;");

    match &collector.diagnostics()[0] {
        DiagnosticError::UnexpectedToken {
            expected,
            found,
            span,
        } => {
            assert_eq!(*expected, TokenKind::Ident);
            assert_eq!(*found, TokenKind::Assign);
            assert_eq!(span.offset(), 4);
            assert_eq!(span.len(), 1);
        }
        other => panic!("Expected unexpected token diagnostic, got {:?}", other),
    }
}

#[test]
fn test_parse_program_fails_with_all_diagnostics() {
    let error = parse_program("let x 5; let y 6;").unwrap_err();

    assert_eq!(error.diagnostics.len(), 2);
    assert_eq!(error.src, "let x 5; let y 6;");
    assert_eq!(error.to_string(), "parsing failed with 2 error(s)");
    assert_eq!(
        error.messages()[1],
        "expected next token to be =, got INT instead"
    );
}

#[test]
fn test_clean_input_has_no_errors() {
    assert!(errors_for("let add = fn(a, b) { a + b }; add(1, 2)").is_empty());
}
