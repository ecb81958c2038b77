use mev_lexer::lex;
use mev_parser::{ParseError, Parser, SyntaxError};
use proptest::prelude::*;

#[allow(dead_code)]
fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

#[test]
fn test_example_expression_reports_unbound_variable() {
    init_test_logger();
    let mut parser = Parser::new(lex("(1+2)+(3+FOUR*4)*random()").unwrap());
    parser.set_func("random", |_| 0.25);

    match parser.parse() {
        Err(ParseError::UnboundVariable { name, .. }) => assert_eq!(name, "FOUR"),
        other => panic!("expected an unbound variable, got {other:?}"),
    }
}

#[test]
fn test_recovered_tree_still_evaluates() {
    init_test_logger();
    let mut parser = Parser::new(lex("(1+2)+(3+FOUR*4)*random()").unwrap());
    parser.set_func("random", |_| 1.0);

    let parsed = parser.parse_recovering();
    assert!(parsed.error.is_some());
    assert_eq!(parsed.tree.map(|tree| tree.evaluate()), Some(6.0));
}

#[test]
fn test_error_renders_against_source() {
    let source = "max(1, 2";
    let err = Parser::new(lex(source).unwrap()).parse().unwrap_err();
    assert!(matches!(err, ParseError::Syntax(SyntaxError::UnclosedCall { .. })));

    let rendered = err.render(source);
    assert!(rendered.starts_with("error: function 'max' expects ')' to close parameters, got 'eof'"));
    assert!(rendered.contains("1 | max(1, 2"));
}

fn arb_operand() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        Just("{X}".to_string()),
        Just("Y".to_string()),
    ]
}

fn arb_expression() -> impl Strategy<Value = String> {
    arb_operand().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), "[-+*/%^]", inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.clone().prop_map(|e| format!("-{e}")),
            (inner.clone(), inner).prop_map(|(a, b)| format!("max({a}, {b})")),
        ]
    })
}

proptest! {
    #[test]
    fn prop_parser_never_panics(input in "[ 0-9a-zA-Z(){},.+*/%^-]{0,40}") {
        if let Ok(tokens) = lex(&input) {
            let parsed = Parser::new(tokens).parse_recovering();
            if parsed.error.is_none() {
                prop_assert!(parsed.tree.is_some());
            }
        }
    }

    #[test]
    fn prop_valid_expressions_parse(input in arb_expression()) {
        let mut parser = Parser::new(lex(&input).unwrap());
        parser.set_var("X", 2.0);
        parser.set_var("Y", 3.0);
        prop_assert!(parser.parse().is_ok(), "failed on {}", input);
    }

    #[test]
    fn prop_printed_tree_reparses_identically(input in arb_expression()) {
        let mut parser = Parser::new(lex(&input).unwrap());
        parser.set_var("X", 2.0);
        parser.set_var("Y", 3.0);
        let tree = parser.parse().unwrap();
        // Function nodes compare by callback identity, so only their output is checked.
        let printed = tree.to_string();

        let mut again = Parser::new(lex(&printed).unwrap());
        again.set_var("X", 2.0);
        again.set_var("Y", 3.0);
        let reparsed = again.parse().unwrap();
        prop_assert_eq!(reparsed.to_string(), printed);
    }
}
