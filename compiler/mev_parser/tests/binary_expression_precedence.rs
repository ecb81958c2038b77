use mev_ast::{BinaryOperator, Node};
use mev_lexer::lex;
use mev_parser::Parser;
use pretty_assertions::assert_eq;

fn parse(input: &str) -> Node {
    Parser::new(lex(input).unwrap()).parse().unwrap()
}

fn num(value: f64) -> Node {
    Node::number(value)
}

#[test]
fn test_operator_precedence() {
    // 2 + (3 * 4), not (2 + 3) * 4
    assert_eq!(
        parse("2 + 3 * 4"),
        Node::binary(
            BinaryOperator::Add,
            num(2.0),
            Node::binary(BinaryOperator::Mul, num(3.0), num(4.0))
        )
    );

    // (1 - 2) + 3
    assert_eq!(
        parse("1 - 2 + 3"),
        Node::binary(
            BinaryOperator::Add,
            Node::binary(BinaryOperator::Sub, num(1.0), num(2.0)),
            num(3.0)
        )
    );
}

#[test]
fn test_every_level_mixed() {
    let cases = [
        ("1 + 2 * 3 - 4 / 2", 5.0),
        ("10 % 4 + 1", 3.0),
        ("2 * 3 % 4", 2.0),
        ("2 ^ 2 * 3", 12.0),
        ("3 * 2 ^ 2", 12.0),
        ("2 ^ 2 ^ 3", 256.0),
        ("1 - 2 - 3", -4.0),
        ("100 / 10 / 5", 2.0),
        ("1 + 2 ^ 3 * 2 - 1", 16.0),
        ("(1 + 2) ^ 2", 9.0),
    ];
    for (input, expected) in cases {
        assert_eq!(parse(input).evaluate(), expected, "{input}");
    }
}

#[test]
fn test_spaces_do_not_matter() {
    assert_eq!(parse("1+2*3"), parse("  1 +\t2\n* 3 "));
}
