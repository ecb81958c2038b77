//! Tests for the parser module

use super::*;
use mev_lexer::lex;


fn parser_for(input: &str) -> Parser {
    crate::tests::init_test_logger();
    Parser::new(lex(input).expect("test input should lex"))
}

fn parse_str(input: &str) -> Result<Node, ParseError> {
    parser_for(input).parse()
}

fn recover_str(input: &str) -> Parsed {
    parser_for(input).parse_recovering()
}
