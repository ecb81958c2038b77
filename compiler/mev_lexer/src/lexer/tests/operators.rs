use super::super::*;
use crate::token::TokenKind;
use pretty_assertions::assert_eq;

#[test]
fn test_single_char_operators() {
    let tokens = lex("+-*/%^,").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Add,
            TokenKind::Sub,
            TokenKind::Mul,
            TokenKind::Quo,
            TokenKind::Rem,
            TokenKind::Pow,
            TokenKind::Comma,
        ]
    );
}

#[test]
fn test_double_star_is_pow() {
    let tokens = lex("2**3").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Pow);
    assert_eq!(tokens[1].text, "**");
    assert_eq!(tokens[1].span, Span::new(1, 3));
}

#[test]
fn test_triple_star() {
    let tokens = lex("2***3").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![TokenKind::Number, TokenKind::Pow, TokenKind::Mul, TokenKind::Number]
    );
}

#[test]
fn test_star_space_star_is_two_muls() {
    let tokens = lex("2* *3").unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Mul);
    assert_eq!(tokens[2].kind, TokenKind::Mul);
}

#[test]
fn test_unknown_character_aborts() {
    assert_eq!(
        lex("1 + 2 = 3"),
        Err(LexError::UnsupportedToken { ch: '=', offset: 6 })
    );
}

#[test]
fn test_lone_dot_is_illegal() {
    assert_eq!(
        lex(".5"),
        Err(LexError::UnsupportedToken { ch: '.', offset: 0 })
    );
}

#[test]
fn test_iterator_stops_after_error() {
    let mut lexer = Lexer::new("1 $ 2");

    assert!(matches!(lexer.next(), Some(Ok(_))));
    assert!(matches!(lexer.next(), Some(Err(LexError::UnsupportedToken { ch: '$', .. }))));
    assert!(lexer.next().is_none());
}
