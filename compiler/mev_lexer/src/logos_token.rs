use logos::Logos;

/// Raw token recognised by the logos automaton.
///
/// Anything that matches none of these patterns surfaces as a logos error
/// and becomes an illegal token in [`crate::Lexer`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LogosToken {
    // Delimiters
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,

    // Digits and dots, greedy. `1.2.3` is accepted here and only rejected
    // when the parser converts it.
    #[regex(r"[0-9][0-9.]*")]
    Number,

    // Function names
    #[regex(r"[a-z]+")]
    Lower,
    // Variable names
    #[regex(r"[A-Z]+")]
    Upper,

    // Operators (multi-char first)
    #[token("**")]
    DoubleStar,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,

    // Whitespace (skipped)
    #[regex(r"\s+", logos::skip)]
    Whitespace,
}
