//! Lexer implementation for mev expressions
//! Converts expression text into a list of tokens for the parser

use logos::Logos;
use std::ops::Range;

use crate::error::LexError;
use crate::token::{Span, Token, TokenKind};
use crate::LogosToken;

/// Lexes a whole expression.
///
/// Fails on the first problem; no partial token list is ever returned.
/// The list has no trailing end-of-input token.
pub fn lex(expression: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(expression).collect()
}

/// Returns true for the fullwidth forms (U+FF01..=U+FF5E) and the
/// ideographic space (U+3000).
pub fn is_unsupported_charset(c: char) -> bool {
    matches!(c, '\u{FF01}'..='\u{FF5E}' | '\u{3000}')
}

/// The lexer state: one token per call to [`Lexer::next_token`].
pub struct Lexer<'a> {
    /// The expression being lexed
    source: &'a str,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
    /// Whether the whole-input checks have run
    checked: bool,
    /// Set once the input is exhausted or an error was reported
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given expression
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: LogosToken::lexer(source),
            checked: false,
            done: false,
        }
    }

    /// Whole-input checks that run before the first token is scanned.
    fn check_input(&self) -> Result<(), LexError> {
        if self.source.is_empty() {
            return Err(LexError::EmptyInput);
        }
        match self
            .source
            .char_indices()
            .find(|(_, c)| is_unsupported_charset(*c))
        {
            Some((offset, ch)) => Err(LexError::UnsupportedCharset { ch, offset }),
            None => Ok(()),
        }
    }

    /// Convert a LogosToken to our semantic TokenKind
    fn convert_token(&self, logos_token: LogosToken, span: Range<usize>) -> Token {
        let kind = match logos_token {
            LogosToken::LeftParen => TokenKind::LeftParen,
            LogosToken::RightParen => TokenKind::RightParen,
            LogosToken::LeftBrace => TokenKind::LeftBrace,
            LogosToken::RightBrace => TokenKind::RightBrace,
            LogosToken::Comma => TokenKind::Comma,
            LogosToken::Number => TokenKind::Number,
            LogosToken::Lower => TokenKind::Function,
            LogosToken::Upper => TokenKind::Variable,
            LogosToken::Plus => TokenKind::Add,
            LogosToken::Minus => TokenKind::Sub,
            LogosToken::Star => TokenKind::Mul,
            LogosToken::Slash => TokenKind::Quo,
            LogosToken::Percent => TokenKind::Rem,
            LogosToken::Caret | LogosToken::DoubleStar => TokenKind::Pow,
            // Skipped by the automaton, never reaches here
            LogosToken::Whitespace => TokenKind::Illegal,
        };
        Token::new(
            kind,
            &self.source[span.clone()],
            Span::new(span.start, span.end),
        )
    }

    /// Build the illegal token for an unmatched position.
    fn illegal_token(&self, span: Range<usize>) -> Token {
        let ch = self.source[span.start..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Token::new(
            TokenKind::Illegal,
            ch.to_string(),
            Span::new(span.start, span.start + ch.len_utf8()),
        )
    }

    /// Get the next token from the expression
    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        if self.done {
            return None;
        }

        if !self.checked {
            self.checked = true;
            if let Err(err) = self.check_input() {
                lex_debug!("rejecting expression: {err}");
                self.done = true;
                return Some(Err(err));
            }
        }

        let result = match self.inner.next() {
            None => {
                self.done = true;
                return None;
            }
            Some(result) => result,
        };
        let span = self.inner.span();

        match result {
            Ok(logos_token) => {
                let token = self.convert_token(logos_token, span);
                lex_trace!("scanned {token}");
                Some(Ok(token))
            }
            Err(()) => {
                let token = self.illegal_token(span);
                lex_debug!("illegal token {token}, aborting");
                self.done = true;
                Some(Err(unsupported_token(&token)))
            }
        }
    }
}

fn unsupported_token(token: &Token) -> LexError {
    LexError::UnsupportedToken {
        ch: token.text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
        offset: token.span.start,
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

// Include the test module
#[cfg(test)]
mod tests;
