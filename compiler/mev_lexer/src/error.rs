//! Errors produced while scanning an expression.

use crate::token::Span;

/// A fatal lexing failure. Lexing stops at the first one and no partial
/// token list is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// The expression was zero-length.
    #[error("the expression is empty")]
    EmptyInput,

    /// The expression contains a fullwidth or ideographic character.
    #[error("unsupported character '{ch}' at offset {offset}, only ASCII expressions are accepted")]
    UnsupportedCharset {
        /// The first offending character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },

    /// A character that cannot start any token.
    #[error("'{ch}' is not supported")]
    UnsupportedToken {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },
}

impl LexError {
    /// Location of the offending character, if the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::EmptyInput => None,
            LexError::UnsupportedCharset { ch, offset } | LexError::UnsupportedToken { ch, offset } => {
                Some(Span::new(*offset, offset + ch.len_utf8()))
            }
        }
    }
}
