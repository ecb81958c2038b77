//! mev lexical analyzer
//!
//! Converts expression text into the flat token list consumed by
//! `mev_parser`. Scanning is driven by a `logos` automaton; the [`Lexer`]
//! wrapper adds the charset check, span bookkeeping and error reporting.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[macro_use]
mod macros;

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::{lex, Lexer};
pub use logos_token::LogosToken;
pub use token::{Span, Token, TokenKind};
