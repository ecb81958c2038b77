use mev_lexer::{Token, TokenKind};

/// Cursor over the token list.
///
/// Reading past the end yields a synthesized end-of-input token placed just
/// after the last real token.
pub struct TokenStream {
    /// The tokens being parsed
    tokens: Vec<Token>,
    /// Current position in the token stream
    position: usize,
    eof: Token,
}

impl TokenStream {
    /// Create a new token stream
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map_or(0, |t| t.span.end);
        TokenStream {
            tokens,
            position: 0,
            eof: Token::eof(end),
        }
    }

    /// The current token without advancing
    pub fn current(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    pub fn kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Move to the next token. A no-op at the end.
    pub fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of real tokens, not counting end-of-input
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when there were no tokens at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check if we're at the end of input
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }
}
