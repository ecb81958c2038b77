use std::fmt;

/// Half-open byte range of a token in the expression text.
///
/// `start <= end` always holds; synthesized end-of-input tokens are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Self { start, end }
    }

    /// An empty span at `offset`.
    pub fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-width spans.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Never produced by the lexer, synthesized by the parser.
    Eof,
    /// A character that cannot start a token. Lexing aborts on it.
    Illegal,

    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,

    // Literals and identifiers
    Number,
    /// Lowercase identifier, names a function.
    Function,
    /// Uppercase identifier, names a variable.
    Variable,

    // Operators
    Add,
    Sub,
    Mul,
    Quo,
    Rem,
    /// Exponentiation, spelled `^` or `**`.
    Pow,
}

impl TokenKind {
    /// Returns true for the binary operator kinds.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Quo
                | TokenKind::Rem
                | TokenKind::Pow
        )
    }
}

/// A token: its source text, kind and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The source text of the token
    pub text: String,
    /// The kind of the token
    pub kind: TokenKind,
    /// The location of the token in the expression
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new<S: Into<String>>(kind: TokenKind, text: S, span: Span) -> Self {
        Self {
            text: text.into(),
            kind,
            span,
        }
    }

    /// The end-of-input marker, placed at `offset`.
    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, "eof", Span::point(offset))
    }

    /// Shorthand for `self.kind == kind`.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})@{}", self.kind, self.text, self.span)
    }
}
