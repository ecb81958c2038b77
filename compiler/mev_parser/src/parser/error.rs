use log::{debug, trace};
use mev_lexer::Span;

/// Everything that can go wrong while building a tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("the token list is empty")]
    EmptyTokenList,

    /// Non-fatal: the variable evaluates as 0 and parsing continues.
    #[error("variable '{name}' is not bound")]
    UnboundVariable { name: String, span: Span },

    /// Fatal for the enclosing call: that call site yields no node.
    #[error("function '{name}' is undefined")]
    UndefinedFunction { name: String, span: Span },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("unexpected token '{found}'")]
    UnexpectedToken { found: String, span: Span },

    #[error("unexpected end of expression")]
    UnexpectedEnd { span: Span },

    #[error("empty parentheses expression")]
    EmptyParentheses { span: Span },

    #[error("expression expects ')' to close, got '{found}'")]
    UnclosedParenthesis { found: String, span: Span },

    #[error("function '{name}' expects '(' after name, got '{found}'")]
    MissingCallParenthesis {
        name: String,
        found: String,
        span: Span,
    },

    #[error("function '{name}' expects ')' to close parameters, got '{found}'")]
    UnclosedCall {
        name: String,
        found: String,
        span: Span,
    },

    #[error("expected a variable name inside '{{}}', got '{found}'")]
    ExpectedVariableName { found: String, span: Span },

    #[error("variable '{name}' expects '}}' to close, got '{found}'")]
    UnclosedBrace {
        name: String,
        found: String,
        span: Span,
    },

    #[error("unexpected token '{found}' after expression")]
    TrailingTokens { found: String, span: Span },

    #[error("expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize, span: Span },

    #[error("expression has more than {limit} nodes")]
    ExpressionTooLarge { limit: usize, span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::UnexpectedEnd { span }
            | SyntaxError::EmptyParentheses { span }
            | SyntaxError::UnclosedParenthesis { span, .. }
            | SyntaxError::MissingCallParenthesis { span, .. }
            | SyntaxError::UnclosedCall { span, .. }
            | SyntaxError::ExpectedVariableName { span, .. }
            | SyntaxError::UnclosedBrace { span, .. }
            | SyntaxError::TrailingTokens { span, .. }
            | SyntaxError::NestingTooDeep { span, .. }
            | SyntaxError::ExpressionTooLarge { span, .. } => *span,
        }
    }
}

impl ParseError {
    /// Where the error was detected. `EmptyTokenList` has no location.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::EmptyTokenList => None,
            ParseError::UnboundVariable { span, .. } | ParseError::UndefinedFunction { span, .. } => {
                Some(*span)
            }
            ParseError::Syntax(err) => Some(err.span()),
        }
    }

    /// Renders the error against the expression it came from.
    pub fn render(&self, source: &str) -> String {
        super::diagnostics::render_snippet(&self.to_string(), self.span(), source)
    }
}

/// Sticky error slot threaded through every parse step.
///
/// Keeps the first error recorded; later ones are logged and dropped.
#[derive(Debug, Default)]
pub struct FirstError {
    first: Option<ParseError>,
}

impl FirstError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record<E: Into<ParseError>>(&mut self, error: E) {
        let error = error.into();
        if self.first.is_none() {
            debug!("parse error: {error}");
            self.first = Some(error);
        } else {
            trace!("suppressed later parse error: {error}");
        }
    }

    pub fn is_set(&self) -> bool {
        self.first.is_some()
    }

    pub fn into_inner(self) -> Option<ParseError> {
        self.first
    }
}
