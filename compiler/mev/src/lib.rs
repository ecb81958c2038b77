//! Arithmetic expression engine.
//!
//! Text goes through [`mev_lexer`], [`mev_parser`] builds a [`Node`] tree
//! with variable values and native callbacks resolved, and
//! [`Node::evaluate`] folds it to an `f64`.
//!
//! ```
//! use mev::Evaluator;
//!
//! let evaluator = Evaluator::new()
//!     .var("FOUR", 4.0)
//!     .func("random", |_| 0.5);
//! let value = evaluator.evaluate("(1+2)+(3+{FOUR}*4)*random()").unwrap();
//! assert_eq!(value, 12.5);
//! ```

pub use mev_ast::{self as ast, BinaryOperator, NativeFunction, Node};
pub use mev_env::{Bindings, FunctionTable};
pub use mev_lexer::{self as lexer, lex, LexError, Span, Token, TokenKind};
pub use mev_parser::{self as parser, render_snippet, ParseError, Parsed, Parser, SyntaxError};

/// Anything that can stop an expression from producing a tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(err) => err.span(),
            Error::Parse(err) => err.span(),
        }
    }

    /// Renders the error as a snippet of `source` with the location marked.
    pub fn render(&self, source: &str) -> String {
        render_snippet(&self.to_string(), self.span(), source)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reusable configuration for parsing many expressions with the same
/// variables and functions.
#[derive(Debug, Clone)]
pub struct Evaluator {
    bindings: Bindings,
    functions: FunctionTable,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// An evaluator with the built-in functions and no variables.
    pub fn new() -> Self {
        Self::with_functions(FunctionTable::with_builtins())
    }

    pub fn with_functions(functions: FunctionTable) -> Self {
        Self {
            bindings: Bindings::new(),
            functions,
        }
    }

    pub fn var<S: Into<String>>(mut self, name: S, value: f64) -> Self {
        self.set_var(name, value);
        self
    }

    pub fn func<S, F>(mut self, name: S, callback: F) -> Self
    where
        S: Into<String>,
        F: Fn(&[Node]) -> f64 + Send + Sync + 'static,
    {
        self.set_func(name, callback);
        self
    }

    pub fn set_var<S: Into<String>>(&mut self, name: S, value: f64) {
        self.bindings.set(name, value);
    }

    pub fn set_func<S, F>(&mut self, name: S, callback: F)
    where
        S: Into<String>,
        F: Fn(&[Node]) -> f64 + Send + Sync + 'static,
    {
        self.functions.insert(name, callback);
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    fn parser(&self, expression: &str) -> std::result::Result<Parser, LexError> {
        let tokens = lex(expression)?;
        let mut parser = Parser::with_functions(tokens, self.functions.clone());
        parser.set_bindings(self.bindings.clone());
        Ok(parser)
    }

    /// Parses `expression`, failing on the first lex or parse error.
    pub fn parse(&self, expression: &str) -> Result<Node> {
        Ok(self.parser(expression)?.parse()?)
    }

    /// Parses `expression`, keeping the partial tree when parsing fails.
    /// Lex errors are still fatal.
    pub fn parse_recovering(&self, expression: &str) -> std::result::Result<Parsed, LexError> {
        Ok(self.parser(expression)?.parse_recovering())
    }

    /// Parses and evaluates `expression`.
    pub fn evaluate(&self, expression: &str) -> Result<f64> {
        let tree = self.parse(expression)?;
        Ok(tree.evaluate())
    }
}

/// Parses `expression` with only the built-in functions.
pub fn parse(expression: &str) -> Result<Node> {
    Evaluator::new().parse(expression)
}

/// Evaluates `expression` with only the built-in functions and no variables.
///
/// ```
/// assert_eq!(mev::evaluate("2 ^ 3 ^ 2").unwrap(), 512.0);
/// assert!(mev::evaluate("1 +").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    Evaluator::new().evaluate(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_evaluator_reuses_tables() {
        let evaluator = Evaluator::new().var("X", 3.0);
        assert_eq!(evaluator.evaluate("X * 2").unwrap(), 6.0);
        assert_eq!(evaluator.evaluate("max(X, 10)").unwrap(), 10.0);
        assert_eq!(evaluator.bindings().get("X"), Some(3.0));
    }

    #[test]
    fn test_errors_are_wrapped() {
        assert_eq!(evaluate(""), Err(Error::Lex(LexError::EmptyInput)));
        assert_eq!(evaluate("   "), Err(Error::Parse(ParseError::EmptyTokenList)));
        assert!(matches!(
            evaluate("X"),
            Err(Error::Parse(ParseError::UnboundVariable { .. }))
        ));
    }

    #[test]
    fn test_error_render_covers_lex_errors() {
        let source = "1 ＋ 2";
        let err = evaluate(source).unwrap_err();
        assert!(matches!(err, Error::Lex(LexError::UnsupportedCharset { .. })));
        let rendered = err.render(source);
        assert!(rendered.contains(" --> line 1, col 3"));
        assert!(rendered.ends_with("|   ^"));
    }

    #[test]
    fn test_parse_recovering_keeps_partial_tree() {
        let parsed = Evaluator::new().parse_recovering("2 * Y").unwrap();
        assert!(parsed.error.is_some());
        assert_eq!(parsed.tree.map(|tree| tree.evaluate()), Some(0.0));
    }
}
