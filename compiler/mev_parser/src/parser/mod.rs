// Parser for mev expressions.
// Recursive descent for operands, precedence climbing for binary operators.
// Errors do not abort: the first one is kept and parsing continues so the
// caller can still inspect the partial tree.

pub mod diagnostics;
mod error;
pub mod token_stream;

pub use error::{FirstError, ParseError, SyntaxError};

use log::{debug, trace};
use mev_ast::{BinaryOperator, Node};
use mev_env::{Bindings, FunctionTable};
use mev_lexer::{Span, Token, TokenKind};

use token_stream::TokenStream;

/// Maximum operand nesting (parentheses, unary minus, calls, `^` chains)
/// before the parser gives up on a branch.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Maximum number of nodes in one tree. Bounds the height of left folds
/// such as `1+1+...+1`, which the nesting limit does not see.
pub const MAX_EXPRESSION_NODES: usize = 2048;

/// Maps an operator token to its binary operator.
pub fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Add => Some(BinaryOperator::Add),
        TokenKind::Sub => Some(BinaryOperator::Sub),
        TokenKind::Mul => Some(BinaryOperator::Mul),
        TokenKind::Quo => Some(BinaryOperator::Quo),
        TokenKind::Rem => Some(BinaryOperator::Rem),
        TokenKind::Pow => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Result of [`Parser::parse_recovering`]: whatever tree could be built and
/// the first error met on the way. Check `error` before trusting `tree`.
#[derive(Debug)]
pub struct Parsed {
    pub tree: Option<Node>,
    pub error: Option<ParseError>,
}

impl Parsed {
    /// The tree, unless any error was recorded.
    pub fn into_result(self) -> Result<Node, ParseError> {
        match (self.tree, self.error) {
            (_, Some(err)) => Err(err),
            (Some(tree), None) => Ok(tree),
            (None, None) => Err(SyntaxError::UnexpectedEnd {
                span: Span::default(),
            }
            .into()),
        }
    }
}

/// One-shot parser: configure the tables, then call [`Parser::parse`] or
/// [`Parser::parse_recovering`], which consume it.
pub struct Parser {
    stream: TokenStream,
    bindings: Bindings,
    functions: FunctionTable,
    depth: usize,
    nodes: usize,
}

impl Parser {
    /// A parser with the built-in functions registered.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_functions(tokens, FunctionTable::with_builtins())
    }

    /// A parser using `functions` as its whole function table.
    pub fn with_functions(tokens: Vec<Token>, functions: FunctionTable) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            bindings: Bindings::new(),
            functions,
            depth: 0,
            nodes: 0,
        }
    }

    /// Binds a variable. The value is copied into the tree when parsed.
    pub fn set_var<S: Into<String>>(&mut self, name: S, value: f64) {
        self.bindings.set(name, value);
    }

    /// Registers or overrides a function.
    pub fn set_func<S, F>(&mut self, name: S, callback: F)
    where
        S: Into<String>,
        F: Fn(&[Node]) -> f64 + Send + Sync + 'static,
    {
        self.functions.insert(name, callback);
    }

    /// Replaces the whole binding table.
    pub fn set_bindings(&mut self, bindings: Bindings) {
        self.bindings = bindings;
    }

    /// Parses the tokens, failing on the first recorded error.
    pub fn parse(self) -> Result<Node, ParseError> {
        self.parse_recovering().into_result()
    }

    /// Parses the tokens, keeping the partial tree alongside the first error.
    pub fn parse_recovering(mut self) -> Parsed {
        if self.stream.is_empty() {
            return Parsed {
                tree: None,
                error: Some(ParseError::EmptyTokenList),
            };
        }

        let mut errors = FirstError::new();
        let tree = self.compile(&mut errors);

        if !self.stream.is_at_end() {
            let token = self.stream.current();
            errors.record(SyntaxError::TrailingTokens {
                found: token.text.clone(),
                span: token.span,
            });
        }

        if let Some(tree) = &tree {
            trace!("parsed {tree}");
        }
        Parsed {
            tree,
            error: errors.into_inner(),
        }
    }

    // compile := expr (binop expr)*
    fn compile(&mut self, errors: &mut FirstError) -> Option<Node> {
        let left = self.parse_expr(errors)?;
        Some(self.parse_right(errors, 1, left))
    }

    fn current_operator(&self) -> Option<BinaryOperator> {
        binary_operator(self.stream.kind())
    }

    /// Precedence climbing. Folds operators of at least `min_precedence` onto
    /// `left`, absorbing tighter-binding operators into the right operand.
    fn parse_right(&mut self, errors: &mut FirstError, min_precedence: u8, mut left: Node) -> Node {
        loop {
            let Some(op) = self.current_operator() else {
                return left;
            };
            let precedence = op.precedence();
            if precedence < min_precedence {
                return left;
            }
            if self.reserve(errors, 1).is_none() {
                return left;
            }
            self.stream.advance();

            let Some(mut right) = self.parse_expr(errors) else {
                return left;
            };

            if let Some(next) = self.current_operator() {
                if next.precedence() > precedence {
                    right = self.parse_right(errors, precedence + 1, right);
                } else if next.precedence() == precedence && op.is_right_associative() {
                    if self.depth >= MAX_NESTING_DEPTH {
                        errors.record(self.too_deep());
                    } else {
                        self.depth += 1;
                        right = self.parse_right(errors, precedence, right);
                        self.depth -= 1;
                    }
                }
            }

            left = Node::binary(op, left, right);
        }
    }

    /// Parses one operand.
    fn parse_expr(&mut self, errors: &mut FirstError) -> Option<Node> {
        if self.depth >= MAX_NESTING_DEPTH {
            errors.record(self.too_deep());
            return None;
        }
        self.depth += 1;
        let node = self.parse_operand(errors);
        self.depth -= 1;
        node
    }

    fn parse_operand(&mut self, errors: &mut FirstError) -> Option<Node> {
        match self.stream.kind() {
            TokenKind::Number => {
                self.reserve(errors, 1)?;
                Some(self.parse_number())
            }
            TokenKind::Sub => {
                // e.g. -1, stored as 0 - 1
                self.reserve(errors, 2)?;
                self.stream.advance();
                let operand = self.parse_expr(errors)?;
                Some(Node::negate(operand))
            }
            TokenKind::LeftParen => self.parse_paren(errors),
            TokenKind::LeftBrace => self.parse_braced_variable(errors),
            TokenKind::Variable => {
                self.reserve(errors, 1)?;
                Some(self.parse_variable(errors))
            }
            TokenKind::Function => self.parse_call(errors),
            TokenKind::Eof => {
                errors.record(SyntaxError::UnexpectedEnd {
                    span: self.stream.current().span,
                });
                None
            }
            _ => {
                let token = self.stream.current();
                errors.record(SyntaxError::UnexpectedToken {
                    found: token.text.clone(),
                    span: token.span,
                });
                None
            }
        }
    }

    fn parse_number(&mut self) -> Node {
        let token = self.stream.current();
        // Malformed literals such as `1.2.3` evaluate as zero.
        let value = token.text.parse::<f64>().unwrap_or_else(|_| {
            debug!("malformed number '{}' at {}, using 0", token.text, token.span);
            0.0
        });
        self.stream.advance();
        Node::number(value)
    }

    // "(" compile ")"
    fn parse_paren(&mut self, errors: &mut FirstError) -> Option<Node> {
        let open = self.stream.current().span;
        self.stream.advance();

        if self.stream.kind() == TokenKind::RightParen {
            let close = self.stream.current().span;
            errors.record(SyntaxError::EmptyParentheses {
                span: Span::new(open.start, close.end),
            });
            self.stream.advance();
            return None;
        }

        let node = self.compile(errors);

        let close = self.stream.current();
        if close.kind != TokenKind::RightParen {
            errors.record(SyntaxError::UnclosedParenthesis {
                found: close.text.clone(),
                span: close.span,
            });
            return None;
        }
        self.stream.advance();
        node
    }

    // "{" VARIABLE "}"
    fn parse_braced_variable(&mut self, errors: &mut FirstError) -> Option<Node> {
        self.stream.advance();

        let token = self.stream.current();
        if token.kind != TokenKind::Variable {
            errors.record(SyntaxError::ExpectedVariableName {
                found: token.text.clone(),
                span: token.span,
            });
            return None;
        }
        let name = token.text.clone();
        self.reserve(errors, 1)?;
        let node = self.parse_variable(errors);

        let close = self.stream.current();
        if close.kind != TokenKind::RightBrace {
            errors.record(SyntaxError::UnclosedBrace {
                name,
                found: close.text.clone(),
                span: close.span,
            });
        } else {
            self.stream.advance();
        }
        Some(node)
    }

    /// Resolves the variable under the cursor. An unbound name records an
    /// error and evaluates as 0.
    fn parse_variable(&mut self, errors: &mut FirstError) -> Node {
        let token = self.stream.current();
        let value = match self.bindings.get(&token.text) {
            Some(value) => value,
            None => {
                errors.record(ParseError::UnboundVariable {
                    name: token.text.clone(),
                    span: token.span,
                });
                0.0
            }
        };
        let node = Node::variable(token.text.clone(), value);
        self.stream.advance();
        node
    }

    // FUNCTION "(" (compile | ",")* ")"
    fn parse_call(&mut self, errors: &mut FirstError) -> Option<Node> {
        self.reserve(errors, 1)?;
        let name_token = self.stream.current().clone();
        let name = name_token.text;
        self.stream.advance();

        let open = self.stream.current();
        if open.kind != TokenKind::LeftParen {
            errors.record(SyntaxError::MissingCallParenthesis {
                name,
                found: open.text.clone(),
                span: open.span,
            });
            return None;
        }
        self.stream.advance();

        let mut args = Vec::new();
        let mut complete = true;
        loop {
            match self.stream.kind() {
                TokenKind::RightParen | TokenKind::Eof => break,
                TokenKind::Comma => {
                    self.stream.advance();
                    continue;
                }
                _ => {}
            }
            let before = self.stream.position();
            match self.compile(errors) {
                Some(arg) => args.push(arg),
                None => {
                    complete = false;
                    // Always make progress, or a stray token would spin here.
                    if self.stream.position() == before {
                        self.stream.advance();
                    }
                }
            }
        }

        let close = self.stream.current();
        if close.kind != TokenKind::RightParen {
            errors.record(SyntaxError::UnclosedCall {
                name,
                found: close.text.clone(),
                span: close.span,
            });
            return None;
        }
        self.stream.advance();

        let Some(callback) = self.functions.get(&name) else {
            errors.record(ParseError::UndefinedFunction {
                name,
                span: name_token.span,
            });
            return None;
        };

        if !complete {
            return None;
        }
        Some(Node::call(name, callback, args))
    }

    /// Claims `count` nodes from the tree budget, recording an error once it
    /// runs out.
    fn reserve(&mut self, errors: &mut FirstError, count: usize) -> Option<()> {
        if self.nodes + count > MAX_EXPRESSION_NODES {
            errors.record(SyntaxError::ExpressionTooLarge {
                limit: MAX_EXPRESSION_NODES,
                span: self.stream.current().span,
            });
            return None;
        }
        self.nodes += count;
        Some(())
    }

    fn too_deep(&self) -> SyntaxError {
        SyntaxError::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
            span: self.stream.current().span,
        }
    }
}

#[cfg(test)]
mod tests;
