//! Expression tree for the mev arithmetic engine.
//!
//! This crate defines the [`Node`] sum type produced by `mev_parser`, its
//! evaluation, and utilities for walking and printing trees.

pub mod ast;
pub mod eval;
pub mod printer;
pub mod visit;

// Re-export commonly used types
pub use ast::{
    BinaryNode, BinaryOperator, Callback, FunctionNode, NativeFunction, Node, NumberNode,
    VariableNode,
};
pub use printer::AstPrinter;
pub use visit::Visitor;

/// Errors raised by AST utilities.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum AstError {
    /// The tree could not be serialized.
    #[error("failed to serialize expression tree: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A result type for AST operations.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, AstError>;

/// Serializes a tree to pretty JSON. Native callbacks are omitted; function
/// nodes keep their name and arguments.
///
/// # Example
///
/// ```
/// use mev_ast::{to_json, BinaryOperator, Node};
///
/// let tree = Node::binary(BinaryOperator::Add, Node::number(1.0), Node::number(2.0));
/// let json = to_json(&tree).unwrap();
/// assert!(json.contains(r#""type": "Binary""#));
/// assert!(json.contains(r#""op": "Add""#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json(node: &Node) -> Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}
