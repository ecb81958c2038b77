// Expression tree for mev. The tree is built once by the parser and is
// immutable afterwards; every child is owned exclusively by its parent.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Signature of a host callback. Arguments arrive unevaluated.
pub type Callback = dyn Fn(&[Node]) -> f64 + Send + Sync;

/// Shared handle to a native function.
///
/// Cloning is cheap and every clone points at the same callback. Two
/// handles are equal only if they share the callback.
#[derive(Clone)]
pub struct NativeFunction(Arc<Callback>);

impl NativeFunction {
    /// Wraps a closure or `fn` as a native function.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&[Node]) -> f64 + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    /// Invokes the callback. The callback decides which arguments to evaluate.
    pub fn call(&self, args: &[Node]) -> f64 {
        (self.0)(args)
    }

    /// True when both handles share one callback.
    pub fn same_as(&self, other: &NativeFunction) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({:p})", Arc::as_ptr(&self.0) as *const ())
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub enum Node {
    Number(NumberNode),
    Binary(Box<BinaryNode>),
    Variable(VariableNode),
    Function(Box<FunctionNode>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NumberNode {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BinaryNode {
    pub op: BinaryOperator,
    pub left: Node,
    pub right: Node,
}

/// A variable reference. `value` was copied from the bindings when the
/// tree was parsed, so later rebinding does not affect it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VariableNode {
    pub key: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FunctionNode {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub callback: NativeFunction,
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Quo,
    Rem,
    /// Exponentiation (`^` or `**`)
    Pow,
}

impl BinaryOperator {
    /// Binding strength, low to high: `+ -` = 1, `* / %` = 2, `^` = 3.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Sub => 1,
            BinaryOperator::Mul | BinaryOperator::Quo | BinaryOperator::Rem => 2,
            BinaryOperator::Pow => 3,
        }
    }

    pub fn is_right_associative(self) -> bool {
        matches!(self, BinaryOperator::Pow)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Quo => "/",
            BinaryOperator::Rem => "%",
            BinaryOperator::Pow => "^",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Node {
    pub fn number(value: f64) -> Self {
        Node::Number(NumberNode { value })
    }

    pub fn binary(op: BinaryOperator, left: Node, right: Node) -> Self {
        Node::Binary(Box::new(BinaryNode { op, left, right }))
    }

    pub fn variable<S: Into<String>>(key: S, value: f64) -> Self {
        Node::Variable(VariableNode {
            key: key.into(),
            value,
        })
    }

    pub fn call<S: Into<String>>(name: S, callback: NativeFunction, args: Vec<Node>) -> Self {
        Node::Function(Box::new(FunctionNode {
            name: name.into(),
            callback,
            args,
        }))
    }

    /// Unary minus, desugared to `0 - operand`.
    pub fn negate(operand: Node) -> Self {
        Node::binary(BinaryOperator::Sub, Node::number(0.0), operand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_function_identity() {
        let one = NativeFunction::new(|_| 1.0);
        let same = one.clone();
        let other = NativeFunction::new(|_| 1.0);

        assert_eq!(one, same);
        assert_ne!(one, other);
        assert_eq!(one.call(&[]), 1.0);
    }

    #[test]
    fn test_precedence_ordering() {
        assert!(BinaryOperator::Add.precedence() < BinaryOperator::Mul.precedence());
        assert!(BinaryOperator::Rem.precedence() < BinaryOperator::Pow.precedence());
        assert_eq!(BinaryOperator::Sub.precedence(), BinaryOperator::Add.precedence());
        assert!(BinaryOperator::Pow.is_right_associative());
        assert!(!BinaryOperator::Sub.is_right_associative());
    }

    #[test]
    fn test_negate_desugars_to_sub() {
        let node = Node::negate(Node::number(1.0));
        assert_eq!(
            node,
            Node::binary(BinaryOperator::Sub, Node::number(0.0), Node::number(1.0))
        );
    }

    #[test]
    fn test_tree_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Node>();
    }
}
