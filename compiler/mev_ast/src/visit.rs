//! Visitor pattern implementation for walking the expression tree.
//!
//! Implement [`Visitor`] and override only the node kinds you care about;
//! the default methods keep walking into children.

use crate::ast::*;

/// A visitor over [`Node`] trees.
pub trait Visitor {
    fn visit_node(&mut self, node: &Node) {
        walk_node(self, node);
    }

    fn visit_number(&mut self, _node: &NumberNode) {}

    fn visit_binary(&mut self, node: &BinaryNode) {
        walk_binary(self, node);
    }

    fn visit_variable(&mut self, _node: &VariableNode) {}

    fn visit_function(&mut self, node: &FunctionNode) {
        walk_function(self, node);
    }
}

/// Dispatches `node` to the matching `visit_*` method.
pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, node: &Node) {
    match node {
        Node::Number(number) => visitor.visit_number(number),
        Node::Binary(binary) => visitor.visit_binary(binary),
        Node::Variable(variable) => visitor.visit_variable(variable),
        Node::Function(function) => visitor.visit_function(function),
    }
}

/// Visits the left then the right operand.
pub fn walk_binary<V: Visitor + ?Sized>(visitor: &mut V, node: &BinaryNode) {
    visitor.visit_node(&node.left);
    visitor.visit_node(&node.right);
}

/// Visits the arguments in order.
pub fn walk_function<V: Visitor + ?Sized>(visitor: &mut V, node: &FunctionNode) {
    for arg in &node.args {
        visitor.visit_node(arg);
    }
}

impl Node {
    /// Accepts a visitor at this node.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_node(self);
    }

    /// Variable keys referenced by the tree, in source order, duplicates kept.
    pub fn variables(&self) -> Vec<String> {
        let mut collector = VariableCollector::default();
        self.accept(&mut collector);
        collector.keys
    }
}

#[derive(Default)]
struct VariableCollector {
    keys: Vec<String>,
}

impl Visitor for VariableCollector {
    fn visit_variable(&mut self, node: &VariableNode) {
        self.keys.push(node.key.clone());
    }
}
