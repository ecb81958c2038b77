//! Fully parenthesized infix rendering, used for `Display` and the CLI's
//! `--ast` output.

use std::fmt;

use crate::ast::*;
use crate::visit::Visitor;

/// Renders a tree back to infix text.
///
/// Every binary node is wrapped in parentheses so the grouping chosen by the
/// parser is visible, e.g. `1+2*3` prints as `(1 + (2 * 3))`.
#[derive(Default)]
pub struct AstPrinter {
    out: String,
}

impl AstPrinter {
    /// Creates a new `AstPrinter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints a tree to a string.
    pub fn print(mut self, node: &Node) -> String {
        node.accept(&mut self);
        self.out
    }
}

impl Visitor for AstPrinter {
    fn visit_number(&mut self, node: &NumberNode) {
        self.out.push_str(&node.value.to_string());
    }

    fn visit_binary(&mut self, node: &BinaryNode) {
        self.out.push('(');
        self.visit_node(&node.left);
        self.out.push(' ');
        self.out.push_str(node.op.symbol());
        self.out.push(' ');
        self.visit_node(&node.right);
        self.out.push(')');
    }

    fn visit_variable(&mut self, node: &VariableNode) {
        self.out.push('{');
        self.out.push_str(&node.key);
        self.out.push('}');
    }

    fn visit_function(&mut self, node: &FunctionNode) {
        self.out.push_str(&node.name);
        self.out.push('(');
        for (i, arg) in node.args.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.visit_node(arg);
        }
        self.out.push(')');
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&AstPrinter::new().print(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_binary_grouping() {
        let tree = Node::binary(
            BinaryOperator::Add,
            Node::number(1.0),
            Node::binary(BinaryOperator::Mul, Node::number(2.0), Node::number(3.5)),
        );
        assert_eq!(tree.to_string(), "(1 + (2 * 3.5))");
    }

    #[test]
    fn test_print_call_and_variable() {
        let tree = Node::call(
            "min",
            NativeFunction::new(|_| 0.0),
            vec![Node::variable("FOUR", 4.0), Node::number(5.0)],
        );
        assert_eq!(tree.to_string(), "min({FOUR}, 5)");
    }
}
