//! Tree evaluation.
//!
//! Evaluation never fails: division or modulo by zero is logged and yields
//! zero, so a tree that parsed cleanly always produces a number.

use log::warn;

use crate::ast::{BinaryOperator, Node};

impl Node {
    /// Evaluates the tree. Read-only over the tree; only host callbacks can
    /// have side effects.
    pub fn evaluate(&self) -> f64 {
        match self {
            Node::Number(number) => number.value,
            Node::Variable(variable) => variable.value,
            Node::Binary(binary) => binary
                .op
                .apply(binary.left.evaluate(), binary.right.evaluate()),
            Node::Function(function) => function.callback.call(&function.args),
        }
    }
}

impl BinaryOperator {
    /// Applies the operator to two evaluated operands.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Quo => {
                if right == 0.0 {
                    warn!("expr[{left}/{right}] division by zero, evaluating to 0");
                    return 0.0;
                }
                left / right
            }
            BinaryOperator::Rem => {
                // Saturating casts; NaN truncates to 0.
                let (l, r) = (left as i64, right as i64);
                if r == 0 {
                    warn!("expr[{left}%{right}] division by zero, evaluating to 0");
                    return 0.0;
                }
                l.wrapping_rem(r) as f64
            }
            BinaryOperator::Pow => left.powf(right),
        }
    }
}
