//! The built-in prelude. Each function checks it received enough arguments;
//! when it did not, it logs a warning and evaluates to 0. Extra arguments
//! are ignored.

use log::warn;
use mev_ast::Node;

fn require<'a>(name: &str, args: &'a [Node], arity: usize) -> Option<&'a [Node]> {
    if args.len() < arity {
        warn!(
            "{name} expects {arity} argument(s), got {}, evaluating to 0",
            args.len()
        );
        return None;
    }
    Some(&args[..arity])
}

pub fn min(args: &[Node]) -> f64 {
    match require("min", args, 2) {
        Some([a, b]) => a.evaluate().min(b.evaluate()),
        _ => 0.0,
    }
}

pub fn max(args: &[Node]) -> f64 {
    match require("max", args, 2) {
        Some([a, b]) => a.evaluate().max(b.evaluate()),
        _ => 0.0,
    }
}

pub fn floor(args: &[Node]) -> f64 {
    match require("floor", args, 1) {
        Some([a]) => a.evaluate().floor(),
        _ => 0.0,
    }
}

/// Rounds half away from zero.
pub fn round(args: &[Node]) -> f64 {
    match require("round", args, 1) {
        Some([a]) => a.evaluate().round(),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(values: &[f64]) -> Vec<Node> {
        values.iter().copied().map(Node::number).collect()
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min(&nums(&[3.0, 5.0])), 3.0);
        assert_eq!(max(&nums(&[3.0, 5.0])), 5.0);
        assert_eq!(min(&nums(&[-1.0, -2.0])), -2.0);
    }

    #[test]
    fn test_floor_round() {
        assert_eq!(floor(&nums(&[3.7])), 3.0);
        assert_eq!(floor(&nums(&[-3.2])), -4.0);
        assert_eq!(round(&nums(&[2.5])), 3.0);
        assert_eq!(round(&nums(&[-2.5])), -3.0);
        assert_eq!(round(&nums(&[2.4])), 2.0);
    }

    #[test]
    fn test_missing_arguments_yield_zero() {
        assert_eq!(min(&nums(&[3.0])), 0.0);
        assert_eq!(max(&[]), 0.0);
        assert_eq!(floor(&[]), 0.0);
        assert_eq!(round(&[]), 0.0);
    }

    #[test]
    fn test_extra_arguments_ignored() {
        assert_eq!(min(&nums(&[4.0, 6.0, -100.0])), 4.0);
        assert_eq!(floor(&nums(&[1.9, 7.0])), 1.0);
    }
}
