//! Shared helpers for the end-to-end tests.

use std::sync::Once;

use mev::Evaluator;

static INIT: Once = Once::new();

/// Initialize the logger once for the whole test binary.
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    });
}

/// The host configuration used throughout the tests: `FOUR` is 4 and
/// `random()` always returns 1.
pub fn demo_evaluator() -> Evaluator {
    init_test_logger();
    Evaluator::new().var("FOUR", 4.0).func("random", |_| 1.0)
}

/// Evaluates with only the built-ins, panicking on any error.
pub fn eval(expression: &str) -> f64 {
    init_test_logger();
    match mev::evaluate(expression) {
        Ok(value) => value,
        Err(err) => panic!("{}", err.render(expression)),
    }
}
