use std::thread;

use mev::Node;
use tests::demo_evaluator;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_tree_is_send_and_sync() {
    assert_send_sync::<Node>();
    assert_send_sync::<mev::Evaluator>();
}

#[test]
fn test_tree_evaluates_on_many_threads() {
    let tree = demo_evaluator()
        .parse("(1+2)+(3+FOUR*4)*random()")
        .unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| tree.evaluate())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 22.0);
        }
    });
}
