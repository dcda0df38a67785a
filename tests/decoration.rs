//! End-to-end decoration through real call stacks.
//!
//! These tests rely on the debug info present in test builds to resolve
//! frames back to this file.

use std::panic;
use std::thread;

use attest::{decorate, require_eq, Decorator};

fn helper(message: &str) -> (u32, String) {
    let line = line!() + 1;
    let decorated = decorate(message);
    (line, decorated)
}

fn level_one(message: &str) -> String {
    level_two(message)
}

fn level_two(message: &str) -> String {
    level_three(message)
}

fn level_three(message: &str) -> String {
    decorate(message)
}

#[test]
fn test_prefixes_name_the_calling_test_file() {
    let call_line = line!() + 1;
    let (helper_line, decorated) = helper("fail");

    assert!(decorated.ends_with("fail"), "got {:?}", decorated);
    let inner = format!("tests/decoration.rs:{}: ", helper_line);
    let outer = format!("tests/decoration.rs:{}: ", call_line);
    assert!(
        decorated.contains(&inner),
        "missing helper frame in {:?}",
        decorated
    );
    assert!(
        decorated.contains(&outer),
        "missing test frame in {:?}",
        decorated
    );
    // The outer caller sits to the left of the inner one.
    assert!(decorated.find(&outer).unwrap() < decorated.find(&inner).unwrap());
}

#[test]
fn test_at_most_three_frames_through_a_deep_chain() {
    let decorated = level_one("deep");
    assert!(decorated.ends_with("deep"));
    assert_eq!(decorated.matches("tests/decoration.rs:").count(), 3);
}

#[test]
fn test_probe_bound_of_one_leaves_message_unchanged() {
    let decorated = Decorator::new().with_max_depth(1).decorate("X");
    assert_eq!(decorated, "X");
}

#[test]
fn test_concurrent_decoration_has_no_crosstalk() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let message = format!("worker-{}", i);
                let decorated = decorate(&message);
                (message, decorated)
            })
        })
        .collect();

    for handle in handles {
        let (message, decorated) = handle.join().unwrap();
        assert!(decorated.ends_with(&message), "got {:?}", decorated);
        assert!(decorated.matches("tests/decoration.rs:").count() <= 3);
    }
}

#[test]
fn test_require_eq_failure_points_at_this_file() {
    let result = panic::catch_unwind(|| require_eq(&1, &2));
    let message = *result.unwrap_err().downcast::<String>().unwrap();

    assert!(
        message.contains("tests/decoration.rs:"),
        "got {:?}",
        message
    );
    assert!(message.contains("expected: 1"));
    assert!(message.contains("actual:   2"));
}
