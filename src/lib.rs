//! # attest
//!
//! Test assertions whose failures point at your test code, plus a
//! line-capturing writer for routing log output into test output.
//!
//! Assertion helpers shared across a test suite have a problem: when one
//! fails, the reported location is the helper's, not the test's. `attest`
//! decorates every failure message with up to three `file:line:` prefixes
//! naming the meaningful callers, skipping runtime and helper internals, so
//! the failure reads like it happened where it actually did.
//!
//! ## Quick start
//!
//! ```rust
//! use attest::require_eq;
//!
//! #[derive(Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! require_eq(&Point { x: 1, y: 2 }, &Point { x: 1, y: 2 });
//! ```
//!
//! On mismatch, the panic message carries the call chain, outermost caller
//! first:
//!
//! ```text
//! tests/points.rs:14: tests/support.rs:9: equality check failed
//! expected: Point { x: 1, y: 2 }
//! actual:   Point { x: 1, y: 3 }
//! ```
//!
//! ## Collecting failures
//!
//! ```rust
//! use attest::{FailureSummary, Recorder};
//!
//! fn table_test() -> Result<(), FailureSummary> {
//!     let mut recorder = Recorder::new();
//!     for (i, (input, expected)) in [(9, "9"), (11, "11")].iter().enumerate() {
//!         recorder.check_eq_at(i, expected, &input.to_string().as_str());
//!     }
//!     recorder.finish()
//! }
//! # table_test().unwrap();
//! ```
//!
//! ## Capturing log output
//!
//! ```rust
//! use std::io::Write;
//!
//! use attest::{test_output, CaptureWriter};
//!
//! // Shown by the harness only when the test fails.
//! let mut out = CaptureWriter::new(test_output());
//! writeln!(out, "state before the assertion: {:?}", [1, 2, 3]).unwrap();
//! out.finish();
//! ```

pub mod callsite;
pub mod capture;
pub mod check;

// Decoration engine
pub use callsite::{
    decorate, truncate_path, BacktraceFrames, Decorator, FrameSource, StackFrame, DEFAULT_MAX_DEPTH,
};

// Assertions
pub use check::{
    check_eq, check_eq_at, check_eq_with, require_eq, require_eq_at, require_eq_with,
    AssertionResult, FailureSummary, Recorder,
};

// Log capture
pub use capture::{install_test_logger, test_output, CaptureLogger, CaptureWriter, LineSink};
