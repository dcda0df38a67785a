//! Equality assertions whose failures point at the calling test.
//!
//! Two flavors mirror the two ways a test can fail:
//! - `require_*` panics immediately, halting the test.
//! - `check_*` returns an [`AssertionResult`] without panicking; pair with a
//!   [`Recorder`] to keep a test running past individual mismatches and
//!   report every failure at the end.
//!
//! Every failure message is decorated with up to three caller locations
//! before it is surfaced, so the output names the test code rather than this
//! module.
//!
//! # Example
//!
//! ```rust
//! use attest::{require_eq, Recorder};
//!
//! require_eq(&4, &(2 + 2));
//!
//! let mut recorder = Recorder::new();
//! recorder.check_eq(&"a", &"a");
//! assert!(recorder.finish().is_ok());
//! ```

use std::fmt::{Debug, Display};

use thiserror::Error;

use crate::callsite::decorate;

/// Result of evaluating a single check.
#[derive(Debug, Clone)]
pub struct AssertionResult {
    /// Whether the check passed.
    pub passed: bool,
    /// Description of what was checked.
    pub description: String,
    /// Decorated failure message if the check failed.
    pub reason: Option<String>,
}

impl AssertionResult {
    /// Create a passing assertion result.
    pub(crate) fn pass(description: impl Into<String>) -> Self {
        Self {
            passed: true,
            description: description.into(),
            reason: None,
        }
    }

    /// Create a failing assertion result.
    pub(crate) fn fail(description: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            description: description.into(),
            reason: Some(reason.into()),
        }
    }
}

fn mismatch_message<T: Debug>(expected: &T, actual: &T) -> String {
    format!(
        "equality check failed\nexpected: {:#?}\nactual:   {:#?}",
        expected, actual
    )
}

fn mismatch_message_at<T: Debug>(index: usize, expected: &T, actual: &T) -> String {
    format!(
        "equality check failed\nindex: {}\nexpected: {:#?}\nactual:   {:#?}",
        index, expected, actual
    )
}

// =============================================================================
// Halting flavor (panics on mismatch)
// =============================================================================

/// Verify two values are structurally equal, halting the test otherwise.
///
/// Equality is `PartialEq`; the panic message shows both values in `{:#?}`
/// form, prefixed with the caller locations that led here.
///
/// # Example
///
/// ```rust
/// use attest::require_eq;
///
/// require_eq(&"10", &10.to_string().as_str());
/// ```
///
/// # Panics
///
/// Panics if `expected != actual`.
pub fn require_eq<T: PartialEq + Debug>(expected: &T, actual: &T) {
    if expected != actual {
        panic!("{}", decorate(&mismatch_message(expected, actual)));
    }
}

/// Loop-friendly variant of [`require_eq`] that names the failing index.
///
/// Meant for tables of input/expected pairs, so the failure says which row
/// diverged.
///
/// # Example
///
/// ```rust
/// use attest::require_eq_at;
///
/// for (i, (input, expected)) in [(9, "9"), (11, "11")].iter().enumerate() {
///     require_eq_at(i, expected, &input.to_string().as_str());
/// }
/// ```
///
/// # Panics
///
/// Panics if `expected != actual`.
pub fn require_eq_at<T: PartialEq + Debug>(index: usize, expected: &T, actual: &T) {
    if expected != actual {
        panic!("{}", decorate(&mismatch_message_at(index, expected, actual)));
    }
}

/// Variant of [`require_eq`] with a caller-supplied failure message.
///
/// The message is formatted at the call site (`format!` or a plain string
/// literal), then decorated.
///
/// # Panics
///
/// Panics if `expected != actual`.
pub fn require_eq_with<T: PartialEq>(expected: &T, actual: &T, message: impl Display) {
    if expected != actual {
        panic!("{}", decorate(&message.to_string()));
    }
}

// =============================================================================
// Continue-on-failure flavor (returns results)
// =============================================================================

/// Non-panicking twin of [`require_eq`].
pub fn check_eq<T: PartialEq + Debug>(expected: &T, actual: &T) -> AssertionResult {
    if expected == actual {
        AssertionResult::pass("values compare equal")
    } else {
        AssertionResult::fail(
            "values compare equal",
            decorate(&mismatch_message(expected, actual)),
        )
    }
}

/// Non-panicking twin of [`require_eq_at`].
pub fn check_eq_at<T: PartialEq + Debug>(index: usize, expected: &T, actual: &T) -> AssertionResult {
    if expected == actual {
        AssertionResult::pass(format!("values compare equal at index {}", index))
    } else {
        AssertionResult::fail(
            format!("values compare equal at index {}", index),
            decorate(&mismatch_message_at(index, expected, actual)),
        )
    }
}

/// Non-panicking twin of [`require_eq_with`].
pub fn check_eq_with<T: PartialEq>(
    expected: &T,
    actual: &T,
    message: impl Display,
) -> AssertionResult {
    if expected == actual {
        AssertionResult::pass("values compare equal")
    } else {
        AssertionResult::fail("values compare equal", decorate(&message.to_string()))
    }
}

/// Accumulates check failures so a test can keep running past individual
/// mismatches and report them all at once.
///
/// # Example
///
/// ```rust
/// use attest::{FailureSummary, Recorder};
///
/// fn table_test() -> Result<(), FailureSummary> {
///     let mut recorder = Recorder::new();
///     for (i, (input, expected)) in [(9, "9"), (11, "11")].iter().enumerate() {
///         recorder.check_eq_at(i, expected, &input.to_string().as_str());
///     }
///     recorder.finish()
/// }
/// # table_test().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    failures: Vec<String>,
    checked: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of an already-evaluated check.
    pub fn record(&mut self, result: AssertionResult) {
        self.checked += 1;
        if !result.passed {
            self.failures.push(result.reason.unwrap_or(result.description));
        }
    }

    /// Check two values for equality and record the outcome.
    pub fn check_eq<T: PartialEq + Debug>(&mut self, expected: &T, actual: &T) {
        self.record(check_eq(expected, actual));
    }

    /// Check with an index in the failure message and record the outcome.
    pub fn check_eq_at<T: PartialEq + Debug>(&mut self, index: usize, expected: &T, actual: &T) {
        self.record(check_eq_at(index, expected, actual));
    }

    /// Check with a caller-supplied message and record the outcome.
    pub fn check_eq_with<T: PartialEq>(&mut self, expected: &T, actual: &T, message: impl Display) {
        self.record(check_eq_with(expected, actual, message));
    }

    /// Number of failures recorded so far.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Consume the recorder; the error lists every recorded failure.
    pub fn finish(self) -> Result<(), FailureSummary> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(FailureSummary {
                failed: self.failures.len(),
                checked: self.checked,
                failures: self.failures,
            })
        }
    }
}

/// Every failure a [`Recorder`] accumulated, reported as one error.
#[derive(Debug, Error)]
#[error("{failed} of {checked} checks failed\n{}", .failures.join("\n"))]
pub struct FailureSummary {
    /// Count of failed checks.
    pub failed: usize,
    /// Count of checks recorded.
    pub checked: usize,
    /// Decorated failure messages, in the order recorded.
    pub failures: Vec<String>,
}
