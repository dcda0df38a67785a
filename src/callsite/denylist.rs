//! Frames that must never appear in a decorated message.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Truncated source paths for everything that sits between user test code
/// and the capture point. Built once, never mutated.
static DENYLIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // backtrace crate capture plumbing
        "backtrace/libunwind.rs",
        "backtrace/noop.rs",
        "backtrace/dbghelp64.rs",
        "backtrace/mod.rs",
        "src/capture.rs",
        // std / libtest dispatch between a test fn and its thread root
        "ops/function.rs",
        "src/lib.rs",
        "src/panic.rs",
        "src/panicking.rs",
        "src/rt.rs",
        "sys/backtrace.rs",
        "thread/mod.rs",
        "unix/thread.rs",
        // this crate's own helpers
        "callsite/decorate.rs",
        "callsite/frames.rs",
        "src/check.rs",
    ]
    .into_iter()
    .collect()
});

/// Whether a truncated path belongs to internal plumbing.
///
/// Matching is exact and happens on truncated forms (see
/// [`truncate_path`](crate::truncate_path)), since raw absolute paths are
/// not portable across build environments.
pub fn is_denylisted(truncated: &str) -> bool {
    DENYLIST.contains(truncated)
}
