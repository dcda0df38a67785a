//! Call-site decoration for test failure messages.
//!
//! When an assertion helper fails, the location the test framework reports is
//! the helper's own, which is rarely where the problem is. This module walks
//! the active call stack, drops frames that belong to runtime or helper
//! plumbing, and prefixes the failure message with up to three `file:line:`
//! annotations naming the meaningful callers:
//! - `decorate()` / [`Decorator`] - the stack walk and rendering
//! - [`truncate_path`] - compact `dir/file` display of source paths
//! - [`is_denylisted`] - which frames count as plumbing
//! - [`FrameSource`] / [`BacktraceFrames`] - the stack introspection seam
//!
//! # Example
//!
//! ```rust
//! use attest::decorate;
//!
//! let message = decorate("values diverged");
//! assert!(message.ends_with("values diverged"));
//! ```

mod decorate;
mod denylist;
mod frames;
mod truncate;

pub use decorate::{decorate, Decorator, DEFAULT_MAX_DEPTH};
pub use denylist::is_denylisted;
pub use frames::{BacktraceFrames, FrameSource, StackFrame};
pub use truncate::truncate_path;
