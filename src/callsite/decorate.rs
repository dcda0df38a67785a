//! Failure-message decoration with caller locations.

use super::denylist::is_denylisted;
use super::frames::{BacktraceFrames, FrameSource, StackFrame};
use super::truncate::truncate_path;

/// Default bound on how many stack depths are probed before giving up.
///
/// Larger than the helper call depth alone because the eager backtrace
/// capture contributes its own (denylisted) frames at the bottom of the
/// stack. The three-frame output cap is the contract; this bound only
/// guarantees termination when introspection never reports exhaustion.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// At most this many caller locations are rendered.
const MAX_FRAMES: usize = 3;

/// Prefix `message` with up to three caller locations from the current
/// stack, skipping runtime and helper plumbing.
///
/// Uses the default [`Decorator`]. Never fails: an unreadable or fully
/// filtered stack yields the message unchanged.
///
/// # Example
///
/// ```rust
/// use attest::decorate;
///
/// let message = decorate("boom");
/// assert!(message.ends_with("boom"));
/// ```
pub fn decorate(message: &str) -> String {
    Decorator::new().decorate(message)
}

/// Walks the caller stack and prefixes messages with the locations of the
/// meaningful frames.
#[derive(Debug, Clone)]
pub struct Decorator {
    max_depth: usize,
}

impl Decorator {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override how many stack depths are probed.
    ///
    /// The bound exists to guarantee termination; it does not change the
    /// three-frame cap on rendered locations.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Decorate using the current thread's stack.
    pub fn decorate(&self, message: &str) -> String {
        self.decorate_from(&BacktraceFrames::capture(), message)
    }

    /// Decorate using caller frames supplied by `source`.
    ///
    /// Depths are probed starting at 1, skipping the decorator's own frame.
    /// A frame whose truncated path is denylisted is passed over without
    /// counting toward the collected three. The walk stops when the source
    /// reports exhaustion, three frames are collected, or the depth bound is
    /// reached.
    ///
    /// Collected frames wrap the message innermost-first: the nearest caller
    /// ends up in the prefix closest to the original text, outer callers
    /// stack to its left.
    pub fn decorate_from(&self, source: &dyn FrameSource, message: &str) -> String {
        let mut collected: Vec<(String, u32)> = Vec::new();
        for depth in 1..self.max_depth {
            if collected.len() == MAX_FRAMES {
                break;
            }
            let StackFrame { path, line } = match source.locate(depth) {
                Some(frame) => frame,
                None => break,
            };
            let short = truncate_path(&path);
            if !is_denylisted(&short) {
                collected.push((short, line));
            }
        }

        let mut out = message.to_string();
        for (path, line) in collected {
            out = format!("{}:{}: {}", escape_template(&path), line, out);
        }
        out
    }
}

impl Default for Decorator {
    fn default() -> Self {
        Self::new()
    }
}

/// Double brace characters so the rendered prefix stays inert if the caller
/// later embeds it in a format template.
fn escape_template(path: &str) -> String {
    path.replace('{', "{{").replace('}', "}}")
}
