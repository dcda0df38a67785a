//! Stack introspection behind a narrow capability trait.

use backtrace::Backtrace;

/// One call-stack entry, as reported by the runtime.
///
/// Constructed fresh for each decoration pass and discarded after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    /// Source file the frame points into.
    pub path: String,
    /// Line number within `path`.
    pub line: u32,
}

/// A source of caller frames, indexed by depth.
///
/// `locate(depth)` returns the frame `depth` levels above the point where the
/// source was captured, or `None` once the stack is exhausted. Callers treat
/// `None` as "stop walking", not as an error.
pub trait FrameSource {
    fn locate(&self, depth: usize) -> Option<StackFrame>;
}

/// Default [`FrameSource`] backed by the `backtrace` crate.
///
/// The stack is captured and resolved eagerly at construction. Only frames
/// that resolve to a source file and line number are kept; frames from
/// stripped or foreign code are dropped rather than terminating the walk.
pub struct BacktraceFrames {
    frames: Vec<StackFrame>,
}

impl BacktraceFrames {
    /// Capture the current thread's stack.
    pub fn capture() -> Self {
        let backtrace = Backtrace::new();
        let frames = backtrace
            .frames()
            .iter()
            .flat_map(|frame| frame.symbols())
            .filter_map(|symbol| {
                let path = symbol.filename()?.to_string_lossy().into_owned();
                let line = symbol.lineno()?;
                Some(StackFrame { path, line })
            })
            .collect();
        Self { frames }
    }
}

impl FrameSource for BacktraceFrames {
    fn locate(&self, depth: usize) -> Option<StackFrame> {
        self.frames.get(depth).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_resolves_frames() {
        let frames = BacktraceFrames::capture();
        // Test builds carry debug info, so at least the capturing frame
        // itself resolves.
        assert!(frames.locate(0).is_some());
    }

    #[test]
    fn test_locate_past_end_is_none() {
        let frames = BacktraceFrames::capture();
        assert!(frames.locate(usize::MAX).is_none());
    }
}
