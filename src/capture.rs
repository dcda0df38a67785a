//! Line-capturing writer for routing log output into test output.
//!
//! The test harness only shows what a test printed when that test fails.
//! [`CaptureWriter`] adapts any byte-oriented writer API into per-line
//! records aimed at that captured output (or any other [`LineSink`]), and
//! [`CaptureLogger`] plugs the `log` facade into one.
//!
//! # Example
//!
//! ```rust
//! use std::io::Write;
//!
//! let mut out = attest::CaptureWriter::new(attest::test_output());
//! writeln!(out, "A: {}", 42).unwrap();
//! out.finish();
//! ```

use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::Mutex;

/// Receives one complete log line at a time, without its trailing newline.
pub trait LineSink {
    fn record(&mut self, line: &str);
}

impl<F: FnMut(&str)> LineSink for F {
    fn record(&mut self, line: &str) {
        self(line)
    }
}

/// The host test framework's log-recording primitive: per-test captured
/// stdout. Lines recorded here surface only when the test fails.
pub fn test_output() -> impl LineSink + Send + 'static {
    |line: &str| println!("{}", line)
}

/// Adapts a byte stream into per-line records.
///
/// Bytes are buffered until a line feed arrives; each complete line is
/// handed to the sink without its trailing newline. Call [`finish`] (or let
/// the writer drop) to emit a nonempty unterminated remainder.
///
/// A `CaptureWriter` belongs to a single test or adapter instance. It is
/// NOT safe for concurrent writes without external synchronization; wrap it
/// in a mutex if it must be shared, the way [`CaptureLogger`] does.
///
/// [`finish`]: CaptureWriter::finish
pub struct CaptureWriter<S: LineSink> {
    sink: S,
    buf: Vec<u8>,
}

impl<S: LineSink> CaptureWriter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            buf: Vec::new(),
        }
    }

    /// Emit any buffered bytes that never received a line feed.
    ///
    /// Dropping the writer flushes the remainder too; the explicit form
    /// exists to make the end of capture visible at the call site.
    pub fn finish(self) {}

    fn drain_lines(&mut self) {
        while let Some(i) = self.buf.iter().position(|&b| b == b'\n') {
            let line = String::from_utf8_lossy(&self.buf[..i]).into_owned();
            self.sink.record(&line);
            self.buf.drain(..=i);
        }
    }
}

impl<S: LineSink> Write for CaptureWriter<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        self.drain_lines();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: LineSink> Drop for CaptureWriter<S> {
    fn drop(&mut self) {
        if !self.buf.is_empty() {
            let line = String::from_utf8_lossy(&self.buf).into_owned();
            self.sink.record(&line);
            self.buf.clear();
        }
    }
}

/// Routes `log` records into a [`CaptureWriter`], one line per record.
///
/// Records render as `LEVEL target: message`. The writer is mutex-guarded,
/// which satisfies its single-writer contract even when tests log from
/// several threads.
pub struct CaptureLogger<S: LineSink + Send> {
    writer: Mutex<CaptureWriter<S>>,
}

impl<S: LineSink + Send + 'static> CaptureLogger<S> {
    pub fn new(sink: S) -> Self {
        Self {
            writer: Mutex::new(CaptureWriter::new(sink)),
        }
    }

    /// Register this logger process-wide with a caller-supplied sink.
    ///
    /// The `log` facade accepts one logger per process; a second install
    /// reports [`SetLoggerError`].
    pub fn install_with(sink: S, max_level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(sink)))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl<S: LineSink + Send> Log for CaptureLogger<S> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut writer = self.writer.lock();
        // CaptureWriter's write never fails.
        let _ = writeln!(
            writer,
            "{} {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Install a [`CaptureLogger`] aimed at the test framework's captured
/// output.
///
/// # Example
///
/// ```rust,ignore
/// attest::install_test_logger(log::LevelFilter::Info).unwrap();
/// log::info!("only shown when the test fails");
/// ```
pub fn install_test_logger(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    CaptureLogger::install_with(test_output(), max_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Collected(Rc<RefCell<Vec<String>>>);

    impl Collected {
        fn sink(&self) -> impl LineSink {
            let inner = Rc::clone(&self.0);
            move |line: &str| inner.borrow_mut().push(line.to_string())
        }

        fn lines(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    #[test]
    fn test_complete_lines_recorded_in_order() {
        let collected = Collected::default();
        let mut out = CaptureWriter::new(collected.sink());
        writeln!(out, "Foo:Q: What is the answer to life the universe and everything?").unwrap();
        writeln!(out, "Foo:A: {}", 42).unwrap();
        out.finish();
        assert_eq!(
            collected.lines(),
            vec![
                "Foo:Q: What is the answer to life the universe and everything?",
                "Foo:A: 42",
            ]
        );
    }

    #[test]
    fn test_partial_line_buffered_until_newline() {
        let collected = Collected::default();
        let mut out = CaptureWriter::new(collected.sink());
        write!(out, "par").unwrap();
        assert!(collected.lines().is_empty());
        out.write_all(b"tial\n").unwrap();
        assert_eq!(collected.lines(), vec!["partial"]);
    }

    #[test]
    fn test_multiple_lines_in_one_write() {
        let collected = Collected::default();
        let mut out = CaptureWriter::new(collected.sink());
        out.write_all(b"a\nb\nc\n").unwrap();
        assert_eq!(collected.lines(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remainder_flushed_on_finish() {
        let collected = Collected::default();
        let mut out = CaptureWriter::new(collected.sink());
        write!(out, "tail").unwrap();
        out.finish();
        assert_eq!(collected.lines(), vec!["tail"]);
    }

    #[test]
    fn test_empty_remainder_not_emitted() {
        let collected = Collected::default();
        let mut out = CaptureWriter::new(collected.sink());
        writeln!(out, "x").unwrap();
        out.finish();
        assert_eq!(collected.lines(), vec!["x"]);
    }

    #[test]
    fn test_drop_flushes_remainder() {
        let collected = Collected::default();
        {
            let mut out = CaptureWriter::new(collected.sink());
            write!(out, "dangling").unwrap();
        }
        assert_eq!(collected.lines(), vec!["dangling"]);
    }

    #[test]
    fn test_non_utf8_bytes_survive_lossily() {
        let collected = Collected::default();
        let mut out = CaptureWriter::new(collected.sink());
        out.write_all(&[0xff, b'\n']).unwrap();
        assert_eq!(collected.lines(), vec!["\u{FFFD}"]);
    }
}
