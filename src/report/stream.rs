//! Line-per-failure reporting to an output stream

use std::fmt;
use std::io::{self, Write};

use super::Reporter;

/// Reporter that writes each failure message as one line to an output
/// stream. The default sink of the pipeline.
///
/// Streams have no persistent output to clear, so this variant keeps the
/// default no-op `reset`.
///
/// # Example
///
/// ```rust
/// use weir::{Reporter, StreamReporter};
///
/// let mut out = Vec::new();
/// let mut reporter = StreamReporter::new(&mut out);
/// reporter.report("Height must be between 0 and 2.60 meters.");
/// reporter.report("Weight must be between 0 and 300 kilograms.");
/// drop(reporter);
///
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().count(), 2);
/// ```
pub struct StreamReporter<W: Write> {
    out: W,
}

impl<W: Write> StreamReporter<W> {
    /// Create a reporter over any writer.
    pub fn new(out: W) -> Self {
        StreamReporter { out }
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl StreamReporter<io::Stderr> {
    /// Reporter over standard error.
    pub fn stderr() -> Self {
        StreamReporter::new(io::stderr())
    }
}

impl StreamReporter<io::Stdout> {
    /// Reporter over standard output.
    pub fn stdout() -> Self {
        StreamReporter::new(io::stdout())
    }
}

impl<W: Write> Reporter for StreamReporter<W> {
    fn report(&mut self, message: &str) {
        // Best effort: a broken pipe must not abort the validation pass.
        let _ = writeln!(self.out, "{message}");
        let _ = self.out.flush();
    }
}

impl<W: Write> fmt::Debug for StreamReporter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamReporter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_message() {
        let mut reporter = StreamReporter::new(Vec::new());
        reporter.report("first failure");
        reporter.report("second failure");

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text, "first failure\nsecond failure\n");
    }

    #[test]
    fn reset_is_a_no_op() {
        let mut reporter = StreamReporter::new(Vec::new());
        reporter.report("kept");
        reporter.reset();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text, "kept\n");
    }
}
