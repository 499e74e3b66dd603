//! Blocking acknowledge-per-message reporting

use std::fmt;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};

use crate::error::SetupError;

use super::Reporter;

/// Reporter that shows each failure as a blocking terminal dialog: the
/// message is printed and the calling flow halts until the user acknowledges
/// it with Enter.
///
/// This variant has no `reset`: a dismissed dialog cannot be recalled, only
/// re-triggered by the next pass.
///
/// Construction via [`ModalReporter::new`] fails with
/// [`SetupError::NotInteractive`] when there is no terminal to block on;
/// a missing medium is a configuration error, not something to discover
/// mid-submission.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use weir::{ModalReporter, Reporter};
///
/// // One acknowledgement queued up per expected message.
/// let acks = Cursor::new(b"\n".to_vec());
/// let mut shown = Vec::new();
/// let mut reporter = ModalReporter::with_io(acks, &mut shown);
/// reporter.report("Birth year must be between 1900 and the current year.");
/// drop(reporter);
///
/// assert!(String::from_utf8(shown).unwrap().contains("Birth year"));
/// ```
pub struct ModalReporter<I: BufRead = BufReader<io::Stdin>, O: Write = io::Stderr> {
    input: I,
    output: O,
}

impl ModalReporter {
    /// Modal reporter over the process terminal (stdin for acknowledgements,
    /// stderr for the dialog text).
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::NotInteractive`] when either side is not a
    /// terminal, e.g. under redirection or in CI.
    pub fn new() -> Result<Self, SetupError> {
        if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
            return Err(SetupError::NotInteractive);
        }
        Ok(ModalReporter {
            input: BufReader::new(io::stdin()),
            output: io::stderr(),
        })
    }
}

impl<I: BufRead, O: Write> ModalReporter<I, O> {
    /// Modal reporter over explicit input and output, for tests and embedded
    /// hosts that provide their own dialog plumbing.
    pub fn with_io(input: I, output: O) -> Self {
        ModalReporter { input, output }
    }
}

impl<I: BufRead, O: Write> Reporter for ModalReporter<I, O> {
    fn report(&mut self, message: &str) {
        let _ = write!(self.output, "{message}\n[press Enter to continue] ");
        let _ = self.output.flush();
        // Blocks until the dialog is dismissed.
        let mut ack = String::new();
        let _ = self.input.read_line(&mut ack);
        let _ = writeln!(self.output);
    }
}

impl<I: BufRead, O: Write> fmt::Debug for ModalReporter<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalReporter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn blocks_on_one_ack_per_message() {
        let acks = Cursor::new(b"\n\n".to_vec());
        let mut reporter = ModalReporter::with_io(acks, Vec::new());
        reporter.report("first");
        reporter.report("second");
    }

    #[test]
    fn prints_message_and_prompt() {
        let mut shown = Vec::new();
        {
            let acks = Cursor::new(b"\n".to_vec());
            let mut reporter = ModalReporter::with_io(acks, &mut shown);
            reporter.report("Hair color must be one of: black, brown, white, red, other.");
        }
        let text = String::from_utf8(shown).unwrap();
        assert!(text.contains("Hair color"));
        assert!(text.contains("[press Enter to continue]"));
    }
}
