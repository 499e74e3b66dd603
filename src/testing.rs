//! Testing utilities
//!
//! A recording [`Reporter`](crate::Reporter) plus assertion macros for
//! writing pipeline tests without touching a real delivery medium.
//!
//! # Examples
//!
//! ```rust
//! use weir::predicate::not_empty;
//! use weir::testing::RecordingReporter;
//! use weir::{assert_reported, Form, Rule, Validator};
//!
//! let reporter = RecordingReporter::new();
//! let mut validator = Validator::new(
//!     reporter.clone(),
//!     vec![Rule::new("username", "username is required", not_empty())],
//! );
//!
//! validator.validate(&Form::new().with_field("username", ""));
//! assert_reported!(reporter, ["username is required"]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::report::Reporter;

/// Reporter that records messages and reset calls for assertions.
///
/// Clones share the same recording, so a test can keep one clone while the
/// validator owns another.
///
/// `reset` clears the recorded messages (like the list variant clears its
/// container), so after a validation pass the recording holds exactly that
/// pass's failures. The number of resets seen so far stays available through
/// [`reset_count`](Self::reset_count).
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    messages: Rc<RefCell<Vec<String>>>,
    resets: Rc<RefCell<usize>>,
}

impl RecordingReporter {
    /// Create an empty recording reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The messages reported since the last reset, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// How many times `reset` has been called.
    pub fn reset_count(&self) -> usize {
        *self.resets.borrow()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn reset(&mut self) {
        *self.resets.borrow_mut() += 1;
        self.messages.borrow_mut().clear();
    }
}

/// Assert that a recording reporter holds exactly the given messages, in
/// order.
///
/// # Example
///
/// ```rust
/// use weir::testing::RecordingReporter;
/// use weir::{assert_reported, Reporter};
///
/// let mut reporter = RecordingReporter::new();
/// reporter.report("first");
/// reporter.report("second");
/// assert_reported!(reporter, ["first", "second"]);
/// ```
#[macro_export]
macro_rules! assert_reported {
    ($reporter:expr, [$($message:expr),* $(,)?]) => {{
        let expected: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::ToString::to_string(&$message)),*];
        assert_eq!($reporter.messages(), expected);
    }};
}

/// Assert that a recording reporter holds no messages.
///
/// # Example
///
/// ```rust
/// use weir::testing::RecordingReporter;
/// use weir::assert_clean;
///
/// let reporter = RecordingReporter::new();
/// assert_clean!(reporter);
/// ```
#[macro_export]
macro_rules! assert_clean {
    ($reporter:expr) => {
        assert!(
            $reporter.messages().is_empty(),
            "expected no reported failures, got {:?}",
            $reporter.messages()
        );
    };
}
