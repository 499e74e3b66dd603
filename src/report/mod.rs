//! Failure reporting sinks
//!
//! A [`Reporter`] delivers rule-failure messages to a medium outside the
//! pipeline's control. Variants differ only in the delivery side effect:
//!
//! - [`StreamReporter`]: one line per failure to any [`std::io::Write`]
//! - [`ModalReporter`]: blocking acknowledge-per-message terminal dialog
//! - [`ListReporter`]: visible entries in a shared container the host renders
//!
//! Delivery is best effort: an unwritable medium must not abort a validation
//! pass. Missing media are setup-time errors instead (see
//! [`SetupError`](crate::SetupError)).
//!
//! # Example
//!
//! ```rust
//! use weir::Reporter;
//!
//! // Closures are reporters, handy for tests and ad-hoc sinks.
//! let mut seen = Vec::new();
//! {
//!     let mut sink = |message: &str| seen.push(message.to_string());
//!     sink.report("Weight must be between 0 and 300 kilograms.");
//! }
//! assert_eq!(seen.len(), 1);
//! ```

mod list;
mod modal;
mod stream;

pub use list::{ListHandle, ListReporter};
pub use modal::ModalReporter;
pub use stream::StreamReporter;

/// A sink that surfaces rule-failure messages to a user-visible medium.
///
/// `reset` clears output accumulated by a previous validation pass and
/// defaults to a no-op, so variants without persistent output simply omit it
/// and the validator never does capability detection.
pub trait Reporter {
    /// Deliver one failure message.
    fn report(&mut self, message: &str);

    /// Clear output accumulated by prior passes. No-op by default.
    fn reset(&mut self) {}
}

// Blanket impl for closures, mirroring the one on Predicate
impl<F> Reporter for F
where
    F: FnMut(&str),
{
    #[inline]
    fn report(&mut self, message: &str) {
        self(message)
    }
}
