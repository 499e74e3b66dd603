//! Setup-time configuration errors
//!
//! Rule failures are reported through a [`Reporter`](crate::Reporter) and are
//! never errors; everything in this module is a wiring problem that must
//! surface loudly before the first submission is handled.

use std::error::Error as StdError;
use std::fmt;

/// A configuration error raised while assembling or attaching the pipeline.
///
/// # Examples
///
/// ```rust
/// use weir::{Processor, SetupError};
///
/// let err = Processor::builder().build().unwrap_err();
/// assert_eq!(err, SetupError::NoRules);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A modal reporter was requested without an interactive terminal to
    /// show it on.
    NotInteractive,
    /// The pipeline was built with an empty rule list.
    NoRules,
    /// A rule names a field the form does not carry.
    UnknownField {
        /// The field key no form field matched.
        field: String,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NotInteractive => {
                write!(f, "modal reporting requires an interactive terminal")
            }
            SetupError::NoRules => write!(f, "validation pipeline has no rules"),
            SetupError::UnknownField { field } => {
                write!(f, "rule references unknown form field '{field}'")
            }
        }
    }
}

impl StdError for SetupError {}
