//! # Weir
//!
//! > *A weir lets the stream through and holds the rest back*
//!
//! Declarative field validation for Rust: ordered rules over named fields,
//! pluggable failure reporting, and submission gating.
//!
//! ## Pipeline
//!
//! - [`predicate`]: composable boolean tests over field text
//! - [`Rule`]: a predicate bound to one field key plus its failure message
//! - [`Reporter`]: a sink that surfaces failures (stream, modal, list)
//! - [`Validator`]: evaluates every rule, reports every failure, aggregates
//!   pass/fail without short-circuiting
//! - [`Processor`]: intercepts a form's submissions and gates a success
//!   callback on a fully clean pass
//!
//! ## Quick Example
//!
//! ```rust
//! use weir::predicate::{len_between, letters_only, parsed_between, PredicateExt};
//! use weir::{Form, ListReporter, Processor, Rule};
//!
//! let mut form = Form::new()
//!     .with_field("username", "abc")
//!     .with_field("birthYear", "2000");
//!
//! let (reporter, failures) = ListReporter::new();
//! let processor = Processor::builder()
//!     .rule(Rule::new(
//!         "username",
//!         "Username must be between 5 and 15 characters and contain only letters.",
//!         letters_only().and(len_between(5, 15)),
//!     ))
//!     .rule(Rule::new(
//!         "birthYear",
//!         "Birth year must be between 1900 and the current year.",
//!         parsed_between(1900, 2026),
//!     ))
//!     .reporter(reporter)
//!     .on_success(|form| form.clear_fields())
//!     .build()
//!     .expect("pipeline has rules");
//! processor.attach(&mut form).expect("rules match form fields");
//!
//! // "abc" is too short: the failure lands in the shared container and the
//! // success action is withheld.
//! let submission = form.submit();
//! assert!(submission.default_prevented());
//! assert_eq!(failures.len(), 1);
//!
//! // Fix the field and resubmit: the container is cleared before the new
//! // pass, the pass is clean, and the success action resets the form.
//! form.set("username", "validname");
//! form.submit();
//! assert!(failures.is_empty());
//! ```
//!
//! Single-threaded by design: submissions are serialized by the host event
//! loop and every handler runs to completion synchronously.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod form;
pub mod predicate;
pub mod processor;
pub mod report;
pub mod rule;
pub mod testing;
pub mod validator;

// Re-exports
pub use error::SetupError;
pub use form::{FieldSource, Form, Submission};
pub use processor::{Processor, ProcessorBuilder};
pub use report::{ListHandle, ListReporter, ModalReporter, Reporter, StreamReporter};
pub use rule::Rule;
pub use validator::Validator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::SetupError;
    pub use crate::form::{FieldSource, Form, Submission};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::processor::{Processor, ProcessorBuilder};
    pub use crate::report::{ListHandle, ListReporter, ModalReporter, Reporter, StreamReporter};
    pub use crate::rule::Rule;
    pub use crate::validator::Validator;
}
