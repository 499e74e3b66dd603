//! Predicate combinators for composable field rules
//!
//! A [`Rule`](crate::Rule) pairs one of these predicates with a field key and
//! a failure message. Predicates are pure boolean tests over the field's raw
//! text; they can be combined with logical operators (`and`, `or`, `not`) to
//! build the full rule vocabulary from small reusable pieces.
//!
//! # Example
//!
//! ```rust
//! use weir::predicate::*;
//!
//! // 5 to 15 ASCII letters, the classic username rule
//! let username = letters_only().and(len_between(5, 15));
//! assert!(username.check("validname"));
//! assert!(!username.check("abc"));          // too short
//! assert!(!username.check("not valid"));    // contains a space
//!
//! // numeric rules operate on the raw text via parse-then-bound
//! let weight = parsed_between(0.0, 300.0);
//! assert!(weight.check("70"));
//! assert!(!weight.check("grams"));
//! ```
//!
//! Absent fields reach predicates as the empty string, so every predicate
//! must treat `""` as a normal (usually failing) input rather than an error.

mod combinators;
mod parse;
mod string;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

// Re-export string predicates
pub use string::{
    all_chars, digits_only, len_between, len_max, len_min, letters_only, not_empty, one_of,
    AllChars, LenBetween, NotEmpty, OneOf,
};

// Re-export parse predicates
pub use parse::{parsed_between, parses, ParsedBetween, Parses};
