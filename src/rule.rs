//! Named validation rules
//!
//! A rule binds a [`Predicate`] to one field key together with the message
//! shown when the predicate rejects the field's value.

use std::fmt;

use crate::predicate::Predicate;

/// A named predicate over one field's value, plus its failure message.
///
/// Rules are immutable after construction: the field key, message and
/// predicate are fixed for the lifetime of the wiring. Evaluation is a pure
/// call into the stored predicate with no side effects.
///
/// # Example
///
/// ```rust
/// use weir::predicate::{len_between, letters_only, PredicateExt};
/// use weir::Rule;
///
/// let rule = Rule::new(
///     "username",
///     "Username must be between 5 and 15 characters and contain only letters.",
///     letters_only().and(len_between(5, 15)),
/// );
///
/// assert_eq!(rule.field(), "username");
/// assert!(rule.is_valid("validname"));
/// assert!(!rule.is_valid("abc"));
/// assert!(!rule.is_valid(""));
/// ```
pub struct Rule {
    field: String,
    message: String,
    predicate: Box<dyn Predicate<str>>,
}

impl Rule {
    /// Create a rule for `field` that reports `message` when `predicate`
    /// rejects the field's value.
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        predicate: impl Predicate<str> + 'static,
    ) -> Self {
        Rule {
            field: field.into(),
            message: message.into(),
            predicate: Box::new(predicate),
        }
    }

    /// The key of the field this rule checks.
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The message reported when this rule fails.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check the rule against a field value.
    ///
    /// An absent field is presented as the empty string by the validator, so
    /// `is_valid("")` is an ordinary (usually failing) evaluation.
    #[inline]
    pub fn is_valid(&self, value: &str) -> bool {
        self.predicate.check(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::one_of;

    #[test]
    fn rule_evaluates_stored_predicate() {
        let rule = Rule::new(
            "eyeColor",
            "Eye color must be one of: brown, green, gray, blue.",
            one_of(["brown", "green", "gray", "blue"]),
        );
        assert!(rule.is_valid("green"));
        assert!(!rule.is_valid("Green"));
        assert!(!rule.is_valid(""));
    }

    #[test]
    fn rule_accepts_closures() {
        let rule = Rule::new("weight", "Weight must be even.", |value: &str| {
            value.parse::<u32>().map_or(false, |w| w % 2 == 0)
        });
        assert!(rule.is_valid("70"));
        assert!(!rule.is_valid("71"));
    }

    #[test]
    fn debug_omits_the_predicate() {
        let rule = Rule::new("username", "msg", |_: &str| true);
        let shown = format!("{:?}", rule);
        assert!(shown.contains("username"));
        assert!(shown.contains(".."));
    }
}
