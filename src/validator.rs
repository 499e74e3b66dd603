//! Rule evaluation and failure aggregation

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::form::FieldSource;
use crate::report::Reporter;
use crate::rule::Rule;

/// Evaluates an ordered list of [`Rule`]s against a field source and reports
/// every failure through its [`Reporter`].
///
/// All rules are always evaluated; there is no short-circuit. Rule order
/// only determines the display order of multiple failures.
///
/// # Example
///
/// ```rust
/// use weir::predicate::{len_between, letters_only, one_of, PredicateExt};
/// use weir::testing::RecordingReporter;
/// use weir::{Form, Rule, Validator};
///
/// let reporter = RecordingReporter::new();
/// let mut validator = Validator::new(
///     reporter.clone(),
///     vec![
///         Rule::new(
///             "username",
///             "Username must be between 5 and 15 characters and contain only letters.",
///             letters_only().and(len_between(5, 15)),
///         ),
///         Rule::new(
///             "eyeColor",
///             "Eye color must be one of: brown, green, gray, blue.",
///             one_of(["brown", "green", "gray", "blue"]),
///         ),
///     ],
/// );
///
/// let form = Form::new()
///     .with_field("username", "abc")
///     .with_field("eyeColor", "blue");
///
/// assert!(!validator.validate(&form));
/// assert_eq!(reporter.messages().len(), 1);
/// ```
pub struct Validator {
    reporter: Box<dyn Reporter>,
    rules: Vec<Rule>,
}

impl Validator {
    /// Create a validator over `rules`, reporting failures to `reporter`.
    pub fn new(reporter: impl Reporter + 'static, rules: Vec<Rule>) -> Self {
        Validator::new_boxed(Box::new(reporter), rules)
    }

    /// Create a validator from an already-boxed reporter, for callers that
    /// pick the delivery medium at runtime.
    pub fn new_boxed(reporter: Box<dyn Reporter>, rules: Vec<Rule>) -> Self {
        Validator { reporter, rules }
    }

    /// Swap the failure sink. The rule list is fixed; the delivery medium is
    /// not.
    pub fn set_reporter(&mut self, reporter: impl Reporter + 'static) {
        self.reporter = Box::new(reporter);
    }

    /// The rules, in evaluation (and display) order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule against the current field values.
    ///
    /// The pass starts with [`Reporter::reset`], clearing output accumulated
    /// by a previous pass on media that keep any. Each rule then reads its
    /// field (a missing field reads as the empty string), and each failing
    /// rule's message is reported in rule order. Returns `true` iff no rule
    /// failed.
    ///
    /// A panicking predicate does not abort the pass: the panic is caught,
    /// the rule counts as failed, a diagnostic of the form
    /// `"<field>: validation rule could not be evaluated"` is reported, and
    /// the remaining rules still run. The process-global panic hook fires
    /// before the panic is caught here; hosts that want quiet output install
    /// their own hook.
    pub fn validate<F: FieldSource + ?Sized>(&mut self, fields: &F) -> bool {
        self.reporter.reset();
        let mut all_passed = true;
        for rule in &self.rules {
            let value = fields.value(rule.field()).unwrap_or("");
            match panic::catch_unwind(AssertUnwindSafe(|| rule.is_valid(value))) {
                Ok(true) => {}
                Ok(false) => {
                    self.reporter.report(rule.message());
                    all_passed = false;
                }
                Err(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!(field = rule.field(), "rule predicate panicked");
                    self.reporter
                        .report(&format!("{}: validation rule could not be evaluated", rule.field()));
                    all_passed = false;
                }
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            rules = self.rules.len(),
            passed = all_passed,
            "validation pass finished"
        );
        all_passed
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::predicate::{not_empty, parsed_between};
    use crate::testing::RecordingReporter;
    use crate::Form;

    fn sample_rules() -> Vec<Rule> {
        vec![
            Rule::new("username", "username is required", not_empty()),
            Rule::new(
                "birthYear",
                "birth year out of range",
                parsed_between(1900, 2026),
            ),
        ]
    }

    #[test]
    fn all_rules_pass() {
        let reporter = RecordingReporter::new();
        let mut validator = Validator::new(reporter.clone(), sample_rules());
        let form = Form::new()
            .with_field("username", "validname")
            .with_field("birthYear", "2000");

        assert!(validator.validate(&form));
        assert!(reporter.messages().is_empty());
    }

    #[test]
    fn every_failing_rule_reports_in_order() {
        let reporter = RecordingReporter::new();
        let mut validator = Validator::new(reporter.clone(), sample_rules());
        let form = Form::new()
            .with_field("username", "")
            .with_field("birthYear", "1776");

        assert!(!validator.validate(&form));
        assert_eq!(
            reporter.messages(),
            vec!["username is required", "birth year out of range"]
        );
    }

    #[test]
    fn missing_fields_read_as_empty_not_error() {
        let reporter = RecordingReporter::new();
        let mut validator = Validator::new(reporter.clone(), sample_rules());
        let fields: HashMap<String, String> = HashMap::new();

        assert!(!validator.validate(&fields));
        assert_eq!(reporter.messages().len(), 2);
    }

    #[test]
    fn reset_runs_before_each_pass() {
        let reporter = RecordingReporter::new();
        let mut validator = Validator::new(reporter.clone(), sample_rules());
        let form = Form::new()
            .with_field("username", "")
            .with_field("birthYear", "2000");

        validator.validate(&form);
        validator.validate(&form);
        assert_eq!(reporter.reset_count(), 2);
        // second pass reports the same single failure, not an accumulation
        assert_eq!(reporter.messages(), vec!["username is required"]);
    }

    #[test]
    fn panicking_predicate_fails_the_rule_and_continues() {
        let reporter = RecordingReporter::new();
        let mut validator = Validator::new(
            reporter.clone(),
            vec![
                Rule::new("height", "height out of range", |_: &str| -> bool {
                    panic!("bad predicate")
                }),
                Rule::new("username", "username is required", not_empty()),
            ],
        );
        let form = Form::new()
            .with_field("height", "1.75")
            .with_field("username", "");

        assert!(!validator.validate(&form));
        assert_eq!(
            reporter.messages(),
            vec![
                "height: validation rule could not be evaluated",
                "username is required"
            ]
        );
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn panicking_predicate_emits_an_error_event() {
            let reporter = RecordingReporter::new();
            let mut validator = Validator::new(
                reporter,
                vec![Rule::new("height", "height out of range", |_: &str| -> bool {
                    panic!("bad predicate")
                })],
            );
            let form = Form::new().with_field("height", "1.75");

            assert!(!validator.validate(&form));
            assert!(logs_contain("rule predicate panicked"));
        }
    }

    #[test]
    fn set_reporter_swaps_the_sink() {
        let first = RecordingReporter::new();
        let second = RecordingReporter::new();
        let mut validator = Validator::new(first.clone(), sample_rules());
        let form = Form::new()
            .with_field("username", "")
            .with_field("birthYear", "2000");

        validator.validate(&form);
        validator.set_reporter(second.clone());
        validator.validate(&form);

        assert_eq!(first.messages().len(), 1);
        assert_eq!(second.messages().len(), 1);
    }
}
