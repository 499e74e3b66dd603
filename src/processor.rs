//! Submission gating
//!
//! A [`Processor`] binds a [`Validator`] and a success callback to a form's
//! submission lifecycle: every submission is intercepted, the default action
//! is always suppressed, and the success callback runs only when validation
//! passes. The processor keeps no state across submissions; each event is
//! handled independently with no retry, backoff or rate limiting.

use std::fmt;

use crate::error::SetupError;
use crate::form::{FieldSource, Form};
use crate::report::{Reporter, StreamReporter};
use crate::rule::Rule;
use crate::validator::Validator;

type SuccessCallback = Box<dyn FnMut(&mut Form)>;

/// Binds validation and a success callback to a form's submissions.
///
/// Assemble one through [`Processor::builder`], then [`attach`](Self::attach)
/// it to a form. `attach` consumes the processor, so it gates exactly one
/// submission source.
///
/// # Example
///
/// ```rust
/// use weir::predicate::{len_between, letters_only, PredicateExt};
/// use weir::testing::RecordingReporter;
/// use weir::{FieldSource, Form, Processor, Rule};
///
/// let mut form = Form::new().with_field("username", "abc");
///
/// let reporter = RecordingReporter::new();
/// let processor = Processor::builder()
///     .rule(Rule::new(
///         "username",
///         "Username must be between 5 and 15 characters and contain only letters.",
///         letters_only().and(len_between(5, 15)),
///     ))
///     .reporter(reporter.clone())
///     .on_success(|form| form.clear_fields())
///     .build()
///     .unwrap();
/// processor.attach(&mut form).unwrap();
///
/// // failing submission: reported, success action withheld
/// let submission = form.submit();
/// assert!(submission.default_prevented());
/// assert_eq!(reporter.messages().len(), 1);
///
/// // passing submission: success action ran and cleared the form
/// form.set("username", "validname");
/// form.submit();
/// assert!(reporter.messages().is_empty());
/// assert_eq!(form.value("username"), Some(""));
/// ```
pub struct Processor {
    validator: Validator,
    on_success: SuccessCallback,
}

impl Processor {
    /// Start assembling a processor. This is the configuration entry point
    /// for the whole pipeline; there is no module-level wiring.
    pub fn builder() -> ProcessorBuilder {
        ProcessorBuilder {
            rules: Vec::new(),
            reporter: None,
            on_success: None,
        }
    }

    /// Bind an already-assembled validator and success callback.
    pub fn new(validator: Validator, on_success: impl FnMut(&mut Form) + 'static) -> Self {
        Processor {
            validator,
            on_success: Box::new(on_success),
        }
    }

    /// Install the submission handler on `form`.
    ///
    /// On every subsequent submission the handler suppresses the form's
    /// default action, validates all rules, and invokes the success callback
    /// exactly once iff the pass was clean.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::UnknownField`] when a rule names a field the
    /// form does not carry. A rule that could only ever read the empty
    /// string is a configuration bug, caught here rather than silently
    /// failing on every submission.
    pub fn attach(mut self, form: &mut Form) -> Result<(), SetupError> {
        for rule in self.validator.rules() {
            if form.value(rule.field()).is_none() {
                return Err(SetupError::UnknownField {
                    field: rule.field().to_string(),
                });
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(rules = self.validator.rules().len(), "processor attached");
        form.on_submit(move |form, submission| {
            submission.prevent_default();
            if self.validator.validate(&*form) {
                (self.on_success)(form);
            }
        });
        Ok(())
    }
}

impl fmt::Debug for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Processor")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

/// Builder collecting the rules, reporter and success callback of a
/// [`Processor`].
///
/// The reporter defaults to [`StreamReporter::stderr`] and the success
/// callback to a no-op; rules have no default, an empty rule list is
/// rejected at [`build`](Self::build) time.
pub struct ProcessorBuilder {
    rules: Vec<Rule>,
    reporter: Option<Box<dyn Reporter>>,
    on_success: Option<SuccessCallback>,
}

impl ProcessorBuilder {
    /// Append one rule. Evaluation order is the order rules are added.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a batch of rules.
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Use `reporter` as the failure sink.
    pub fn reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Some(Box::new(reporter));
        self
    }

    /// Run `on_success` after each fully clean validation pass.
    pub fn on_success(mut self, on_success: impl FnMut(&mut Form) + 'static) -> Self {
        self.on_success = Some(Box::new(on_success));
        self
    }

    /// Assemble the processor.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::NoRules`] when no rule was added; a pipeline
    /// that validates nothing is a configuration bug, not a trivially
    /// passing one.
    pub fn build(self) -> Result<Processor, SetupError> {
        if self.rules.is_empty() {
            return Err(SetupError::NoRules);
        }
        let reporter = self
            .reporter
            .unwrap_or_else(|| Box::new(StreamReporter::stderr()));
        let on_success = self.on_success.unwrap_or_else(|| Box::new(|_: &mut Form| {}));
        Ok(Processor {
            validator: Validator::new_boxed(reporter, self.rules),
            on_success,
        })
    }
}

impl fmt::Debug for ProcessorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorBuilder")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::predicate::not_empty;
    use crate::testing::RecordingReporter;

    fn required(field: &str) -> Rule {
        Rule::new(field, format!("{field} is required"), not_empty())
    }

    #[test]
    fn build_rejects_an_empty_rule_list() {
        assert_eq!(Processor::builder().build().unwrap_err(), SetupError::NoRules);
    }

    #[test]
    fn attach_rejects_rules_over_unknown_fields() {
        let mut form = Form::new().with_field("username", "x");
        let processor = Processor::builder()
            .rule(required("username"))
            .rule(required("shoeSize"))
            .build()
            .unwrap();

        let err = processor.attach(&mut form).unwrap_err();
        assert_eq!(
            err,
            SetupError::UnknownField {
                field: "shoeSize".to_string()
            }
        );
    }

    #[test]
    fn success_callback_fires_once_per_clean_submission() {
        let successes = Rc::new(Cell::new(0));
        let counter = successes.clone();
        let reporter = RecordingReporter::new();
        let mut form = Form::new().with_field("username", "validname");

        Processor::builder()
            .rule(required("username"))
            .reporter(reporter.clone())
            .on_success(move |_| counter.set(counter.get() + 1))
            .build()
            .unwrap()
            .attach(&mut form)
            .unwrap();

        form.submit();
        assert_eq!(successes.get(), 1);
        form.submit();
        assert_eq!(successes.get(), 2);
        assert!(reporter.messages().is_empty());
    }

    #[test]
    fn success_callback_withheld_on_failure() {
        let successes = Rc::new(Cell::new(0));
        let counter = successes.clone();
        let reporter = RecordingReporter::new();
        let mut form = Form::new().with_field("username", "");

        Processor::builder()
            .rule(required("username"))
            .reporter(reporter.clone())
            .on_success(move |_| counter.set(counter.get() + 1))
            .build()
            .unwrap()
            .attach(&mut form)
            .unwrap();

        form.submit();
        assert_eq!(successes.get(), 0);
        assert_eq!(reporter.messages(), vec!["username is required"]);
    }

    #[test]
    fn default_action_always_suppressed() {
        let default_runs = Rc::new(Cell::new(0));
        let counter = default_runs.clone();
        let mut form = Form::new().with_field("username", "validname");
        form.set_default_action(move |_| counter.set(counter.get() + 1));

        Processor::builder()
            .rule(required("username"))
            .reporter(RecordingReporter::new())
            .build()
            .unwrap()
            .attach(&mut form)
            .unwrap();

        // suppressed on success and on failure alike
        assert!(form.submit().default_prevented());
        form.set("username", "");
        assert!(form.submit().default_prevented());
        assert_eq!(default_runs.get(), 0);
    }
}
