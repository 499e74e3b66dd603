//! Field sources and the in-memory form
//!
//! [`FieldSource`] is the contract the validator reads field values through.
//! [`Form`] is an ordered in-memory field set that also plays the submission
//! source role: it holds at most one submission handler, dispatches
//! [`Form::submit`] events to it, and runs a host-installable default action
//! unless the handler suppressed it.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Read access to the current value of named fields.
///
/// Returning `None` for an unknown key is not an error; the validator treats
/// a missing field as the empty string.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use weir::FieldSource;
///
/// let mut fields = HashMap::new();
/// fields.insert("username".to_string(), "validname".to_string());
///
/// assert_eq!(fields.value("username"), Some("validname"));
/// assert_eq!(fields.value("missing"), None);
/// ```
pub trait FieldSource {
    /// The current value of the field named `key`, if the field exists.
    fn value(&self, key: &str) -> Option<&str>;
}

impl FieldSource for HashMap<String, String> {
    fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Outcome of one submission event.
///
/// Handed to the submission handler, which may call
/// [`prevent_default`](Submission::prevent_default); returned from
/// [`Form::submit`] so the host can observe what happened.
#[derive(Debug, Default)]
pub struct Submission {
    handled: bool,
    default_prevented: bool,
}

impl Submission {
    /// Suppress the form's default action for this submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// True when the default action was suppressed.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// True when a handler was installed and ran.
    pub fn handled(&self) -> bool {
        self.handled
    }
}

type Handler = Box<dyn FnMut(&mut Form, &mut Submission)>;
type DefaultAction = Box<dyn FnMut(&mut Form)>;

#[derive(Debug, Clone)]
struct Field {
    name: String,
    value: String,
}

/// An ordered, in-memory set of named fields with submission dispatch.
///
/// Field order is insertion order; re-adding an existing name replaces its
/// value in place. The form carries at most one submission handler, and
/// binding a new one replaces the previous.
///
/// # Example
///
/// ```rust
/// use weir::{FieldSource, Form};
///
/// let mut form = Form::new()
///     .with_field("username", "")
///     .with_field("birthYear", "");
///
/// assert!(form.set("username", "validname"));
/// assert!(!form.set("shoeSize", "43")); // unknown field, host wiring bug
/// assert_eq!(form.value("username"), Some("validname"));
///
/// form.clear_fields();
/// assert_eq!(form.value("username"), Some(""));
/// ```
pub struct Form {
    fields: Vec<Field>,
    handler: Option<Handler>,
    default_action: Option<DefaultAction>,
}

impl Form {
    /// Create an empty form.
    pub fn new() -> Self {
        Form {
            fields: Vec::new(),
            handler: None,
            default_action: None,
        }
    }

    /// Add a field with an initial value, keeping insertion order. Re-adding
    /// an existing name replaces its value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(Field { name, value }),
        }
        self
    }

    /// Set the value of an existing field. Returns `false` when no field of
    /// that name exists; submission-time code never panics over wiring bugs.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// The field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    /// Reset every field to the empty string, e.g. after a successful
    /// submission.
    pub fn clear_fields(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    /// Install the submission handler, replacing any previous one.
    pub fn on_submit(&mut self, handler: impl FnMut(&mut Form, &mut Submission) + 'static) {
        self.handler = Some(Box::new(handler));
    }

    /// Install the default action that runs after a submission unless the
    /// handler called [`Submission::prevent_default`].
    pub fn set_default_action(&mut self, action: impl FnMut(&mut Form) + 'static) {
        self.default_action = Some(Box::new(action));
    }

    /// Dispatch one submission event: run the handler (if any), then the
    /// default action unless it was prevented. Runs to completion
    /// synchronously.
    pub fn submit(&mut self) -> Submission {
        let mut submission = Submission::default();
        // The handler borrows the form, so it is moved out for the duration
        // of the call; a handler that installed a replacement wins.
        if let Some(mut handler) = self.handler.take() {
            submission.handled = true;
            handler(self, &mut submission);
            if self.handler.is_none() {
                self.handler = Some(handler);
            }
        }
        if !submission.default_prevented {
            if let Some(mut action) = self.default_action.take() {
                action(self);
                if self.default_action.is_none() {
                    self.default_action = Some(action);
                }
            }
        }
        submission
    }
}

impl Default for Form {
    fn default() -> Self {
        Form::new()
    }
}

impl FieldSource for Form {
    fn value(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == key)
            .map(|field| field.value.as_str())
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("fields", &self.fields)
            .field("has_handler", &self.handler.is_some())
            .field("has_default_action", &self.default_action.is_some())
            .finish()
    }
}
