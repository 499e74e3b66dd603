//! Accumulating-list reporting into a shared container

use std::cell::RefCell;
use std::rc::Rc;

use super::Reporter;

/// Shared handle to the entry container a [`ListReporter`] appends into.
///
/// The host keeps a handle to render the entries while the reporter (owned
/// by the validator) appends and clears them. Handles are cheap clones of
/// the same container.
#[derive(Debug, Clone, Default)]
pub struct ListHandle {
    entries: Rc<RefCell<Vec<String>>>,
}

impl ListHandle {
    /// Snapshot of the current entries, in report order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    /// Number of entries currently displayed.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// True when no entries are displayed.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

/// Reporter that appends each failure as a visible entry in a shared
/// container, clearing all entries on `reset` so the container never
/// accumulates messages across passes.
///
/// Uses `Rc` internally and is deliberately not `Send`: list reporting
/// belongs to the single-threaded UI side of the host event loop.
///
/// # Example
///
/// ```rust
/// use weir::{ListReporter, Reporter};
///
/// let (mut reporter, container) = ListReporter::new();
/// reporter.report("Eye color must be one of: brown, green, gray, blue.");
/// assert_eq!(container.len(), 1);
///
/// // A new pass starts by clearing the previous one.
/// reporter.reset();
/// assert!(container.is_empty());
/// ```
#[derive(Debug)]
pub struct ListReporter {
    container: ListHandle,
}

impl ListReporter {
    /// Create a reporter together with the handle the host renders from.
    pub fn new() -> (Self, ListHandle) {
        let container = ListHandle::default();
        let reporter = ListReporter {
            container: container.clone(),
        };
        (reporter, container)
    }

    /// Bind a reporter to an existing container.
    pub fn bind(container: &ListHandle) -> Self {
        ListReporter {
            container: container.clone(),
        }
    }
}

impl Reporter for ListReporter {
    fn report(&mut self, message: &str) {
        self.container.entries.borrow_mut().push(message.to_string());
    }

    fn reset(&mut self) {
        self.container.entries.borrow_mut().clear();
    }
}
