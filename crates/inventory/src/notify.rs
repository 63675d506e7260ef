//! Notification seam for low-stock alerts.
//!
//! The inventory core never talks to a display directly; it hands alert text to a
//! [`NotificationSink`] supplied by the caller.

use std::cell::RefCell;
use std::rc::Rc;

/// Receives warning messages raised by inventory operations.
pub trait NotificationSink {
    fn warn(&self, message: &str);
}

impl<S: NotificationSink + ?Sized> NotificationSink for Box<S> {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for Rc<S> {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

/// Forwards alerts to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(alert = %message, "low stock alert");
    }
}

/// Discards every alert.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn warn(&self, _message: &str) {}
}

/// Records alerts in memory. Clones share the same buffer, so a test can keep one
/// handle and give the other to the service.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    messages: Rc<RefCell<Vec<String>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All alerts received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    /// Drain recorded alerts.
    pub fn take(&self) -> Vec<String> {
        self.messages.take()
    }
}

impl NotificationSink for CollectingSink {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
