//! # The Notifier Port
//!
//! Outbound message delivery behind a trait.
//!
//! The engine builds [`Notification`] payloads in the core and hands them
//! here. Delivery is fire-and-forget: a failed delivery is logged and the
//! operation that produced it still succeeds.

use std::cell::RefCell;

use thiserror::Error;
use tracing::debug;

use nexo_core::Notification;

/// Delivery failure. The transport decides what goes in the message.
#[derive(Debug, Error)]
#[error("notification delivery failed: {0}")]
pub struct NotifyError(pub String);

/// Delivers notification payloads to their target phone.
pub trait Notifier {
    fn deliver(&self, notification: &Notification) -> Result<(), NotifyError>;
}

// Shared handles can be used where an owned notifier is expected; tests
// keep one handle to inspect deliveries.
impl<T: Notifier + ?Sized> Notifier for std::rc::Rc<T> {
    fn deliver(&self, notification: &Notification) -> Result<(), NotifyError> {
        (**self).deliver(notification)
    }
}

/// Notifier that drops everything (logging the payload at debug level).
///
/// Used when no delivery channel is configured.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn deliver(&self, notification: &Notification) -> Result<(), NotifyError> {
        debug!(phone = %notification.phone, "dropping notification (no transport)");
        Ok(())
    }
}

/// Notifier that records every payload. Test double.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, in order.
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn deliver(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.sent.borrow_mut().push(notification.clone());
        Ok(())
    }
}
