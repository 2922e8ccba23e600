//! Notification delivery
//!
//! [`Notifier`] separates deciding that a notification is due from getting
//! it in front of the user. Delivery is fire-and-forget: a failed delivery
//! is logged and dropped, and must never bubble back into tracker state.

use std::io::Write;

use log::warn;

use crate::services::notification::Notification;

/// Whether the user allows notifications to be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Something that can show a notification to the user
pub trait Notifier {
    /// Deliver a notification. Failures are swallowed by implementations.
    fn notify(&self, notification: &Notification);

    /// Ask for permission to deliver notifications
    fn request_permission(&self) -> Permission;
}

/// Prints notifications to the terminal
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        let mut stdout = std::io::stdout();
        if let Err(e) = writeln!(stdout, "\n🔔 {}\n   {}", notification.title, notification.body) {
            warn!("could not deliver notification '{}': {}", notification.title, e);
        }
    }

    fn request_permission(&self) -> Permission {
        // The terminal is always available
        Permission::Granted
    }
}

/// Discards every notification
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: &Notification) {}

    fn request_permission(&self) -> Permission {
        Permission::Denied
    }
}
