//! # User Notifications
//!
//! Success and error messages surfaced to whoever drives the store.
//!
//! The store never fails a cart or fetch operation outright; it reports
//! through a [`Notifier`] instead.

use tracing::{info, warn};

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);
}

/// Routes notifications into the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "basket::notify", "{}", message);
    }

    fn error(&self, message: &str) {
        warn!(target: "basket::notify", "{}", message);
    }
}
