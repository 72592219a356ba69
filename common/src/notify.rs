//! # Notifications
//!
//! Broadcast of plain-text messages to an ordered list of subscribers.
//!
//! Delivery is synchronous and follows subscription order. A failing
//! subscriber is logged and skipped; the remaining subscribers still receive
//! the message.

use tracing::{debug, warn};

/// Receives broadcast messages.
pub trait Observer {
    /// Handles one message. An error is reported by the [`Notifier`] but never stops the broadcast.
    fn update(&self, message: &str) -> anyhow::Result<()>;
}

impl<F> Observer for F
where
    F: Fn(&str) -> anyhow::Result<()>,
{
    fn update(&self, message: &str) -> anyhow::Result<()> {
        self(message)
    }
}

/// Outcome of a single [`Notifier::notify`] call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NotifyReport {
    pub delivered: usize,
    pub failed: usize,
}

#[derive(Default)]
pub struct Notifier {
    observers: Vec<Box<dyn Observer>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `observer`. The same handle may be subscribed more than once.
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
        debug!(subscribers = self.observers.len(), "Subscriber registered");
    }

    pub fn notify(&self, message: &str) -> NotifyReport {
        let mut report = NotifyReport::default();
        for (idx, observer) in self.observers.iter().enumerate() {
            match observer.update(message) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    warn!("Subscriber #{idx} failed to handle notification: {e}");
                    report.failed += 1;
                }
            }
        }
        report
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
