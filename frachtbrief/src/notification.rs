//! Sinks receiving the notifications raised during transaction processing.

use frachtbrief_record_api::Notification;
use std::{fmt::Debug, mem, sync::Mutex};

/// A `NotificationSink` receives every notification raised while processing
/// transactions.
///
/// Emitting is fire-and-forget; no delivery guarantee surfaces to the caller.
pub trait NotificationSink: Debug + Send + Sync {
    /// Hand a freshly raised notification to the sink.
    fn emit(&self, notification: Notification);
}

/// Writes every notification to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn emit(&self, notification: Notification) {
        log::info!("{}", notification);
    }
}

/// Collects notifications in memory, in emit order.
#[derive(Debug, Default)]
#[must_use]
pub struct BufferSink {
    notifications: Mutex<Vec<Notification>>,
}

impl BufferSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return all notifications collected so far.
    pub fn take(&self) -> Vec<Notification> {
        mem::take(&mut *self.notifications.lock().unwrap())
    }
}

impl NotificationSink for BufferSink {
    fn emit(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}
