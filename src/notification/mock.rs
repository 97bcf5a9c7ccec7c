//! Mock notification sink for testing.

use std::sync::{Mutex, MutexGuard};

use crate::interfaces::NotificationSink;
use crate::model::NotificationPayload;

/// Records every payload it is handed.
#[derive(Debug, Default)]
pub struct MockNotificationSink {
    sent: Mutex<Vec<NotificationPayload>>,
}

impl MockNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn sent(&self) -> MutexGuard<'_, Vec<NotificationPayload>> {
        // A poisoned lock only means another test thread panicked mid-push.
        self.sent.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn sent_count(&self) -> usize {
        self.sent().len()
    }

    /// Ids of sent payloads, sorted, for order-insensitive assertions.
    pub fn sent_ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.sent().iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids
    }

    pub fn take_sent(&self) -> Vec<NotificationPayload> {
        std::mem::take(&mut *self.sent())
    }
}

impl NotificationSink for MockNotificationSink {
    fn send(&self, payload: NotificationPayload) {
        self.sent().push(payload);
    }
}
