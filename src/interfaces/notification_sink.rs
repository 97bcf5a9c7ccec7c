//! Notification delivery interface.

use crate::model::NotificationPayload;

/// Presents a matched reminder to the user.
///
/// `send` is a synchronous hand-off: the caller does not wait for, or
/// receive, a delivery result. Retries and deduplication of delivery belong
/// to the implementation.
pub trait NotificationSink: Send + Sync {
    fn send(&self, payload: NotificationPayload);
}
