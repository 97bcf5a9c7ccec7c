//! Notification sink implementations.

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::interfaces::NotificationSink;
use crate::model::NotificationPayload;

pub mod mock;

pub use mock::MockNotificationSink;

/// Sink that reports each notification as a structured log event.
///
/// Used by the worker binary, where presentation is the host's concern.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn send(&self, payload: NotificationPayload) {
        info!(
            id = %payload.id,
            title = %payload.title,
            location = %payload.location_label,
            latitude = payload.latitude,
            longitude = payload.longitude,
            "Reminder notification"
        );
    }
}

/// Sink that forwards payloads to a presentation task over a channel.
#[derive(Debug, Clone)]
pub struct ChannelNotificationSink {
    sender: mpsc::UnboundedSender<NotificationPayload>,
}

impl ChannelNotificationSink {
    pub fn new(sender: mpsc::UnboundedSender<NotificationPayload>) -> Self {
        Self { sender }
    }

    /// Create a sink together with the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NotificationPayload>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl NotificationSink for ChannelNotificationSink {
    fn send(&self, payload: NotificationPayload) {
        if let Err(e) = self.sender.send(payload) {
            warn!(id = %e.0.id, "Notification receiver closed, dropping notification");
        }
    }
}
