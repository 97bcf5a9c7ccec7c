//! Abstract interfaces for placemark components.
//!
//! These traits define the contracts for:
//! - Reminder storage (persistence)
//! - Notification delivery (presentation)

pub mod notification_sink;
pub mod reminder_store;

pub use notification_sink::NotificationSink;
pub use reminder_store::{ReminderStore, StorageError};
