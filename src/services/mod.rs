//! Application services.

pub mod reminders;

pub use reminders::{ListState, ReminderService, ServiceError};
