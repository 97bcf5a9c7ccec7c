//! Domain repositories.

mod reminder;

pub use reminder::{ReminderRepository, RepositoryError, Result};
