//! Reminder storage interface.

use async_trait::async_trait;

use crate::model::Reminder;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Reminder not found: id={id}")]
    NotFound { id: String },

    #[cfg(feature = "sqlite")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Reminder {id} rejected: {reason}")]
    Rejected { id: String, reason: String },
}

/// Interface for reminder persistence.
///
/// Implementations must tolerate concurrent reads and writes from many
/// tasks; per-row atomicity is the store's responsibility.
///
/// Implementations:
/// - `InMemoryReminderStore`: insertion-ordered in-memory storage
/// - `SqliteReminderStore`: SQLite storage
#[async_trait]
pub trait ReminderStore: Send + Sync {
    /// Retrieve every reminder, in the order each id was first saved.
    ///
    /// An empty store yields an empty vector, not an error.
    async fn list_all(&self) -> Result<Vec<Reminder>>;

    /// Retrieve a single reminder.
    ///
    /// Returns `StorageError::NotFound` when no reminder has this id.
    async fn get_by_id(&self, id: &str) -> Result<Reminder>;

    /// Insert a reminder, replacing any existing one with the same id in place.
    async fn upsert(&self, reminder: Reminder) -> Result<()>;

    /// Remove every reminder. Repeated calls are no-ops.
    async fn delete_all(&self) -> Result<()>;
}
