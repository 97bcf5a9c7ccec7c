//! Reminder repository.
//!
//! Non-blocking facade over a [`ReminderStore`]. Every operation runs on its
//! own spawned task and comes back as an explicit `Result`; store faults and
//! panics inside the store are reported as [`RepositoryError`] values.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::interfaces::{ReminderStore, StorageError};
use crate::model::Reminder;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Errors returned by the repository.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Reminder not found: {id}")]
    NotFound { id: String },

    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Storage task aborted: {0}")]
    Aborted(String),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<StorageError> for RepositoryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { id } => Self::NotFound { id },
            other => Self::Storage(other.to_string()),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

/// Repository for reminder operations.
///
/// Cheap to clone; clones share the underlying store.
#[derive(Clone)]
pub struct ReminderRepository {
    store: Arc<dyn ReminderStore>,
}

impl ReminderRepository {
    pub fn new(store: Arc<dyn ReminderStore>) -> Self {
        Self { store }
    }

    /// Run a store operation on a spawned task and await its completion.
    async fn run<T, F, Fut>(&self, operation: &'static str, op: F) -> Result<T>
    where
        F: FnOnce(Arc<dyn ReminderStore>) -> Fut,
        Fut: Future<Output = std::result::Result<T, StorageError>> + Send + 'static,
        T: Send + 'static,
    {
        let task = tokio::spawn(op(Arc::clone(&self.store)));

        match task.await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(StorageError::NotFound { id })) => {
                debug!(operation, id = %id, "Reminder not found");
                Err(RepositoryError::NotFound { id })
            }
            Ok(Err(e)) => {
                warn!(operation, error = %e, "Storage operation failed");
                Err(e.into())
            }
            Err(join_err) => {
                let message = if join_err.is_panic() {
                    panic_message(&*join_err.into_panic())
                } else {
                    join_err.to_string()
                };
                error!(operation, error = %message, "Storage task aborted");
                Err(RepositoryError::Aborted(message))
            }
        }
    }

    /// All reminders, in insertion order.
    pub async fn get_reminders(&self) -> Result<Vec<Reminder>> {
        self.run("get_reminders", |store| async move { store.list_all().await })
            .await
    }

    #[tracing::instrument(name = "repository.get_reminder", skip(self))]
    pub async fn get_reminder(&self, id: &str) -> Result<Reminder> {
        let id = id.to_string();
        self.run("get_reminder", move |store| async move {
            store.get_by_id(&id).await
        })
        .await
    }

    /// Insert or replace a reminder keyed by its id.
    pub async fn save_reminder(&self, reminder: Reminder) -> Result<()> {
        self.run("save_reminder", move |store| async move {
            store.upsert(reminder).await
        })
        .await
    }

    /// Remove every reminder.
    ///
    /// Returns only after the deletion has landed in the store.
    pub async fn delete_all_reminders(&self) -> Result<()> {
        self.run("delete_all_reminders", |store| async move {
            store.delete_all().await
        })
        .await
    }
}
