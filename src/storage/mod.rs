//! Storage implementations.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::interfaces::ReminderStore;

pub mod memory;
#[cfg(feature = "sqlite")]
pub mod schema;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use crate::interfaces::reminder_store::{Result, StorageError};
pub use memory::InMemoryReminderStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteReminderStore;

/// Storage type discriminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    Memory,
    #[default]
    Sqlite,
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage type discriminator.
    #[serde(rename = "type")]
    pub storage_type: StorageType,
    /// Path to database file (sqlite only).
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_type: StorageType::Sqlite,
            path: "./data/reminders.db".to_string(),
        }
    }
}

/// Initialize storage based on configuration.
pub async fn init_storage(
    config: &StorageConfig,
) -> std::result::Result<Arc<dyn ReminderStore>, Box<dyn std::error::Error>> {
    info!(storage_type = %config.storage_type, path = %config.path, "Initializing storage");

    match config.storage_type {
        StorageType::Memory => Ok(Arc::new(InMemoryReminderStore::new())),
        #[cfg(feature = "sqlite")]
        StorageType::Sqlite => {
            if let Some(parent) = std::path::Path::new(&config.path).parent() {
                std::fs::create_dir_all(parent)?;
            }

            let pool =
                sqlx::SqlitePool::connect(&format!("sqlite:{}?mode=rwc", config.path)).await?;

            let store = SqliteReminderStore::new(pool);
            store.init().await?;

            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "sqlite"))]
        StorageType::Sqlite => {
            tracing::error!("SQLite storage requested but 'sqlite' feature is not enabled");
            Err("SQLite feature not enabled".into())
        }
    }
}
