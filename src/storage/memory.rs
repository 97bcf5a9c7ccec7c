//! In-memory ReminderStore.
//!
//! Backs the `memory` storage type and doubles as the store used in tests,
//! hence the fault-injection switches.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::interfaces::reminder_store::{ReminderStore, Result, StorageError};
use crate::model::Reminder;

/// Reminder store kept in memory, iterated in insertion order.
#[derive(Default)]
pub struct InMemoryReminderStore {
    reminders: RwLock<Vec<Reminder>>,
    fail_on_get: RwLock<bool>,
    fail_on_list: RwLock<bool>,
    failing_ids: RwLock<HashSet<String>>,
    delays: RwLock<HashMap<String, Duration>>,
}

impl InMemoryReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `reminders`, upserted in order.
    pub fn with_reminders(reminders: impl IntoIterator<Item = Reminder>) -> Self {
        let mut stored: Vec<Reminder> = Vec::new();
        for reminder in reminders {
            match stored.iter_mut().find(|r| r.id == reminder.id) {
                Some(existing) => *existing = reminder,
                None => stored.push(reminder),
            }
        }
        Self {
            reminders: RwLock::new(stored),
            ..Self::default()
        }
    }

    pub async fn set_fail_on_get(&self, fail: bool) {
        *self.fail_on_get.write().await = fail;
    }

    pub async fn set_fail_on_list(&self, fail: bool) {
        *self.fail_on_list.write().await = fail;
    }

    /// Make lookups of a single id fail while other ids keep working.
    pub async fn fail_on_id(&self, id: impl Into<String>) {
        self.failing_ids.write().await.insert(id.into());
    }

    /// Delay lookups of `id` by `delay` before answering.
    pub async fn delay_id(&self, id: impl Into<String>, delay: Duration) {
        self.delays.write().await.insert(id.into(), delay);
    }

    pub async fn stored_count(&self) -> usize {
        self.reminders.read().await.len()
    }
}

#[async_trait]
impl ReminderStore for InMemoryReminderStore {
    async fn list_all(&self) -> Result<Vec<Reminder>> {
        if *self.fail_on_list.read().await {
            return Err(StorageError::Unavailable("Mock list failure".to_string()));
        }
        Ok(self.reminders.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Reminder> {
        let delay = self.delays.read().await.get(id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if *self.fail_on_get.read().await || self.failing_ids.read().await.contains(id) {
            return Err(StorageError::Unavailable(format!(
                "Mock get failure for {}",
                id
            )));
        }

        self.reminders
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound { id: id.to_string() })
    }

    async fn upsert(&self, reminder: Reminder) -> Result<()> {
        let mut reminders = self.reminders.write().await;
        match reminders.iter_mut().find(|r| r.id == reminder.id) {
            Some(existing) => *existing = reminder,
            None => reminders.push(reminder),
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.reminders.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(id: &str, title: &str) -> Reminder {
        Reminder::new(id, title, "description", "location", 42.123, 75.3216)
    }

    #[tokio::test]
    async fn test_upsert_replaces_in_place() {
        let store = InMemoryReminderStore::new();
        store.upsert(reminder("1", "Clean room")).await.unwrap();
        store.upsert(reminder("2", "Clean garage")).await.unwrap();
        store.upsert(reminder("1", "Clean kitchen")).await.unwrap();

        let all = store.list_all().await.unwrap();
        let ids: Vec<_> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(all[0].title, "Clean kitchen");
    }

    #[tokio::test]
    async fn test_with_reminders_deduplicates() {
        let store =
            InMemoryReminderStore::with_reminders([reminder("1", "a"), reminder("1", "b")]);

        assert_eq!(store.stored_count().await, 1);
        assert_eq!(store.get_by_id("1").await.unwrap().title, "b");
    }

    #[tokio::test]
    async fn test_fail_on_id_only_affects_that_id() {
        let store =
            InMemoryReminderStore::with_reminders([reminder("A", "a"), reminder("B", "b")]);
        store.fail_on_id("B").await;

        assert!(store.get_by_id("A").await.is_ok());
        assert!(matches!(
            store.get_by_id("B").await,
            Err(StorageError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_fail_on_list() {
        let store = InMemoryReminderStore::new();
        store.set_fail_on_list(true).await;

        assert!(store.list_all().await.is_err());
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let store = InMemoryReminderStore::new();

        let err = store.get_by_id("missing").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { ref id } if id == "missing"));
    }
}
