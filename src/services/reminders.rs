//! User-driven reminder flows: save, list, clear.
//!
//! List state is pushed to the presentation layer as [`ListState`]
//! snapshots on a one-way channel; the service holds no view state.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::geofence::{GeofenceConfig, GeofenceRegistration};
use crate::model::Reminder;
use crate::repository::{ReminderRepository, RepositoryError};
use crate::validation::{ReminderDraft, ValidationError};

/// Errors from reminder service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Snapshot of the reminder list as seen by a consumer.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Reminder>),
    Empty,
    Failed(String),
}

pub struct ReminderService {
    repository: ReminderRepository,
    geofence: GeofenceConfig,
}

impl ReminderService {
    pub fn new(repository: ReminderRepository, geofence: GeofenceConfig) -> Self {
        Self {
            repository,
            geofence,
        }
    }

    /// Validate a draft, persist it, and return the region to register.
    pub async fn save(&self, draft: ReminderDraft) -> Result<GeofenceRegistration, ServiceError> {
        let reminder = draft.into_reminder()?;
        let registration = GeofenceRegistration::for_reminder(&reminder, &self.geofence);

        info!(id = %reminder.id, title = %reminder.title, "Saving reminder");
        self.repository.save_reminder(reminder).await?;

        Ok(registration)
    }

    /// Load all reminders, publishing `Loading` and then the resulting state.
    ///
    /// A closed receiver is not an error; the load simply has no audience.
    pub async fn load(&self, states: &mpsc::Sender<ListState>) {
        if states.send(ListState::Loading).await.is_err() {
            debug!("List state receiver closed before load");
            return;
        }

        let state = match self.repository.get_reminders().await {
            Ok(reminders) if reminders.is_empty() => ListState::Empty,
            Ok(reminders) => ListState::Loaded(reminders),
            Err(e) => {
                warn!(error = %e, "Failed to load reminders");
                ListState::Failed(e.to_string())
            }
        };

        if states.send(state).await.is_err() {
            debug!("List state receiver closed during load");
        }
    }

    /// Remove every reminder; returns once the store is empty.
    pub async fn clear(&self) -> Result<(), ServiceError> {
        self.repository.delete_all_reminders().await?;
        info!("Cleared all reminders");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::interfaces::ReminderStore;
    use crate::storage::InMemoryReminderStore;

    fn service_with(store: Arc<InMemoryReminderStore>) -> ReminderService {
        ReminderService::new(ReminderRepository::new(store), GeofenceConfig::default())
    }

    fn draft(title: &str) -> ReminderDraft {
        ReminderDraft {
            title: Some(title.to_string()),
            description: Some("description".to_string()),
            location_label: Some("location".to_string()),
            latitude: Some(42.123),
            longitude: Some(75.3216),
            id: None,
        }
    }

    async fn collect(mut receiver: mpsc::Receiver<ListState>) -> Vec<ListState> {
        let mut states = Vec::new();
        while let Some(state) = receiver.recv().await {
            states.push(state);
        }
        states
    }

    #[tokio::test]
    async fn test_save_persists_and_returns_registration() {
        let store = Arc::new(InMemoryReminderStore::new());
        let service = service_with(store.clone());

        let registration = service.save(draft("Clean room")).await.unwrap();

        assert_eq!(store.stored_count().await, 1);
        let saved = store.list_all().await.unwrap();
        assert_eq!(saved[0].id, registration.request_id);
        assert_eq!(saved[0].title, "Clean room");
    }

    #[tokio::test]
    async fn test_invalid_draft_is_not_saved() {
        let store = Arc::new(InMemoryReminderStore::new());
        let service = service_with(store.clone());

        let err = service
            .save(ReminderDraft {
                title: None,
                ..draft("x")
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::MissingTitle)
        ));
        assert_eq!(store.stored_count().await, 0);
    }

    #[tokio::test]
    async fn test_load_emits_loading_then_list() {
        let store = Arc::new(InMemoryReminderStore::with_reminders([
            Reminder::new("1", "a", "", "l", 1.0, 1.0),
            Reminder::new("2", "b", "", "l", 2.0, 2.0),
        ]));
        let service = service_with(store);
        let (sender, receiver) = mpsc::channel(4);

        service.load(&sender).await;
        drop(sender);

        let states = collect(receiver).await;
        assert_eq!(states.len(), 2);
        assert_eq!(states[0], ListState::Loading);
        match &states[1] {
            ListState::Loaded(reminders) => {
                let ids: Vec<_> = reminders.iter().map(|r| r.id.as_str()).collect();
                assert_eq!(ids, vec!["1", "2"]);
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_empty_store() {
        let service = service_with(Arc::new(InMemoryReminderStore::new()));
        let (sender, receiver) = mpsc::channel(4);

        service.load(&sender).await;
        drop(sender);

        assert_eq!(
            collect(receiver).await,
            vec![ListState::Loading, ListState::Empty]
        );
    }

    #[tokio::test]
    async fn test_load_failure_reports_message() {
        let store = Arc::new(InMemoryReminderStore::new());
        store.set_fail_on_list(true).await;
        let service = service_with(store);
        let (sender, receiver) = mpsc::channel(4);

        service.load(&sender).await;
        drop(sender);

        let states = collect(receiver).await;
        assert!(matches!(&states[1], ListState::Failed(msg) if msg.contains("Mock list failure")));
    }

    #[tokio::test]
    async fn test_load_with_closed_receiver_returns() {
        let service = service_with(Arc::new(InMemoryReminderStore::new()));
        let (sender, receiver) = mpsc::channel(1);
        drop(receiver);

        service.load(&sender).await;
    }

    #[tokio::test]
    async fn test_clear_empties_store() {
        let store = Arc::new(InMemoryReminderStore::new());
        let service = service_with(store.clone());
        service.save(draft("a")).await.unwrap();

        service.clear().await.unwrap();

        assert_eq!(store.stored_count().await, 0);
    }
}
