//! Region transition handling.
//!
//! A [`TransitionEventHandler`] is idle between events. `handle` moves it to
//! processing for the lifetime of one event: error events and non-entry
//! transitions end immediately, entry transitions fan out one lookup task per
//! triggered region and finish once every task has completed. Nothing is
//! carried from one event to the next.
//!
//! Lookup tasks live in a `JoinSet` owned by the `handle` future. Each task's
//! outcome is collected on its own, so a failing or panicking lookup never
//! cancels its siblings. Dropping the `handle` future aborts the lookups that
//! are still outstanding; a notification is only sent after a successful
//! lookup, so an abandoned event can miss notifications but never emit a
//! partial one.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use crate::interfaces::NotificationSink;
use crate::model::{TransitionEvent, TransitionKind};
use crate::repository::ReminderRepository;

/// What handling one event amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The platform reported a delivery fault; no lookups were attempted.
    PlatformError { code: i32 },
    /// Not an entry transition; nothing to notify.
    Ignored { kind: TransitionKind },
    /// Entry transition whose region lookups all completed.
    Dispatched(FanOutSummary),
}

/// Per-event tally of region lookups. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanOutSummary {
    /// Regions whose reminder was found and handed to the sink.
    pub notified: usize,
    /// Regions with no matching reminder.
    pub missing: usize,
    /// Regions whose lookup failed or whose task aborted.
    pub failed: usize,
}

enum LookupOutcome {
    Notified,
    Missing,
    Failed,
}

/// Turns region transitions into reminder notifications.
pub struct TransitionEventHandler {
    repository: ReminderRepository,
    sink: Arc<dyn NotificationSink>,
}

impl TransitionEventHandler {
    pub fn new(repository: ReminderRepository, sink: Arc<dyn NotificationSink>) -> Self {
        Self { repository, sink }
    }

    /// Handle one transition event.
    ///
    /// Takes `&self`: overlapping events may be handled concurrently and are
    /// not serialized against each other.
    #[tracing::instrument(
        name = "transition.handle",
        skip_all,
        fields(kind = %event.kind, regions = event.triggered_region_ids.len())
    )]
    pub async fn handle(&self, event: TransitionEvent) -> TransitionOutcome {
        if let Some(code) = event.platform_error_code {
            error!(code, "Transition event reported a platform error, dropping");
            return TransitionOutcome::PlatformError { code };
        }

        if event.kind != TransitionKind::Enter {
            debug!("Ignoring non-entry transition");
            return TransitionOutcome::Ignored { kind: event.kind };
        }

        let mut lookups = JoinSet::new();
        for region_id in event.triggered_region_ids {
            lookups.spawn(lookup_and_notify(
                self.repository.clone(),
                Arc::clone(&self.sink),
                region_id,
            ));
        }

        let mut summary = FanOutSummary::default();
        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok(LookupOutcome::Notified) => summary.notified += 1,
                Ok(LookupOutcome::Missing) => summary.missing += 1,
                Ok(LookupOutcome::Failed) => summary.failed += 1,
                Err(e) => {
                    warn!(error = %e, "Region lookup task aborted");
                    summary.failed += 1;
                }
            }
        }

        debug!(
            notified = summary.notified,
            missing = summary.missing,
            failed = summary.failed,
            "Transition event handled"
        );
        TransitionOutcome::Dispatched(summary)
    }
}

async fn lookup_and_notify(
    repository: ReminderRepository,
    sink: Arc<dyn NotificationSink>,
    region_id: String,
) -> LookupOutcome {
    match repository.get_reminder(&region_id).await {
        Ok(reminder) => {
            sink.send(reminder.into());
            LookupOutcome::Notified
        }
        Err(e) if e.is_not_found() => {
            debug!(region_id = %region_id, "No reminder for triggered region");
            LookupOutcome::Missing
        }
        Err(e) => {
            debug!(region_id = %region_id, error = %e, "Region lookup failed");
            LookupOutcome::Failed
        }
    }
}
