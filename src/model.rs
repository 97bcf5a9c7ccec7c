//! Core data types.
//!
//! Reminders are persisted; transition events and notification payloads
//! are constructed, consumed, and dropped within one handling cycle.

use serde::{Deserialize, Serialize};

/// A point of interest the user wants to be notified about on arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Client-generated id, unique within the store. Also the geofence region id.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Human-readable name of the selected place.
    pub location_label: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Reminder {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        location_label: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            location_label: location_label.into(),
            latitude,
            longitude,
        }
    }
}

/// Kind of region boundary crossing reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransitionKind {
    Enter,
    Exit,
    Dwell,
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Enter => "ENTER",
            Self::Exit => "EXIT",
            Self::Dwell => "DWELL",
        };
        f.write_str(name)
    }
}

/// Region transition delivered by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub kind: TransitionKind,
    /// Region ids in delivery order; each is expected to match a reminder id.
    #[serde(default)]
    pub triggered_region_ids: Vec<String>,
    /// Set when the platform failed to deliver usable region data.
    #[serde(default)]
    pub platform_error_code: Option<i32>,
}

impl TransitionEvent {
    pub fn new<I, S>(kind: TransitionKind, region_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            triggered_region_ids: region_ids.into_iter().map(Into::into).collect(),
            platform_error_code: None,
        }
    }

    /// Event carrying a platform error; region ids are ignored when handled.
    pub fn failed(code: i32) -> Self {
        Self {
            kind: TransitionKind::Enter,
            triggered_region_ids: Vec::new(),
            platform_error_code: Some(code),
        }
    }

    pub fn with_error_code(mut self, code: i32) -> Self {
        self.platform_error_code = Some(code);
        self
    }
}

/// Everything a notification sink needs to present a matched reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub title: String,
    pub description: String,
    pub location_label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub id: String,
}

impl From<Reminder> for NotificationPayload {
    fn from(reminder: Reminder) -> Self {
        Self {
            title: reminder.title,
            description: reminder.description,
            location_label: reminder.location_label,
            latitude: reminder.latitude,
            longitude: reminder.longitude,
            id: reminder.id,
        }
    }
}
