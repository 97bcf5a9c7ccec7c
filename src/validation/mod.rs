//! Validation of user-entered reminder data.
//!
//! Storage accepts any reminder; these checks run before a draft is saved
//! and registered as a geofence.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Reminder;

/// Errors from validating a reminder draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a title")]
    MissingTitle,

    #[error("Please select a location")]
    MissingLocation,

    #[error("Selected location has no coordinates")]
    MissingCoordinates,

    #[error("Selected location has invalid coordinates")]
    InvalidCoordinates,
}

/// A reminder as entered by the user, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReminderDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location_label: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Existing id when editing; a new one is generated otherwise.
    pub id: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

impl ReminderDraft {
    /// Check the fields a geofenced reminder cannot do without.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.title) {
            return Err(ValidationError::MissingTitle);
        }
        if is_blank(&self.location_label) {
            return Err(ValidationError::MissingLocation);
        }
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            return Err(ValidationError::MissingCoordinates);
        };
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ValidationError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Validate and convert into a storable reminder.
    pub fn into_reminder(self) -> Result<Reminder, ValidationError> {
        self.validate()?;
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            return Err(ValidationError::MissingCoordinates);
        };

        Ok(Reminder {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            location_label: self.location_label.unwrap_or_default(),
            latitude,
            longitude,
        })
    }
}
