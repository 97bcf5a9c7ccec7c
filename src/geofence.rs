//! Geofence registration parameters.
//!
//! The platform monitors one circular region per reminder, keyed by the
//! reminder id, and reports entries through [`crate::model::TransitionEvent`].

use serde::{Deserialize, Serialize};

use crate::model::{Reminder, TransitionKind};

/// Default radius of a reminder's region, in meters.
pub const DEFAULT_RADIUS_METERS: f32 = 100.0;

/// Geofence settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeofenceConfig {
    /// Radius of each monitored region in meters.
    pub radius_meters: f32,
}

impl Default for GeofenceConfig {
    fn default() -> Self {
        Self {
            radius_meters: DEFAULT_RADIUS_METERS,
        }
    }
}

/// Region registration to hand to the platform after a reminder is saved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeofenceRegistration {
    /// Region id; equals the reminder id so transitions map back to it.
    pub request_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f32,
    /// Transitions the platform should report.
    pub transitions: Vec<TransitionKind>,
    /// Report an entry immediately if the device is already inside.
    pub initial_trigger: Option<TransitionKind>,
    /// `None` never expires.
    pub expires_after_ms: Option<u64>,
}

impl GeofenceRegistration {
    pub fn for_reminder(reminder: &Reminder, config: &GeofenceConfig) -> Self {
        Self {
            request_id: reminder.id.clone(),
            latitude: reminder.latitude,
            longitude: reminder.longitude,
            radius_meters: config.radius_meters,
            transitions: vec![TransitionKind::Enter],
            initial_trigger: Some(TransitionKind::Enter),
            expires_after_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_mirrors_reminder() {
        let reminder = Reminder::new("7", "t", "d", "l", 48.1, 11.5);
        let registration =
            GeofenceRegistration::for_reminder(&reminder, &GeofenceConfig::default());

        assert_eq!(registration.request_id, "7");
        assert_eq!(registration.latitude, 48.1);
        assert_eq!(registration.longitude, 11.5);
        assert_eq!(registration.radius_meters, DEFAULT_RADIUS_METERS);
        assert_eq!(registration.transitions, vec![TransitionKind::Enter]);
        assert!(registration.expires_after_ms.is_none());
    }
}
