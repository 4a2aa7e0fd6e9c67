use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::prelude::{ScoreError, ScoreResult, ScoringConfig};

/// Room-size category declared by faculty at session creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomSize {
    Small,
    Mid,
    Large,
}

impl RoomSize {
    pub fn base_radius_m(&self, config: &ScoringConfig) -> f64 {
        match self {
            RoomSize::Small => config.room_radii.small,
            RoomSize::Mid => config.room_radii.mid,
            RoomSize::Large => config.room_radii.large,
        }
    }
}

/// Effective detection radius for a session's anchor circle:
/// room base radius + faculty device accuracy + configured safety buffer.
pub fn effective_radius(
    room_size: RoomSize,
    device_accuracy_m: f64,
    buffer_m: f64,
    config: &ScoringConfig,
) -> ScoreResult<f64> {
    validate_component("device accuracy", device_accuracy_m)?;
    validate_component("buffer", buffer_m)?;

    let radius = room_size.base_radius_m(config) + device_accuracy_m + buffer_m;
    if radius <= 0.0 {
        return Err(ScoreError::InvalidRadius(format!(
            "effective radius {} must be positive",
            radius
        )));
    }
    Ok(radius)
}

/// Probe-side radius for a check-in: fixed student base + device accuracy.
pub fn student_radius(device_accuracy_m: f64, config: &ScoringConfig) -> ScoreResult<f64> {
    validate_component("device accuracy", device_accuracy_m)?;
    Ok(config.student_base_radius_m + device_accuracy_m)
}

/// Expiry instant for a session created at `created_at`.
pub fn expires_at(created_at: DateTime<Utc>, duration_minutes: i64) -> DateTime<Utc> {
    created_at + Duration::minutes(duration_minutes)
}

fn validate_component(name: &str, value_m: f64) -> ScoreResult<()> {
    if !value_m.is_finite() || value_m < 0.0 {
        return Err(ScoreError::InvalidRadius(format!(
            "{} {} must be finite and non-negative",
            name, value_m
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn effective_radius_composes_base_accuracy_and_buffer() {
        let config = ScoringConfig::default();
        let radius = effective_radius(RoomSize::Mid, 8.0, 5.0, &config).unwrap();
        assert_eq!(radius, 23.0);
    }

    #[test]
    fn base_radius_follows_room_category() {
        let config = ScoringConfig::default();
        assert_eq!(RoomSize::Small.base_radius_m(&config), 5.0);
        assert_eq!(RoomSize::Mid.base_radius_m(&config), 10.0);
        assert_eq!(RoomSize::Large.base_radius_m(&config), 15.0);
    }

    #[test]
    fn student_radius_adds_device_accuracy_to_base() {
        let config = ScoringConfig::default();
        assert_eq!(student_radius(6.0, &config).unwrap(), 8.0);
    }

    #[test]
    fn negative_components_are_rejected() {
        let config = ScoringConfig::default();
        assert!(effective_radius(RoomSize::Small, -1.0, 0.0, &config).is_err());
        assert!(effective_radius(RoomSize::Small, 0.0, f64::NAN, &config).is_err());
        assert!(student_radius(-0.5, &config).is_err());
    }

    #[test]
    fn expiry_is_duration_minutes_after_creation() {
        let created = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let expiry = expires_at(created, 10);
        assert_eq!((expiry - created).num_milliseconds(), 600_000);
    }
}
