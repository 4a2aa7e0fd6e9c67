use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attendance::{AttendanceStatus, Roster};
use crate::geo::Coordinate;
use crate::prelude::{ScoreResult, ScoringConfig};
use crate::session::policy::{effective_radius, expires_at, RoomSize};

/// Whether a session currently accepts check-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Expired,
}

/// Inputs supplied by the session-creation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub session_id: String,
    pub faculty_id: String,
    pub faculty_name: String,
    pub coordinates: Coordinate,
    pub device_accuracy_m: f64,
    pub room_size: RoomSize,
    pub buffer_m: f64,
    pub active_duration_min: i64,
    pub roster: Roster,
}

/// A time-boxed attendance session anchored to a room location.
///
/// The effective radius and expiry are derived once at creation; activity
/// is evaluated lazily by wall-clock comparison wherever status is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub faculty_id: String,
    pub faculty_name: String,
    pub coordinates: Coordinate,
    pub radius_m: f64,
    pub room_size: RoomSize,
    pub buffer_m: f64,
    pub active_duration_min: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub roster: Roster,
}

impl Session {
    /// Builds a session record, validating the anchor and deriving the
    /// effective radius and expiry from policy.
    pub fn create(
        request: SessionRequest,
        created_at: DateTime<Utc>,
        config: &ScoringConfig,
    ) -> ScoreResult<Self> {
        request.coordinates.validate()?;
        let radius_m = effective_radius(
            request.room_size,
            request.device_accuracy_m,
            request.buffer_m,
            config,
        )?;

        Ok(Self {
            session_id: request.session_id,
            faculty_id: request.faculty_id,
            faculty_name: request.faculty_name,
            coordinates: request.coordinates,
            radius_m,
            room_size: request.room_size,
            buffer_m: request.buffer_m,
            active_duration_min: request.active_duration_min,
            created_at,
            expires_at: expires_at(created_at, request.active_duration_min),
            roster: request.roster,
        })
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    pub fn status(&self, now: DateTime<Utc>) -> SessionStatus {
        if self.is_active(now) {
            SessionStatus::Active
        } else {
            SessionStatus::Expired
        }
    }
}

/// The single best location sample produced by the device-side acquisition
/// loop, plus the student identity claiming it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReading {
    pub student_name: String,
    pub registration_number: String,
    pub coordinates: Coordinate,
    pub accuracy_m: f64,
    pub timestamp: DateTime<Utc>,
}

/// Persisted outcome of one check-in attempt.
///
/// `status` and `overlap_percentage` are the computed originals and are
/// never mutated after creation; a faculty override only replaces
/// `final_status` and flips the flag, keeping the audit trail intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub session_id: String,
    pub student_name: String,
    pub registration_number: String,
    pub timestamp: DateTime<Utc>,
    pub student_coords: Coordinate,
    pub accuracy_m: f64,
    pub overlap_percentage: f64,
    pub status: AttendanceStatus,
    pub final_status: AttendanceStatus,
    pub faculty_override: bool,
}

impl AttendanceRecord {
    pub fn new(
        session: &Session,
        reading: &ProbeReading,
        overlap_percentage: f64,
        status: AttendanceStatus,
    ) -> Self {
        Self {
            session_id: session.session_id.clone(),
            student_name: reading.student_name.clone(),
            registration_number: reading.registration_number.clone(),
            timestamp: reading.timestamp,
            student_coords: reading.coordinates,
            accuracy_m: reading.accuracy_m,
            overlap_percentage,
            status,
            final_status: status,
            faculty_override: false,
        }
    }

    /// Faculty override: replaces only the final status.
    pub fn apply_override(&mut self, status: AttendanceStatus) {
        self.final_status = status;
        self.faculty_override = true;
    }
}
