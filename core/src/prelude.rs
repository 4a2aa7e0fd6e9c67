use serde::{Deserialize, Serialize};

use crate::geo::Circle;
use crate::scoring::ScoringPolicy;

/// Overlap-percentage thresholds separating the attendance status bands.
///
/// Both comparisons are inclusive: a score of exactly `present` maps to
/// `Present`, exactly `check` maps to `Check`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapThresholds {
    pub present: f64,
    pub check: f64,
}

impl Default for OverlapThresholds {
    fn default() -> Self {
        Self {
            present: 70.0,
            check: 40.0,
        }
    }
}

/// Base detection radius per room-size category, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomRadiusTable {
    pub small: f64,
    pub mid: f64,
    pub large: f64,
}

impl Default for RoomRadiusTable {
    fn default() -> Self {
        Self {
            small: 5.0,
            mid: 10.0,
            large: 15.0,
        }
    }
}

/// Shared configuration for scoring, classification, and session policy.
///
/// Passed explicitly into every function that needs it so the core stays
/// free of ambient globals and independently testable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub thresholds: OverlapThresholds,
    pub room_radii: RoomRadiusTable,
    pub student_base_radius_m: f64,
    pub policy: ScoringPolicy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            thresholds: OverlapThresholds::default(),
            room_radii: RoomRadiusTable::default(),
            student_base_radius_m: 2.0,
            policy: ScoringPolicy::Geometric,
        }
    }
}

/// Common error type for check-in scoring and session policy.
#[derive(thiserror::Error, Debug)]
pub enum ScoreError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("invalid radius: {0}")]
    InvalidRadius(String),
    #[error("expired session: {0}")]
    ExpiredSession(String),
}

pub type ScoreResult<T> = Result<T, ScoreError>;

/// Trait describing pluggable circle-overlap scoring strategies.
///
/// Implementations return the percentage of the **probe** circle's area
/// covered by the anchor circle, rounded to the nearest whole percent and
/// clamped to [0, 100]. The measure is intentionally asymmetric: the probe
/// (student) circle is the reference whose coverage matters.
pub trait ScoringStrategy {
    fn score(&self, anchor: &Circle, probe: &Circle) -> f64;
}
