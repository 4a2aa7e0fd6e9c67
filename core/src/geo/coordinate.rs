use serde::{Deserialize, Serialize};

use crate::prelude::{ScoreError, ScoreResult};

/// Immutable geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> ScoreResult<Self> {
        let coordinate = Self {
            latitude_deg,
            longitude_deg,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Re-checks the range invariants. Deserialized coordinates bypass
    /// `new`, so every entry point into geometry calls this first.
    pub fn validate(&self) -> ScoreResult<()> {
        if !self.latitude_deg.is_finite() || !self.longitude_deg.is_finite() {
            return Err(ScoreError::InvalidCoordinate(format!(
                "non-finite components ({}, {})",
                self.latitude_deg, self.longitude_deg
            )));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(ScoreError::InvalidCoordinate(format!(
                "latitude {} outside [-90, 90]",
                self.latitude_deg
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(ScoreError::InvalidCoordinate(format!(
                "longitude {} outside [-180, 180]",
                self.longitude_deg
            )));
        }
        Ok(())
    }
}
