use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::prelude::{ScoreError, ScoreResult};

/// A detection circle: center plus radius in meters.
///
/// Every scoring call takes two of these, the faculty-declared anchor
/// circle and the student's probe circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Coordinate,
    pub radius_m: f64,
}

impl Circle {
    /// Builds a circle, failing fast on non-positive or non-finite radii.
    pub fn new(center: Coordinate, radius_m: f64) -> ScoreResult<Self> {
        center.validate()?;
        if !radius_m.is_finite() || radius_m <= 0.0 {
            return Err(ScoreError::InvalidRadius(format!(
                "radius {} must be a finite positive number of meters",
                radius_m
            )));
        }
        Ok(Self { center, radius_m })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_radius() {
        let center = Coordinate::new(0.0, 0.0).unwrap();
        assert!(Circle::new(center, 0.0).is_err());
        assert!(Circle::new(center, -5.0).is_err());
        assert!(Circle::new(center, f64::NAN).is_err());
    }

    #[test]
    fn accepts_positive_radius() {
        let center = Coordinate::new(0.0, 0.0).unwrap();
        let circle = Circle::new(center, 12.5).unwrap();
        assert_eq!(circle.radius_m, 12.5);
    }
}
