pub mod evaluator;
pub mod geometric;
pub mod linear;

pub use evaluator::CheckinEvaluator;
pub use geometric::GeometricOverlap;
pub use linear::LinearFalloff;

use serde::{Deserialize, Serialize};

use crate::prelude::ScoringStrategy;

/// Overlap-scoring policy selected by configuration.
///
/// Product history flips between the exact lens geometry and the cheaper
/// linear heuristic, so the choice stays injectable rather than baked in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    #[default]
    Geometric,
    LinearFalloff,
}

impl ScoringPolicy {
    pub fn strategy(&self) -> Box<dyn ScoringStrategy + Send + Sync> {
        match self {
            ScoringPolicy::Geometric => Box::new(GeometricOverlap),
            ScoringPolicy::LinearFalloff => Box::new(LinearFalloff),
        }
    }
}

/// Rounds a raw percentage to the nearest whole percent within [0, 100].
pub(crate) fn round_percentage(raw: f64) -> f64 {
    raw.clamp(0.0, 100.0).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_percentage_clamps_and_rounds() {
        assert_eq!(round_percentage(-3.2), 0.0);
        assert_eq!(round_percentage(44.66), 45.0);
        assert_eq!(round_percentage(104.0), 100.0);
    }

    #[test]
    fn default_policy_is_geometric() {
        assert_eq!(ScoringPolicy::default(), ScoringPolicy::Geometric);
    }
}
