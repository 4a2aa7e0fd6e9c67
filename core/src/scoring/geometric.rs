use std::f64::consts::PI;

use crate::geo::{haversine_distance, Circle};
use crate::prelude::ScoringStrategy;
use crate::scoring::round_percentage;

/// Center distance below which the lens formula is skipped entirely.
/// The `acos` arguments blow up as the distance approaches zero, and a
/// probe that close to the anchor center is covered regardless.
pub const DEGENERATE_DISTANCE_M: f64 = 0.1;

/// Exact two-circle intersection scoring.
///
/// Computes the lens area shared by the anchor and probe circles via the
/// circular-segment formula and reports it as a fraction of the probe
/// circle's area.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricOverlap;

impl ScoringStrategy for GeometricOverlap {
    fn score(&self, anchor: &Circle, probe: &Circle) -> f64 {
        let d = haversine_distance(&anchor.center, &probe.center);
        let r1 = anchor.radius_m;
        let r2 = probe.radius_m;

        if d >= r1 + r2 {
            return 0.0;
        }
        if d + r2 <= r1 {
            return 100.0;
        }
        if d < DEGENERATE_DISTANCE_M {
            return 100.0;
        }

        let part1 = r2 * r2 * clamped_acos((d * d + r2 * r2 - r1 * r1) / (2.0 * d * r2));
        let part2 = r1 * r1 * clamped_acos((d * d + r1 * r1 - r2 * r2) / (2.0 * d * r1));
        let part3 = 0.5
            * ((-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2))
                .max(0.0)
                .sqrt();
        let lens_area = part1 + part2 - part3;

        let probe_area = PI * r2 * r2;
        round_percentage(lens_area / probe_area * 100.0)
    }
}

/// `acos` with its argument clamped to [-1, 1]. Near the tangency
/// boundaries floating-point drift pushes the ratio a few ulps outside
/// the domain, which would otherwise surface NaN.
fn clamped_acos(value: f64) -> f64 {
    value.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Coordinate, EARTH_RADIUS_M};

    fn circle_at_meters_east(distance_m: f64, radius_m: f64) -> Circle {
        let center =
            Coordinate::new(0.0, (distance_m / EARTH_RADIUS_M).to_degrees()).unwrap();
        Circle::new(center, radius_m).unwrap()
    }

    #[test]
    fn disjoint_circles_score_zero() {
        let anchor = circle_at_meters_east(0.0, 10.0);
        let probe = circle_at_meters_east(50.0, 5.0);
        assert_eq!(GeometricOverlap.score(&anchor, &probe), 0.0);
    }

    #[test]
    fn contained_probe_scores_full() {
        let anchor = circle_at_meters_east(0.0, 10.0);
        let probe = circle_at_meters_east(2.0, 4.0);
        assert_eq!(GeometricOverlap.score(&anchor, &probe), 100.0);
    }

    #[test]
    fn identical_centers_score_full() {
        let anchor = circle_at_meters_east(0.0, 10.0);
        let probe = circle_at_meters_east(0.0, 7.0);
        assert_eq!(GeometricOverlap.score(&anchor, &probe), 100.0);
    }

    #[test]
    fn probe_centered_on_anchor_edge() {
        // d == anchor radius: the lens covers 44.66% of the probe circle.
        let anchor = circle_at_meters_east(0.0, 10.0);
        let probe = circle_at_meters_east(10.0, 5.0);
        assert_eq!(GeometricOverlap.score(&anchor, &probe), 45.0);
    }

    #[test]
    fn scores_stay_within_bounds() {
        let anchor = circle_at_meters_east(0.0, 10.0);
        for step in 0..40 {
            let probe = circle_at_meters_east(step as f64, 5.0);
            let score = GeometricOverlap.score(&anchor, &probe);
            assert!((0.0..=100.0).contains(&score), "score {} at {} m", score, step);
        }
    }

    #[test]
    fn score_never_increases_with_distance() {
        let anchor = circle_at_meters_east(0.0, 10.0);
        let mut previous = 100.0;
        for step in 0..=30 {
            let probe = circle_at_meters_east(step as f64, 5.0);
            let score = GeometricOverlap.score(&anchor, &probe);
            assert!(score <= previous, "score rose from {} to {} at {} m", previous, score, step);
            previous = score;
        }
    }

    #[test]
    fn tangency_boundary_does_not_produce_nan() {
        // Exactly touching from outside, then a hair inside the boundary.
        let anchor = circle_at_meters_east(0.0, 10.0);
        let probe = circle_at_meters_east(15.0 - 1e-9, 5.0);
        let score = GeometricOverlap.score(&anchor, &probe);
        assert!(score.is_finite());
        assert!((0.0..=100.0).contains(&score));
    }
}
