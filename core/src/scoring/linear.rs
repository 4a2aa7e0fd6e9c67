use crate::geo::{haversine_distance, Circle};
use crate::prelude::ScoringStrategy;
use crate::scoring::round_percentage;

/// Piecewise-linear falloff heuristic kept from an earlier product
/// iteration.
///
/// Cheaper and more forgiving of GPS noise than the geometric lens, at the
/// cost of scores with no physical meaning: 100% at the anchor center
/// degrading to 70% at the anchor radius edge, then 70% down to 0% across
/// the probe radius beyond the edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearFalloff;

impl ScoringStrategy for LinearFalloff {
    fn score(&self, anchor: &Circle, probe: &Circle) -> f64 {
        let d = haversine_distance(&anchor.center, &probe.center);
        let r1 = anchor.radius_m;
        let r2 = probe.radius_m;

        if d >= r1 + r2 {
            return 0.0;
        }

        let raw = if d <= r1 {
            100.0 - 30.0 * (d / r1)
        } else {
            70.0 * (1.0 - (d - r1) / r2)
        };

        round_percentage(raw)
    }
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
    fn full_score_at_anchor_center() {
        let anchor = circle_at_meters_east(0.0, 10.0);
        let probe = circle_at_meters_east(0.0, 5.0);
        assert_eq!(LinearFalloff.score(&anchor, &probe), 100.0);
    }

    #[test]
    fn seventy_percent_at_anchor_edge() {
        let anchor = circle_at_meters_east(0.0, 10.0);
        let probe = circle_at_meters_east(10.0, 5.0);
        assert_eq!(LinearFalloff.score(&anchor, &probe), 70.0);
    }

    #[test]
    fn halfway_through_the_buffer() {
        let anchor = circle_at_meters_east(0.0, 10.0);
        let probe = circle_at_meters_east(12.5, 5.0);
        assert_eq!(LinearFalloff.score(&anchor, &probe), 35.0);
    }

    #[test]
    fn zero_beyond_combined_radius() {
        let anchor = circle_at_meters_east(0.0, 10.0);
        let probe = circle_at_meters_east(15.0, 5.0);
        assert_eq!(LinearFalloff.score(&anchor, &probe), 0.0);
        let far = circle_at_meters_east(200.0, 5.0);
        assert_eq!(LinearFalloff.score(&anchor, &far), 0.0);
    }
}
