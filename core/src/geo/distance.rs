use crate::geo::Coordinate;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points via the Haversine formula.
///
/// Symmetric, and exactly zero for identical inputs. Coordinates are
/// validated at construction, so no error conditions exist here.
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let phi1 = a.latitude_deg.to_radians();
    let phi2 = b.latitude_deg.to_radians();
    let delta_phi = (b.latitude_deg - a.latitude_deg).to_radians();
    let delta_lambda = (b.longitude_deg - a.longitude_deg).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_give_zero() {
        let p = Coordinate::new(12.9716, 77.5946).unwrap();
        assert_eq!(haversine_distance(&p, &p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(12.9716, 77.5946).unwrap();
        let b = Coordinate::new(13.0827, 80.2707).unwrap();
        assert_eq!(haversine_distance(&a, &b), haversine_distance(&b, &a));
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let a = Coordinate::new(0.0, 0.0).unwrap();
        let b = Coordinate::new(0.0, 1.0).unwrap();
        let d = haversine_distance(&a, &b);
        // R * 1 degree in radians = 111,194.93 m
        assert!((d - 111_194.93).abs() < 1.0);
    }

    #[test]
    fn small_offsets_resolve_to_meters() {
        let a = Coordinate::new(0.0, 0.0).unwrap();
        let b = Coordinate::new(0.0, (10.0 / EARTH_RADIUS_M).to_degrees()).unwrap();
        let d = haversine_distance(&a, &b);
        assert!((d - 10.0).abs() < 1e-6);
    }
}
