use anyhow::Context;
use attendcore::attendance::StudentData;
use attendcore::geo::{Coordinate, EARTH_RADIUS_M};
use attendcore::session::ProbeReading;
use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Configuration for generating synthetic student probe readings.
///
/// Stands in for the device-side location-acquisition loop: each reading
/// is the single best (coordinate, accuracy) sample that loop would hand
/// the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Roster students who attempt a check-in (capped by roster size).
    pub student_count: usize,
    /// Spread of in-room students around the anchor, meters.
    pub scatter_m: f64,
    pub accuracy_min_m: f64,
    pub accuracy_max_m: f64,
    /// Fraction of roster students checking in from far away.
    pub remote_fraction: f64,
    pub remote_distance_m: f64,
    /// Extra readings from students absent from the roster.
    pub unlisted_count: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            student_count: 24,
            scatter_m: 6.0,
            accuracy_min_m: 3.0,
            accuracy_max_m: 12.0,
            remote_fraction: 0.15,
            remote_distance_m: 250.0,
            unlisted_count: 2,
            seed: 0,
        }
    }
}

/// Synthesizes a roster of `count` students with sequential registration
/// numbers.
pub fn build_roster(count: usize) -> Vec<StudentData> {
    (0..count)
        .map(|index| StudentData {
            student_name: format!("Student {:03}", index + 1),
            registration_number: format!("CS2023{:03}", index + 1),
        })
        .collect()
}

/// Offsets a coordinate by metric east/north displacements. Valid for the
/// small distances a classroom scenario needs.
pub fn offset_coordinate(
    anchor: &Coordinate,
    east_m: f64,
    north_m: f64,
) -> anyhow::Result<Coordinate> {
    let north_deg = (north_m / EARTH_RADIUS_M).to_degrees();
    let east_scale = EARTH_RADIUS_M * anchor.latitude_deg.to_radians().cos();
    let east_deg = (east_m / east_scale).to_degrees();
    Coordinate::new(
        anchor.latitude_deg + north_deg,
        anchor.longitude_deg + east_deg,
    )
    .context("offset pushed coordinate out of range")
}

/// Builds one probe reading per participating roster student plus the
/// configured number of unlisted walk-ins, deterministically from the seed.
pub fn build_probe_readings(
    config: &GeneratorConfig,
    anchor: &Coordinate,
    roster: &[StudentData],
    timestamp: DateTime<Utc>,
) -> anyhow::Result<Vec<ProbeReading>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut readings = Vec::with_capacity(roster.len() + config.unlisted_count);

    for student in roster.iter().take(config.student_count) {
        let remote = rng.gen::<f64>() < config.remote_fraction;
        let distance = if remote {
            config.remote_distance_m * rng.gen_range(0.8..1.2)
        } else {
            config.scatter_m * rng.gen::<f64>()
        };
        readings.push(reading_at(
            &mut rng,
            config,
            anchor,
            student.student_name.clone(),
            student.registration_number.clone(),
            distance,
            timestamp,
        )?);
    }

    for index in 0..config.unlisted_count {
        let distance = config.scatter_m * rng.gen::<f64>();
        readings.push(reading_at(
            &mut rng,
            config,
            anchor,
            format!("Walk-in {:02}", index + 1),
            format!("GUEST{:03}", index + 1),
            distance,
            timestamp,
        )?);
    }

    Ok(readings)
}

fn reading_at(
    rng: &mut StdRng,
    config: &GeneratorConfig,
    anchor: &Coordinate,
    student_name: String,
    registration_number: String,
    distance_m: f64,
    timestamp: DateTime<Utc>,
) -> anyhow::Result<ProbeReading> {
    let bearing = rng.gen_range(0.0..2.0 * PI);
    let coordinates = offset_coordinate(
        anchor,
        distance_m * bearing.cos(),
        distance_m * bearing.sin(),
    )?;
    let accuracy_m = rng.gen_range(config.accuracy_min_m..=config.accuracy_max_m);

    Ok(ProbeReading {
        student_name,
        registration_number,
        coordinates,
        accuracy_m,
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use attendcore::geo::haversine_distance;

    #[test]
    fn roster_numbers_are_sequential() {
        let roster = build_roster(3);
        assert_eq!(roster[0].registration_number, "CS2023001");
        assert_eq!(roster[2].registration_number, "CS2023003");
    }

    #[test]
    fn generator_emits_one_reading_per_student_plus_walkins() {
        let config = GeneratorConfig {
            student_count: 10,
            unlisted_count: 2,
            ..Default::default()
        };
        let anchor = Coordinate::new(12.9716, 77.5946).unwrap();
        let roster = build_roster(config.student_count);
        let readings =
            build_probe_readings(&config, &anchor, &roster, Utc::now()).unwrap();
        assert_eq!(readings.len(), 12);
        assert!(readings
            .iter()
            .any(|r| r.registration_number.starts_with("GUEST")));
    }

    #[test]
    fn same_seed_reproduces_the_same_readings() {
        let config = GeneratorConfig {
            seed: 42,
            ..Default::default()
        };
        let anchor = Coordinate::new(0.0, 0.0).unwrap();
        let roster = build_roster(5);
        let now = Utc::now();
        let a = build_probe_readings(&config, &anchor, &roster, now).unwrap();
        let b = build_probe_readings(&config, &anchor, &roster, now).unwrap();
        for (left, right) in a.iter().zip(&b) {
            assert_eq!(left.coordinates, right.coordinates);
            assert_eq!(left.accuracy_m, right.accuracy_m);
        }
    }

    #[test]
    fn metric_offsets_land_at_the_requested_distance() {
        let anchor = Coordinate::new(12.9716, 77.5946).unwrap();
        let moved = offset_coordinate(&anchor, 30.0, 40.0).unwrap();
        let d = haversine_distance(&anchor, &moved);
        assert!((d - 50.0).abs() < 0.1);
    }
}
