use anyhow::Context;
use attendcore::attendance::{Roster, StudentData};
use attendcore::geo::Coordinate;
use attendcore::prelude::{OverlapThresholds, ScoringConfig};
use attendcore::scoring::ScoringPolicy;
use attendcore::session::{RoomSize, Session, SessionRequest};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Session definition consumed by the workflow driver, loadable from YAML.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSpec {
    pub faculty_id: String,
    pub faculty_name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub device_accuracy_m: f64,
    pub room_size: RoomSize,
    pub buffer_m: f64,
    pub active_duration_min: i64,
    #[serde(default)]
    pub policy: ScoringPolicy,
    #[serde(default)]
    pub thresholds: OverlapThresholds,
    #[serde(default)]
    pub roster: Vec<StudentData>,
}

impl SessionSpec {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading session spec {}", path_ref.display()))?;
        let spec: SessionSpec = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing session spec {}", path_ref.display()))?;
        Ok(spec)
    }

    pub fn from_args(
        latitude_deg: f64,
        longitude_deg: f64,
        device_accuracy_m: f64,
        active_duration_min: i64,
    ) -> Self {
        Self {
            faculty_id: "fac-sim".into(),
            faculty_name: "Simulated Faculty".into(),
            latitude_deg,
            longitude_deg,
            device_accuracy_m,
            room_size: RoomSize::Mid,
            buffer_m: 5.0,
            active_duration_min,
            policy: ScoringPolicy::default(),
            thresholds: OverlapThresholds::default(),
            roster: Vec::new(),
        }
    }

    pub fn to_scoring_config(&self) -> ScoringConfig {
        ScoringConfig {
            thresholds: self.thresholds,
            policy: self.policy,
            ..ScoringConfig::default()
        }
    }

    /// Builds the session record the faculty collaborator would persist.
    pub fn build_session(&self, created_at: DateTime<Utc>) -> anyhow::Result<Session> {
        let anchor = Coordinate::new(self.latitude_deg, self.longitude_deg)
            .context("building session anchor")?;
        let request = SessionRequest {
            session_id: generate_session_id(),
            faculty_id: self.faculty_id.clone(),
            faculty_name: self.faculty_name.clone(),
            coordinates: anchor,
            device_accuracy_m: self.device_accuracy_m,
            room_size: self.room_size,
            buffer_m: self.buffer_m,
            active_duration_min: self.active_duration_min,
            roster: Roster::new(self.roster.clone()),
        };
        let session = Session::create(request, created_at, &self.to_scoring_config())
            .context("deriving session radius and expiry")?;
        Ok(session)
    }
}

/// Random 6-digit session id, matching the legacy scheme.
pub fn generate_session_id() -> String {
    let mut rng = rand::thread_rng();
    rng.gen_range(100_000..1_000_000).to_string()
}
