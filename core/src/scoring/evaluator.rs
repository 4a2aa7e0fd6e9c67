use crate::attendance::classify;
use crate::geo::Circle;
use crate::prelude::{ScoreError, ScoreResult, ScoringConfig, ScoringStrategy};
use crate::session::policy::student_radius;
use crate::session::record::{AttendanceRecord, ProbeReading, Session};
use crate::telemetry::log::LogManager;

/// Evaluates student check-ins against a session: probe-circle
/// construction, overlap scoring, roster lookup, and classification in
/// one call. This is the entry point the check-in collaborator uses.
pub struct CheckinEvaluator {
    strategy: Box<dyn ScoringStrategy + Send + Sync>,
    config: ScoringConfig,
    logger: LogManager,
}

impl CheckinEvaluator {
    /// Builds an evaluator with the strategy named by the config's policy.
    pub fn new(config: ScoringConfig) -> Self {
        let strategy = config.policy.strategy();
        Self {
            strategy,
            config,
            logger: LogManager::new(),
        }
    }

    /// Builds an evaluator around a caller-supplied strategy.
    pub fn with_strategy(
        config: ScoringConfig,
        strategy: Box<dyn ScoringStrategy + Send + Sync>,
    ) -> Self {
        Self {
            strategy,
            config,
            logger: LogManager::new(),
        }
    }

    pub fn evaluate(
        &self,
        session: &Session,
        reading: &ProbeReading,
    ) -> ScoreResult<AttendanceRecord> {
        if !session.is_active(reading.timestamp) {
            return Err(ScoreError::ExpiredSession(format!(
                "session {} expired at {}",
                session.session_id, session.expires_at
            )));
        }

        reading.coordinates.validate()?;
        let anchor = Circle::new(session.coordinates, session.radius_m)?;
        let probe = Circle::new(
            reading.coordinates,
            student_radius(reading.accuracy_m, &self.config)?,
        )?;

        let overlap_pct = self.strategy.score(&anchor, &probe);
        let in_roster = session.roster.contains(&reading.registration_number);
        let status = classify(overlap_pct, in_roster, &self.config.thresholds);

        self.logger.record(&format!(
            "checkin {} -> overlap {:.0}% status {}",
            reading.registration_number, overlap_pct, status
        ));

        Ok(AttendanceRecord::new(session, reading, overlap_pct, status))
    }
}
