use crate::workflow::config::SessionSpec;
use attendcore::attendance::AttendanceStatus;
use attendcore::scoring::CheckinEvaluator;
use attendcore::session::{AttendanceRecord, ProbeReading, Session};
use attendcore::telemetry::MetricsRecorder;
use serde::Serialize;

/// Per-status counts for one workflow run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StatusTally {
    pub present: usize,
    pub check: usize,
    pub proxy: usize,
    pub not_in_list: usize,
}

impl StatusTally {
    fn bump(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Check => self.check += 1,
            AttendanceStatus::Proxy => self.proxy += 1,
            AttendanceStatus::NotInList => self.not_in_list += 1,
        }
    }
}

pub struct WorkflowResult {
    pub records: Vec<AttendanceRecord>,
    pub tally: StatusTally,
    pub rejected: Vec<String>,
}

#[derive(Clone)]
pub struct Runner {
    spec: SessionSpec,
}

impl Runner {
    pub fn new(spec: SessionSpec) -> Self {
        Self { spec }
    }

    /// Evaluates a batch of probe readings against one session.
    ///
    /// Readings the core refuses (expired session, malformed input) are
    /// collected as rejection notes rather than aborting the batch.
    pub fn execute(
        &self,
        session: &Session,
        readings: &[ProbeReading],
    ) -> anyhow::Result<WorkflowResult> {
        let evaluator = CheckinEvaluator::new(self.spec.to_scoring_config());
        let metrics = MetricsRecorder::new();

        let mut records = Vec::with_capacity(readings.len());
        let mut tally = StatusTally::default();
        let mut rejected = Vec::new();

        for reading in readings {
            match evaluator.evaluate(session, reading) {
                Ok(record) => {
                    metrics.record_evaluated();
                    tally.bump(record.status);
                    records.push(record);
                }
                Err(err) => {
                    metrics.record_rejected();
                    rejected.push(format!("{}: {}", reading.registration_number, err));
                }
            }
        }

        let (evaluated, rejected_count) = metrics.snapshot();
        log::info!(
            "workflow run: {} evaluated, {} rejected",
            evaluated,
            rejected_count
        );

        Ok(WorkflowResult {
            records,
            tally,
            rejected,
        })
    }
}
