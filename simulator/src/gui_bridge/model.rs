use crate::workflow::runner::{StatusTally, WorkflowResult};
use attendcore::session::AttendanceRecord;
use serde::{Deserialize, Serialize};

/// Snapshot of a session's attendance published over the HTTP bridge.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SummaryModel {
    pub session_id: String,
    pub present: usize,
    pub check: usize,
    pub proxy: usize,
    pub not_in_list: usize,
    pub rejected: usize,
    pub records: Vec<AttendanceRecord>,
    pub notes: Vec<String>,
}

impl SummaryModel {
    pub fn from_result(session_id: &str, result: &WorkflowResult) -> Self {
        let mut model = Self {
            session_id: session_id.to_string(),
            ..Default::default()
        };
        model.absorb(result);
        model
    }

    /// Folds another batch of results into the snapshot.
    pub fn absorb(&mut self, result: &WorkflowResult) {
        let StatusTally {
            present,
            check,
            proxy,
            not_in_list,
        } = result.tally;
        self.present += present;
        self.check += check;
        self.proxy += proxy;
        self.not_in_list += not_in_list;
        self.rejected += result.rejected.len();
        self.records.extend(result.records.iter().cloned());
        self.notes.extend(result.rejected.iter().cloned());
    }
}
