use std::fmt;

use serde::{Deserialize, Serialize};

use crate::prelude::OverlapThresholds;

/// Attendance state assigned to a check-in attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Check,
    Proxy,
    NotInList,
}

impl AttendanceStatus {
    /// Human-readable label shown to faculty.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Check => "Please Check",
            AttendanceStatus::Proxy => "Proxy",
            AttendanceStatus::NotInList => "Not in List",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps an overlap percentage and roster membership to a status.
///
/// Roster membership wins unconditionally: a student the session does not
/// expect is `NotInList` no matter how well the circles overlap. The score
/// bands then split expected students into `Present`, `Check`, and `Proxy`.
pub fn classify(
    overlap_pct: f64,
    in_roster: bool,
    thresholds: &OverlapThresholds,
) -> AttendanceStatus {
    if !in_roster {
        return AttendanceStatus::NotInList;
    }
    if overlap_pct >= thresholds.present {
        return AttendanceStatus::Present;
    }
    if overlap_pct >= thresholds.check {
        return AttendanceStatus::Check;
    }
    AttendanceStatus::Proxy
}
