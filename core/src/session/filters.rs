use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::session::record::Session;

/// Headline counts for a faculty dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

/// Splits sessions into (active, inactive) at the given instant.
pub fn partition_by_activity(
    sessions: &[Session],
    now: DateTime<Utc>,
) -> (Vec<&Session>, Vec<&Session>) {
    sessions.iter().partition(|session| session.is_active(now))
}

/// Sessions created by one faculty member.
pub fn filter_by_faculty<'a>(sessions: &'a [Session], faculty_id: &str) -> Vec<&'a Session> {
    sessions
        .iter()
        .filter(|session| session.faculty_id == faculty_id)
        .collect()
}

pub fn session_stats(sessions: &[Session], now: DateTime<Utc>) -> SessionStats {
    let (active, inactive) = partition_by_activity(sessions, now);
    SessionStats {
        total: sessions.len(),
        active: active.len(),
        inactive: inactive.len(),
    }
}
