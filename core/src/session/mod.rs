pub mod filters;
pub mod policy;
pub mod record;

pub use filters::{filter_by_faculty, partition_by_activity, session_stats, SessionStats};
pub use policy::{effective_radius, expires_at, student_radius, RoomSize};
pub use record::{AttendanceRecord, ProbeReading, Session, SessionRequest, SessionStatus};
