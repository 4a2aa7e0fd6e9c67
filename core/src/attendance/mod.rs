pub mod roster;
pub mod status;

pub use roster::{Roster, StudentData};
pub use status::{classify, AttendanceStatus};
