use serde::{Deserialize, Serialize};

/// A student expected at a session: display name plus registration number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentData {
    pub student_name: String,
    pub registration_number: String,
}

/// Immutable roster snapshot captured at session creation.
///
/// The roster is the sole authority for "is this student expected here";
/// enrolment changes after creation never reach an existing session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    students: Vec<StudentData>,
}

impl Roster {
    pub fn new(students: Vec<StudentData>) -> Self {
        Self { students }
    }

    /// Case-insensitive membership test on registration number.
    pub fn contains(&self, registration_number: &str) -> bool {
        if registration_number.is_empty() {
            return false;
        }
        self.students
            .iter()
            .any(|s| s.registration_number.eq_ignore_ascii_case(registration_number))
    }

    pub fn students(&self) -> &[StudentData] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(vec![
            StudentData {
                student_name: "Asha Rao".into(),
                registration_number: "CS2023001".into(),
            },
            StudentData {
                student_name: "Vikram Iyer".into(),
                registration_number: "CS2023014".into(),
            },
        ])
    }

    #[test]
    fn membership_is_case_insensitive() {
        assert!(roster().contains("CS2023001"));
        assert!(roster().contains("cs2023001"));
        assert!(roster().contains("Cs2023014"));
    }

    #[test]
    fn unknown_or_empty_numbers_are_rejected() {
        assert!(!roster().contains("CS2023099"));
        assert!(!roster().contains(""));
    }
}
