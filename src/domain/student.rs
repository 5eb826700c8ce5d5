//! Student records and their identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique student identifier, e.g. `S2023001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(String);

impl StudentId {
    /// Creates a new student identifier from the interpreted slot value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student record as stored in the students table.
///
/// Read-only from this service's perspective; records are created and
/// updated by an external administrative process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: StudentId,
    pub name: String,
    pub department: String,
    pub year: String,
    pub email: String,
    pub phone: String,
    pub advisor: String,
    /// Outstanding fees, kept as the stored string form.
    pub fees_due: String,
}

impl StudentRecord {
    /// Formats the four-line profile reply shown to the student.
    pub fn profile_message(&self) -> String {
        format!(
            "Name: {}\nDepartment: {} | Year: {}\nEmail: {} | Phone: {}\nAdvisor: {} | Fees Due: ₹{}",
            self.name, self.department, self.year, self.email, self.phone, self.advisor, self.fees_due
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> StudentRecord {
        StudentRecord {
            student_id: StudentId::new("S2023001"),
            name: "Asha".to_string(),
            department: "CS".to_string(),
            year: "3".to_string(),
            email: "a@x.edu".to_string(),
            phone: "555".to_string(),
            advisor: "Dr. K".to_string(),
            fees_due: "500".to_string(),
        }
    }

    #[test]
    fn profile_message_lists_all_seven_fields() {
        let msg = sample_record().profile_message();
        assert_eq!(
            msg,
            "Name: Asha\nDepartment: CS | Year: 3\nEmail: a@x.edu | Phone: 555\nAdvisor: Dr. K | Fees Due: ₹500"
        );
    }

    #[test]
    fn fees_due_carries_the_currency_symbol() {
        let msg = sample_record().profile_message();
        assert!(msg.contains("Fees Due: ₹500"));
    }

    #[test]
    fn student_id_displays_raw_value() {
        assert_eq!(StudentId::new("S2023001").to_string(), "S2023001");
    }
}
