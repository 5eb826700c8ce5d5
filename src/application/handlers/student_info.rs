//! StudentInfoHandler - student-record lookup by identifier.

use std::sync::Arc;

use crate::domain::{DomainError, StudentId};
use crate::ports::StudentReader;

/// Prompt sent when the request carries no student identifier.
const MISSING_ID_PROMPT: &str = "Please provide your Student ID (e.g., S2023001).";

/// Command to look up a student record.
#[derive(Debug, Clone)]
pub struct LookupStudentCommand {
    /// Interpreted `student_id` slot value, if the platform extracted one.
    pub student_id: Option<String>,
}

/// Handler for the `GetStudentInfo` intent.
pub struct StudentInfoHandler {
    students: Arc<dyn StudentReader>,
}

impl StudentInfoHandler {
    pub fn new(students: Arc<dyn StudentReader>) -> Self {
        Self { students }
    }

    /// Resolves the command to a reply message.
    ///
    /// Missing slot and missing record both recover locally into
    /// clarification text; only a data-store failure is an error.
    pub async fn handle(&self, cmd: LookupStudentCommand) -> Result<String, DomainError> {
        let Some(student_id) = cmd.student_id else {
            return Ok(MISSING_ID_PROMPT.to_string());
        };

        let id = StudentId::new(student_id);
        match self.students.get_by_id(&id).await? {
            Some(record) => Ok(record.profile_message()),
            None => Ok(format!(
                "I couldn't find a student with ID {}. Please check and try again.",
                id
            )),
        }
    }
}
