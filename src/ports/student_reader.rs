//! StudentReader port for student-record lookups.

use async_trait::async_trait;

use crate::domain::{DomainError, StudentId, StudentRecord};

/// Read-only access to the student-records table.
#[async_trait]
pub trait StudentReader: Send + Sync {
    /// Point lookup by exact student identifier.
    async fn get_by_id(&self, id: &StudentId) -> Result<Option<StudentRecord>, DomainError>;
}
