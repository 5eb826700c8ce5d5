//! Error types for the domain layer.

use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Infrastructure errors
    DatabaseError,
    // A stored item is missing an attribute or holds an unexpected type
    MalformedRecord,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::MalformedRecord => "MALFORMED_RECORD",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
///
/// Data-store failures and malformed records surface as `DomainError` and
/// propagate out of the handlers; they are fatal for the invocation.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a malformed-record error for a specific attribute.
    pub fn malformed(attribute: &str, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MalformedRecord,
            format!("Attribute '{}': {}", attribute, reason.into()),
        )
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
