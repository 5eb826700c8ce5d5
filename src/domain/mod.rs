//! Domain types for the campus helpdesk bot.

mod errors;
mod faq;
mod student;

pub use errors::{DomainError, ErrorCode};
pub use faq::FaqEntry;
pub use student::{StudentId, StudentRecord};
