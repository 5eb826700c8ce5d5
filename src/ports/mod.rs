//! Ports (interfaces) for data-store collaborators.
//!
//! Adapters implement these traits; handlers depend only on the traits.

mod faq_reader;
mod student_reader;

pub use faq_reader::FaqReader;
pub use student_reader::StudentReader;
