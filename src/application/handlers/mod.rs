//! Intent handlers.
//!
//! One handler per recognized intent, plus the fallback reply for
//! everything else. Handlers produce the user-facing message text;
//! wrapping it in a response envelope is the dispatcher's job.

mod faq;
mod fallback;
mod student_info;

pub use faq::{AnswerFaqCommand, FaqHandler};
pub use fallback::FallbackHandler;
pub use student_info::{LookupStudentCommand, StudentInfoHandler};
