//! Dispatcher - routes a request to the handler for its intent.

use std::sync::Arc;

use crate::adapters::lex::{LexEvent, LexResponse};
use crate::domain::DomainError;
use crate::ports::{FaqReader, StudentReader};

use super::handlers::{
    AnswerFaqCommand, FallbackHandler, FaqHandler, LookupStudentCommand, StudentInfoHandler,
};

const GET_STUDENT_INFO_INTENT: &str = "GetStudentInfo";
const FAQ_INTENT: &str = "FAQ";

/// Entry point for one fulfillment request.
///
/// Routes on the recognized intent name and wraps the handler's reply in
/// a closed, fulfilled envelope, forwarding session attributes unchanged.
pub struct Dispatcher {
    student_info: StudentInfoHandler,
    faq: FaqHandler,
    fallback: FallbackHandler,
}

impl Dispatcher {
    pub fn new(students: Arc<dyn StudentReader>, faqs: Arc<dyn FaqReader>) -> Self {
        Self {
            student_info: StudentInfoHandler::new(students),
            faq: FaqHandler::new(faqs),
            fallback: FallbackHandler::new(),
        }
    }

    /// Handles one request, producing exactly one response envelope.
    pub async fn dispatch(&self, event: &LexEvent) -> Result<LexResponse, DomainError> {
        let intent = event.intent_name();
        tracing::info!(intent, "dispatching intent");

        let text = match intent {
            GET_STUDENT_INFO_INTENT => {
                self.student_info
                    .handle(LookupStudentCommand {
                        student_id: event.slot("student_id").map(str::to_string),
                    })
                    .await?
            }
            FAQ_INTENT => {
                self.faq
                    .handle(AnswerFaqCommand {
                        topic: event.slot("topic").map(str::to_string),
                    })
                    .await?
            }
            _ => self.fallback.handle(),
        };

        Ok(LexResponse::close(
            text,
            Some(event.session_attributes.clone()),
        ))
    }
}
