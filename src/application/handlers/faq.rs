//! FaqHandler - free-text FAQ search with keyword fallback.

use std::sync::Arc;

use crate::domain::DomainError;
use crate::ports::FaqReader;

/// Result-count cap for the unfiltered scan when no topic was given.
const UNFILTERED_SCAN_LIMIT: usize = 5;

/// Hint sent when no FAQ entry matched.
const NO_MATCH_HINT: &str =
    "I couldn't find that. Try asking like: 'bonafide certificate' or 'academic calendar'.";

/// Command to answer an FAQ question.
#[derive(Debug, Clone)]
pub struct AnswerFaqCommand {
    /// Interpreted `topic` slot value, if the platform extracted one.
    pub topic: Option<String>,
}

/// Handler for the `FAQ` intent.
pub struct FaqHandler {
    faqs: Arc<dyn FaqReader>,
}

impl FaqHandler {
    pub fn new(faqs: Arc<dyn FaqReader>) -> Self {
        Self { faqs }
    }

    /// Resolves the command to a reply message.
    ///
    /// With a topic, runs the filtered scan; without one, a bounded
    /// unfiltered scan. The first returned entry wins; scan order is not
    /// relevance-ranked.
    pub async fn handle(&self, cmd: AnswerFaqCommand) -> Result<String, DomainError> {
        let entries = match cmd.topic {
            Some(topic) => self.faqs.search(&topic).await?,
            None => self.faqs.sample(UNFILTERED_SCAN_LIMIT).await?,
        };

        match entries.first() {
            Some(entry) => Ok(entry.reply()),
            None => Ok(NO_MATCH_HINT.to_string()),
        }
    }
}
