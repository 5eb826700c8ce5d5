//! FAQ entries and topic matching.

use serde::{Deserialize, Serialize};

/// An FAQ entry as stored in the FAQ table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    /// Lower-cased topic tags attached to the entry.
    pub tags: Vec<String>,
}

impl FaqEntry {
    /// Whether a topic matches this entry.
    ///
    /// Mirrors the predicate the data store evaluates server-side: the
    /// lower-cased topic is contained in a tag, OR the original-case topic
    /// is contained in the question or the answer text.
    pub fn matches_topic(&self, topic: &str) -> bool {
        let lowered = topic.to_lowercase();
        self.tags.iter().any(|tag| tag.contains(&lowered))
            || self.question.contains(topic)
            || self.answer.contains(topic)
    }

    /// Formats the two-line question/answer reply.
    pub fn reply(&self) -> String {
        format!("Q: {}\nA: {}", self.question, self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> FaqEntry {
        FaqEntry {
            question: "How do I get a bonafide certificate?".to_string(),
            answer: "Apply at the registrar's office with your ID card.".to_string(),
            tags: vec!["bonafide".to_string(), "certificate".to_string()],
        }
    }

    #[test]
    fn matches_tag_case_insensitively() {
        assert!(sample_entry().matches_topic("Bonafide"));
    }

    #[test]
    fn matches_question_text_case_sensitively() {
        let entry = sample_entry();
        assert!(entry.matches_topic("certificate?"));
        assert!(!entry.matches_topic("CERTIFICATE?"));
    }

    #[test]
    fn matches_answer_text() {
        assert!(sample_entry().matches_topic("registrar"));
    }

    #[test]
    fn rejects_unrelated_topic() {
        assert!(!sample_entry().matches_topic("hostel"));
    }

    #[test]
    fn reply_has_question_and_answer_lines() {
        assert_eq!(
            sample_entry().reply(),
            "Q: How do I get a bonafide certificate?\nA: Apply at the registrar's office with your ID card."
        );
    }
}
