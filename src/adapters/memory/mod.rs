//! In-memory reader adapters.
//!
//! Store records in memory and mirror the predicate semantics the DynamoDB
//! adapters push down to the store. Useful for testing and development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{DomainError, FaqEntry, StudentId, StudentRecord};
use crate::ports::{FaqReader, StudentReader};

/// In-memory store of student records keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentReader {
    records: Arc<RwLock<HashMap<StudentId, StudentRecord>>>,
}

impl InMemoryStudentReader {
    /// Creates an empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any existing one with the same id.
    pub async fn insert(&self, record: StudentRecord) {
        let mut records = self.records.write().await;
        records.insert(record.student_id.clone(), record);
    }
}

#[async_trait]
impl StudentReader for InMemoryStudentReader {
    async fn get_by_id(&self, id: &StudentId) -> Result<Option<StudentRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }
}

/// In-memory FAQ store, scanned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFaqReader {
    entries: Arc<RwLock<Vec<FaqEntry>>>,
}

impl InMemoryFaqReader {
    /// Creates an empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to the store.
    pub async fn insert(&self, entry: FaqEntry) {
        let mut entries = self.entries.write().await;
        entries.push(entry);
    }
}

#[async_trait]
impl FaqReader for InMemoryFaqReader {
    async fn search(&self, topic: &str) -> Result<Vec<FaqEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|entry| entry.matches_topic(topic))
            .cloned()
            .collect())
    }

    async fn sample(&self, limit: usize) -> Result<Vec<FaqEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(question: &str, answer: &str, tags: &[&str]) -> FaqEntry {
        FaqEntry {
            question: question.to_string(),
            answer: answer.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn student_lookup_finds_inserted_record() {
        let reader = InMemoryStudentReader::new();
        let record = StudentRecord {
            student_id: StudentId::new("S2023001"),
            name: "Asha".to_string(),
            department: "CS".to_string(),
            year: "3".to_string(),
            email: "a@x.edu".to_string(),
            phone: "555".to_string(),
            advisor: "Dr. K".to_string(),
            fees_due: "500".to_string(),
        };
        reader.insert(record.clone()).await;

        let found = reader.get_by_id(&StudentId::new("S2023001")).await.unwrap();
        assert_eq!(found, Some(record));

        let missing = reader.get_by_id(&StudentId::new("S1999999")).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn faq_search_applies_or_predicate() {
        let reader = InMemoryFaqReader::new();
        reader
            .insert(entry("Exam schedule?", "Posted in March.", &["exam"]))
            .await;
        reader
            .insert(entry("Hostel rules?", "See the handbook.", &["hostel"]))
            .await;

        let hits = reader.search("Exam").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "Exam schedule?");

        assert!(reader.search("library").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn faq_sample_caps_result_count() {
        let reader = InMemoryFaqReader::new();
        for i in 0..8 {
            reader
                .insert(entry(&format!("Q{}", i), "A", &[]))
                .await;
        }

        let sampled = reader.sample(5).await.unwrap();
        assert_eq!(sampled.len(), 5);
        assert_eq!(sampled[0].question, "Q0");
    }
}
