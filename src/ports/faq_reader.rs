//! FaqReader port for FAQ queries.

use async_trait::async_trait;

use crate::domain::{DomainError, FaqEntry};

/// Read-only access to the FAQ table.
///
/// Both operations are scans; result order is whatever the store returns
/// and is not guaranteed stable or relevance-ranked.
#[async_trait]
pub trait FaqReader: Send + Sync {
    /// Filtered scan: entries whose tags, question, or answer contain the topic.
    ///
    /// The predicate is evaluated by the data store, not locally: the
    /// lower-cased topic against tags, the original-case topic against
    /// question and answer text.
    async fn search(&self, topic: &str) -> Result<Vec<FaqEntry>, DomainError>;

    /// Unfiltered scan capped at `limit` entries.
    async fn sample(&self, limit: usize) -> Result<Vec<FaqEntry>, DomainError>;
}
