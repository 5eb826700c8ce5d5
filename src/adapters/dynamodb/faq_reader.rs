//! DynamoDB implementation of FaqReader.
//!
//! Both queries are table scans: a filtered scan with a server-evaluated
//! `contains` predicate across tags, question, and answer, and an
//! unfiltered scan with a result-count cap.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use super::{string_attr, tags_attr};
use crate::domain::{DomainError, ErrorCode, FaqEntry};
use crate::ports::FaqReader;

/// DynamoDB implementation of FaqReader.
#[derive(Clone)]
pub struct DynamoDbFaqReader {
    client: Client,
    table_name: String,
}

impl DynamoDbFaqReader {
    /// Creates a new reader over the given FAQ table.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl FaqReader for DynamoDbFaqReader {
    async fn search(&self, topic: &str) -> Result<Vec<FaqEntry>, DomainError> {
        tracing::debug!(topic, table = %self.table_name, "scanning FAQ table for topic");

        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .filter_expression(
                "contains(tags, :tag) OR contains(question, :topic) OR contains(answer, :topic)",
            )
            .expression_attribute_values(":tag", AttributeValue::S(topic.to_lowercase()))
            .expression_attribute_values(":topic", AttributeValue::S(topic.to_string()))
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to search FAQs: {}", e),
                )
            })?;

        items_to_entries(output.items.unwrap_or_default())
    }

    async fn sample(&self, limit: usize) -> Result<Vec<FaqEntry>, DomainError> {
        tracing::debug!(limit, table = %self.table_name, "scanning FAQ table without filter");

        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(limit as i32)
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to list FAQs: {}", e),
                )
            })?;

        items_to_entries(output.items.unwrap_or_default())
    }
}

fn items_to_entries(
    items: Vec<HashMap<String, AttributeValue>>,
) -> Result<Vec<FaqEntry>, DomainError> {
    items.iter().map(item_to_entry).collect()
}

fn item_to_entry(item: &HashMap<String, AttributeValue>) -> Result<FaqEntry, DomainError> {
    Ok(FaqEntry {
        question: string_attr(item, "question")?,
        answer: string_attr(item, "answer")?,
        tags: tags_attr(item, "tags")?,
    })
}
