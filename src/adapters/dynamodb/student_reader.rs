//! DynamoDB implementation of StudentReader.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use super::string_attr;
use crate::domain::{DomainError, ErrorCode, StudentId, StudentRecord};
use crate::ports::StudentReader;

/// DynamoDB implementation of StudentReader.
#[derive(Clone)]
pub struct DynamoDbStudentReader {
    client: Client,
    table_name: String,
}

impl DynamoDbStudentReader {
    /// Creates a new reader over the given students table.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl StudentReader for DynamoDbStudentReader {
    async fn get_by_id(&self, id: &StudentId) -> Result<Option<StudentRecord>, DomainError> {
        tracing::debug!(student_id = %id, table = %self.table_name, "fetching student record");

        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("student_id", AttributeValue::S(id.as_str().to_string()))
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch student: {}", e),
                )
            })?;

        match output.item {
            Some(item) => Ok(Some(item_to_record(&item)?)),
            None => Ok(None),
        }
    }
}

fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<StudentRecord, DomainError> {
    Ok(StudentRecord {
        student_id: StudentId::new(string_attr(item, "student_id")?),
        name: string_attr(item, "name")?,
        department: string_attr(item, "department")?,
        year: string_attr(item, "year")?,
        email: string_attr(item, "email")?,
        phone: string_attr(item, "phone")?,
        advisor: string_attr(item, "advisor")?,
        fees_due: string_attr(item, "fees_due")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(s: &str) -> AttributeValue {
        AttributeValue::S(s.to_string())
    }

    fn sample_item() -> HashMap<String, AttributeValue> {
        let mut item = HashMap::new();
        item.insert("student_id".to_string(), attr("S2023001"));
        item.insert("name".to_string(), attr("Asha"));
        item.insert("department".to_string(), attr("CS"));
        item.insert("year".to_string(), attr("3"));
        item.insert("email".to_string(), attr("a@x.edu"));
        item.insert("phone".to_string(), attr("555"));
        item.insert("advisor".to_string(), attr("Dr. K"));
        item.insert("fees_due".to_string(), AttributeValue::N("500".to_string()));
        item
    }

    #[test]
    fn item_to_record_maps_all_fields() {
        let record = item_to_record(&sample_item()).unwrap();
        assert_eq!(record.student_id, StudentId::new("S2023001"));
        assert_eq!(record.name, "Asha");
        assert_eq!(record.fees_due, "500");
    }

    #[test]
    fn item_to_record_rejects_incomplete_item() {
        let mut item = sample_item();
        item.remove("advisor");
        let err = item_to_record(&item).unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedRecord);
    }
}
