//! DynamoDB implementations of the reader ports.
//!
//! The client is constructed once at process start and shared across
//! invocations; both tables are read-only from this service.

mod faq_reader;
mod student_reader;

pub use faq_reader::DynamoDbFaqReader;
pub use student_reader::DynamoDbStudentReader;

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use crate::domain::DomainError;

/// Reads a string-valued attribute, accepting DynamoDB string or number forms.
pub(crate) fn string_attr(
    item: &HashMap<String, AttributeValue>,
    name: &str,
) -> Result<String, DomainError> {
    let value = item
        .get(name)
        .ok_or_else(|| DomainError::malformed(name, "missing attribute"))?;
    match value {
        AttributeValue::S(s) => Ok(s.clone()),
        AttributeValue::N(n) => Ok(n.clone()),
        _ => Err(DomainError::malformed(name, "expected a string or number")),
    }
}

/// Reads a tag collection stored as a string set, a list of strings, or a
/// single string. A missing attribute is an empty tag set.
pub(crate) fn tags_attr(
    item: &HashMap<String, AttributeValue>,
    name: &str,
) -> Result<Vec<String>, DomainError> {
    match item.get(name) {
        None => Ok(Vec::new()),
        Some(AttributeValue::Ss(tags)) => Ok(tags.clone()),
        Some(AttributeValue::L(values)) => Ok(values
            .iter()
            .filter_map(|v| v.as_s().ok().cloned())
            .collect()),
        Some(AttributeValue::S(tag)) => Ok(vec![tag.clone()]),
        Some(_) => Err(DomainError::malformed(name, "expected a string set")),
    }
}
