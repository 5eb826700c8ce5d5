//! Adapter implementations for external collaborators.

pub mod dynamodb;
pub mod lex;
pub mod memory;

pub use dynamodb::{DynamoDbFaqReader, DynamoDbStudentReader};
pub use lex::{LexEvent, LexResponse};
pub use memory::{InMemoryFaqReader, InMemoryStudentReader};
