//! Application configuration module.
//!
//! Loads the two table names from environment variables using the `config`
//! and `dotenvy` crates. Both names are required; a missing one fails at
//! process start.

mod error;

pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration.
///
/// Load using [`AppConfig::load()`] which reads from environment variables
/// (`.env` honored in development).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Name of the student-records table (`STUDENTS_TABLE`).
    pub students_table: String,

    /// Name of the FAQ table (`FAQS_TABLE`).
    pub faqs_table: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `STUDENTS_TABLE` or `FAQS_TABLE` is unset.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a table name is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.students_table.is_empty() {
            return Err(ValidationError::MissingRequired("STUDENTS_TABLE"));
        }
        if self.faqs_table.is_empty() {
            return Err(ValidationError::MissingRequired("FAQS_TABLE"));
        }
        Ok(())
    }
}
