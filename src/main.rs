//! Lambda entry point for the campus helpdesk fulfillment function.

use std::sync::Arc;

use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;

use campus_concierge::adapters::{DynamoDbFaqReader, DynamoDbStudentReader, LexEvent, LexResponse};
use campus_concierge::application::Dispatcher;
use campus_concierge::config::{AppConfig, ConfigError};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    // One client for the process lifetime, shared across invocations.
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);

    let dispatcher = Arc::new(Dispatcher::new(
        Arc::new(DynamoDbStudentReader::new(
            client.clone(),
            config.students_table.clone(),
        )),
        Arc::new(DynamoDbFaqReader::new(client, config.faqs_table.clone())),
    ));

    tracing::info!(
        students_table = %config.students_table,
        faqs_table = %config.faqs_table,
        "campus concierge starting"
    );

    lambda_runtime::run(service_fn(move |event: LambdaEvent<LexEvent>| {
        let dispatcher = dispatcher.clone();
        async move {
            let response = dispatcher.dispatch(&event.payload).await.map_err(|e| {
                tracing::error!(error = %e, "invocation failed");
                e
            })?;
            Ok::<LexResponse, Error>(response)
        }
    }))
    .await
}
