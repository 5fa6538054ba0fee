//! Visitor counter Lambda entry point.
//!
//! - Config from the environment, read once at cold start
//! - One DynamoDB client per process, shared by all invocations
//! - axum router served through the Lambda HTTP runtime

use std::sync::Arc;

use aws_config::BehaviorVersion;
use tracing_subscriber::{fmt, EnvFilter};

use visitor_count_gateway::{app_state::AppState, config, router, store::DynamoCounterStore};

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    // CloudWatch stamps each line already
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .without_time()
        .init();

    let cfg = config::load_from_env();

    let aws = aws_config::load_defaults(BehaviorVersion::latest()).await;
    tracing::info!(table = %cfg.table_name, "visitor-count starting");
    let store = DynamoCounterStore::new(aws_sdk_dynamodb::Client::new(&aws), cfg.table_name);

    let state = AppState::new(Arc::new(store));
    let app = router::build_router(state);

    lambda_http::run(app).await
}
