use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod middleware;
mod routes;
mod state;

use config::ServiceConfig;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServiceConfig::from_env();
    let standards = config.load_standards()?;
    let cors = config.cors_layer()?;

    let state = AppState {
        standards: Arc::new(standards),
    };

    let app = routes::router(state).layer(cors);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
