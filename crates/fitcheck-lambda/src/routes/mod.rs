use axum::Router;
use axum::http::Uri;
use axum::middleware as axum_mw;
use axum::routing::{get, post};

use crate::error::ApiError;
use crate::middleware;
use crate::state::AppState;

pub mod evaluate;
pub mod health;
pub mod measurements;
pub mod standards;

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/standards", get(standards::list_standards))
        .route("/evaluate", post(evaluate::evaluate))
        .route("/evaluate/batch", post(evaluate::evaluate_batch))
        .route("/results/evaluate", post(evaluate::evaluate_result))
        .route(
            "/measurements/compare",
            post(measurements::compare_measurements),
        )
        .fallback(not_found)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .with_state(state)
}
