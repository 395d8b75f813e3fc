use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use fitcheck_core::models::request::EvaluationRequest;
use fitcheck_core::models::result::FitnessResult;
use fitcheck_standards::Evaluation;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct EvaluationResponse {
    evaluation: Evaluation,
    /// The string the front end displays; `null` when nothing matched.
    label: Option<String>,
}

impl From<Evaluation> for EvaluationResponse {
    fn from(evaluation: Evaluation) -> Self {
        let label = evaluation.label().map(str::to_string);
        Self { evaluation, label }
    }
}

pub async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(state.standards.evaluate(&request).into()))
}

/// Evaluate a whole roster; responses line up with the request order.
pub async fn evaluate_batch(
    State(state): State<AppState>,
    payload: Result<Json<Vec<EvaluationRequest>>, JsonRejection>,
) -> Result<Json<Vec<EvaluationResponse>>, ApiError> {
    let Json(requests) = payload?;
    let responses = state
        .standards
        .evaluate_batch(&requests)
        .into_iter()
        .map(EvaluationResponse::from)
        .collect();
    Ok(Json(responses))
}

/// Re-evaluate a stored result and return it with its label merged.
pub async fn evaluate_result(
    State(state): State<AppState>,
    payload: Result<Json<FitnessResult>, JsonRejection>,
) -> Result<Json<FitnessResult>, ApiError> {
    let Json(mut result) = payload?;
    state.standards.apply(&mut result);
    Ok(Json(result))
}
