use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fitcheck_measurements::{
    BodyMeasurementSnapshot, ComparisonRow, ComparisonSummary, compare, summarize,
};

use crate::error::ApiError;

/// Raw records as the storage proxy returns them.
#[derive(Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    before: Value,
    #[serde(default)]
    after: Value,
}

#[derive(Serialize)]
pub struct CompareResponse {
    rows: Vec<ComparisonRow>,
    summary: ComparisonSummary,
}

fn snapshot(record: &Value) -> Result<BodyMeasurementSnapshot, ApiError> {
    // A subject with no "after" form yet is compared against nothing.
    if record.is_null() {
        return Ok(BodyMeasurementSnapshot::new());
    }
    Ok(BodyMeasurementSnapshot::from_record(record)?)
}

pub async fn compare_measurements(
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<CompareResponse>, ApiError> {
    let Json(req) = payload?;
    let before = snapshot(&req.before)?;
    let after = snapshot(&req.after)?;

    let rows = compare(&before, &after);
    let summary = summarize(&rows);
    Ok(Json(CompareResponse { rows, summary }))
}
