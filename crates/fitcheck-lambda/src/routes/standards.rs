use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use fitcheck_core::models::subject::Role;
use fitcheck_core::models::test_type::TestType;
use fitcheck_standards::StandardBand;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StandardsQuery {
    #[serde(default)]
    role: Role,
    test_type: Option<TestType>,
}

#[derive(Serialize)]
pub struct StandardsListing {
    role: Role,
    bands: Vec<StandardBand>,
}

/// List the bands a role is evaluated against, optionally for one test.
pub async fn list_standards(
    State(state): State<AppState>,
    query: Result<Query<StandardsQuery>, QueryRejection>,
) -> Result<Json<StandardsListing>, ApiError> {
    let Query(query) = query?;
    let table = state.standards.table_for(query.role);

    let bands = match query.test_type {
        Some(test_type) => table.for_test(test_type).cloned().collect(),
        None => table.bands().to_vec(),
    };

    Ok(Json(StandardsListing {
        role: query.role,
        bands,
    }))
}
