use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::subject::{Gender, Role};
use super::test_type::TestType;

/// A single measurement to be classified against the standards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationRequest {
    pub test_type: TestType,
    pub gender: Gender,
    pub age: u32,
    /// Missing or non-finite values are never evaluated.
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub role: Role,
}

impl EvaluationRequest {
    /// The value if it can be compared against band bounds.
    pub fn finite_value(&self) -> Option<f64> {
        self.value.filter(|v| v.is_finite())
    }
}
