use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::request::EvaluationRequest;
use super::subject::{Gender, Role};
use super::test_type::TestType;

/// One recorded fitness test result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FitnessResult {
    pub id: Uuid,
    pub subject_name: String,
    pub test_type: TestType,
    pub gender: Gender,
    pub age: u32,
    #[serde(default)]
    pub role: Role,
    pub value: Option<f64>,
    /// Category label last written for this result, if any.
    #[serde(default)]
    pub evaluation: Option<String>,
    pub recorded_on: jiff::civil::Date,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FitnessResult {
    pub fn new(
        subject_name: impl Into<String>,
        test_type: TestType,
        gender: Gender,
        age: u32,
        role: Role,
        value: Option<f64>,
        recorded_on: jiff::civil::Date,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject_name: subject_name.into(),
            test_type,
            gender,
            age,
            role,
            value,
            evaluation: None,
            recorded_on,
            notes: None,
        }
    }

    pub fn request(&self) -> EvaluationRequest {
        EvaluationRequest {
            test_type: self.test_type,
            gender: self.gender,
            age: self.age,
            value: self.value,
            role: self.role,
        }
    }
}
