use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use fitcheck_core::models::request::EvaluationRequest;
use fitcheck_core::models::result::FitnessResult;
use fitcheck_core::models::subject::{Gender, Role};
use fitcheck_core::models::test_type::TestType;

use crate::band::BandTable;
use crate::error::StandardsError;
use crate::tables;

/// Label shown when athlete standards have not been written for a test yet.
/// The front end displays it verbatim.
pub const NO_ATHLETE_STANDARD: &str = "ยังไม่มีเกณฑ์สำหรับนักกีฬา";

/// Any stored label containing this marker means "no reference standard".
const NO_STANDARD_MARKER: &str = "ไม่มีเกณฑ์";

/// Outcome of classifying one measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "category", rename_all = "snake_case")]
#[ts(export)]
pub enum Evaluation {
    /// First band admitting the value.
    Matched(String),
    /// Nothing admits the value, or there was no value to evaluate.
    NoMatch,
    /// The athlete table has no bands at all for this test.
    NoStandardDefined,
}

impl Evaluation {
    /// Legacy string rendering stored on result records.
    pub fn label(&self) -> Option<&str> {
        match self {
            Evaluation::Matched(category) => Some(category),
            Evaluation::NoMatch => None,
            Evaluation::NoStandardDefined => Some(NO_ATHLETE_STANDARD),
        }
    }
}

/// The general and athlete band tables, selected by role.
#[derive(Debug, Clone, PartialEq)]
pub struct Standards {
    general: BandTable,
    athlete: BandTable,
}

static BUILTIN: LazyLock<Standards> = LazyLock::new(|| {
    let standards = Standards::new(tables::general::bands(), tables::athlete::bands());
    tracing::debug!(
        general = standards.general.len(),
        athlete = standards.athlete.len(),
        "loaded built-in standards"
    );
    standards
});

impl Standards {
    pub fn new(general: BandTable, athlete: BandTable) -> Self {
        Self { general, athlete }
    }

    /// Built-in tables, constructed on first use and shared read-only.
    pub fn builtin() -> &'static Standards {
        &BUILTIN
    }

    pub fn general(&self) -> &BandTable {
        &self.general
    }

    pub fn athlete(&self) -> &BandTable {
        &self.athlete
    }

    pub fn table_for(&self, role: Role) -> &BandTable {
        if role.is_athlete() {
            &self.athlete
        } else {
            &self.general
        }
    }

    pub fn validate(&self) -> Result<(), StandardsError> {
        self.general.validate("general")?;
        self.athlete.validate("athlete")
    }

    pub fn evaluate(&self, request: &EvaluationRequest) -> Evaluation {
        let Some(value) = request.finite_value() else {
            return Evaluation::NoMatch;
        };

        let table = self.table_for(request.role);
        if request.role.is_athlete() && !table.has_test(request.test_type) {
            return Evaluation::NoStandardDefined;
        }

        table
            .matching(request.test_type, request.gender, request.age)
            .find(|band| band.admits(value))
            .map(|band| Evaluation::Matched(band.category.clone()))
            .unwrap_or(Evaluation::NoMatch)
    }

    /// Evaluate a roster in one call; output order follows input order.
    pub fn evaluate_batch(&self, requests: &[EvaluationRequest]) -> Vec<Evaluation> {
        requests.iter().map(|r| self.evaluate(r)).collect()
    }

    /// Re-evaluate a stored result and merge the outcome into its label.
    pub fn apply(&self, result: &mut FitnessResult) -> Evaluation {
        let evaluation = self.evaluate(&result.request());
        result.evaluation = merge_evaluation(result.evaluation.as_deref(), &evaluation, result.role);
        evaluation
    }
}

/// Classify a measurement against the built-in standards.
pub fn evaluate(
    test_type: TestType,
    gender: Gender,
    age: u32,
    value: Option<f64>,
    role: Role,
) -> Evaluation {
    Standards::builtin().evaluate(&EvaluationRequest {
        test_type,
        gender,
        age,
        value,
        role,
    })
}

pub fn is_no_standard_label(label: &str) -> bool {
    label.contains(NO_STANDARD_MARKER)
}

/// Decide which label a result record keeps after a fresh evaluation.
///
/// Athletes always take the fresh label, including the "no standard"
/// sentinel. Everyone else only has an empty or "no standard" label
/// filled in; a specific category already on the record stays.
pub fn merge_evaluation(
    existing: Option<&str>,
    computed: &Evaluation,
    role: Role,
) -> Option<String> {
    if role.is_athlete() {
        return computed.label().map(str::to_string);
    }

    let replaceable = match existing {
        None => true,
        Some(label) => label.trim().is_empty() || is_no_standard_label(label),
    };
    if !replaceable {
        return existing.map(str::to_string);
    }

    computed
        .label()
        .or(existing)
        .map(str::to_string)
}
