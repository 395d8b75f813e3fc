use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::{Layout, MEASUREMENT_SCHEMA, MeasurementCategory, MeasurementField, Side};
use crate::snapshot::BodyMeasurementSnapshot;

/// Change from the before value to the after value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Difference {
    /// `after - before`.
    pub absolute: f64,
    /// Relative to `before`, in percent. `None` when `before` is zero.
    pub percent: Option<f64>,
}

impl Difference {
    /// Both values must be present and finite.
    pub fn between(before: Option<f64>, after: Option<f64>) -> Option<Self> {
        let (before, after) = (before?, after?);
        if !before.is_finite() || !after.is_finite() {
            return None;
        }
        let absolute = after - before;
        let percent = (before != 0.0).then(|| absolute / before * 100.0);
        Some(Self { absolute, percent })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SideComparison {
    pub side: Side,
    pub label: String,
    pub before: Option<f64>,
    pub after: Option<f64>,
    pub difference: Option<Difference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum RowValues {
    Single {
        before: Option<f64>,
        after: Option<f64>,
        difference: Option<Difference>,
    },
    /// Left side first, then right.
    Pair { sides: [SideComparison; 2] },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonRow {
    pub id: String,
    pub label: String,
    /// Display name of the category.
    pub category: String,
    pub category_key: MeasurementCategory,
    pub unit: String,
    pub values: RowValues,
}

impl ComparisonRow {
    /// Every difference in the row: one for singles, one per side for pairs.
    pub fn differences(&self) -> Vec<Option<Difference>> {
        match &self.values {
            RowValues::Single { difference, .. } => vec![*difference],
            RowValues::Pair { sides } => sides.iter().map(|s| s.difference).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonSummary {
    pub total: usize,
    pub increase: usize,
    pub decrease: usize,
    pub unchanged: usize,
}

fn side(
    side: Side,
    field: MeasurementField,
    before: &BodyMeasurementSnapshot,
    after: &BodyMeasurementSnapshot,
) -> SideComparison {
    let (b, a) = (before.get(field), after.get(field));
    SideComparison {
        side,
        label: side.label().to_string(),
        before: b,
        after: a,
        difference: Difference::between(b, a),
    }
}

/// Line up two snapshots into one row per schema entry, in schema order.
/// Rows are emitted even when neither snapshot has the field.
pub fn compare(
    before: &BodyMeasurementSnapshot,
    after: &BodyMeasurementSnapshot,
) -> Vec<ComparisonRow> {
    MEASUREMENT_SCHEMA
        .iter()
        .map(|spec| {
            let values = match spec.layout {
                Layout::Single(field) => {
                    let (b, a) = (before.get(field), after.get(field));
                    RowValues::Single {
                        before: b,
                        after: a,
                        difference: Difference::between(b, a),
                    }
                }
                Layout::Pair { left, right } => RowValues::Pair {
                    sides: [
                        side(Side::Left, left, before, after),
                        side(Side::Right, right, before, after),
                    ],
                },
            };
            ComparisonRow {
                id: spec.id.to_string(),
                label: spec.label.to_string(),
                category: spec.category.label().to_string(),
                category_key: spec.category,
                unit: spec.unit.to_string(),
                values,
            }
        })
        .collect()
}

/// Count measured changes. Pair rows contribute one count per side;
/// values without a difference are skipped. Only an exact zero counts
/// as unchanged.
pub fn summarize(rows: &[ComparisonRow]) -> ComparisonSummary {
    rows.iter()
        .flat_map(ComparisonRow::differences)
        .flatten()
        .fold(ComparisonSummary::default(), |mut summary, diff| {
            summary.total += 1;
            if diff.absolute > 0.0 {
                summary.increase += 1;
            } else if diff.absolute < 0.0 {
                summary.decrease += 1;
            } else {
                summary.unchanged += 1;
            }
            summary
        })
}
