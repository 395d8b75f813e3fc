use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::MeasurementError;
use crate::schema::MeasurementField;

/// One set of body measurements. A field missing from `values` was not
/// measured; non-finite numbers are never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BodyMeasurementSnapshot {
    #[serde(default)]
    pub values: BTreeMap<MeasurementField, f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BodyMeasurementSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: MeasurementField, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }

    pub fn set(&mut self, field: MeasurementField, value: Option<f64>) {
        match value.filter(|v| v.is_finite()) {
            Some(v) => {
                self.values.insert(field, v);
            }
            None => {
                self.values.remove(&field);
            }
        }
    }

    pub fn get(&self, field: MeasurementField) -> Option<f64> {
        self.values.get(&field).copied()
    }

    /// Read a flat record as returned by the storage proxy, e.g.
    /// `{"weight": 70, "shoulderLeft": "30.5", "notes": "…", "rowId": 4}`.
    ///
    /// Unknown keys are skipped. Numbers may arrive as strings; blank,
    /// null or unparseable cells count as not measured.
    pub fn from_record(record: &Value) -> Result<Self, MeasurementError> {
        let obj = record.as_object().ok_or(MeasurementError::NotAnObject)?;

        let mut snapshot = Self::new();
        for (key, value) in obj {
            if key == "notes" {
                snapshot.notes = value
                    .as_str()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);
                continue;
            }
            let Some(field) = MeasurementField::from_key(key) else {
                continue;
            };
            snapshot.set(field, cell_number(value));
            if snapshot.get(field).is_none() && !is_blank(value) {
                tracing::debug!(field = key.as_str(), %value, "ignoring non-numeric measurement");
            }
        }
        Ok(snapshot)
    }

    pub fn from_record_str(record: &str) -> Result<Self, MeasurementError> {
        let value: Value = serde_json::from_str(record)?;
        Self::from_record(&value)
    }
}

fn cell_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
