use serde::{Deserialize, Serialize};
use ts_rs::TS;

use fitcheck_core::models::subject::Gender;
use fitcheck_core::models::test_type::TestType;

use crate::error::StandardsError;

/// How a band was written in the source table. Both kinds are checked the
/// same way: inclusively against whichever bounds are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Comparison {
    /// Closed interval `[min_value, max_value]`.
    Range,
    /// One-sided cut-off, only one of the bounds is set.
    Threshold,
}

/// One row of an evaluation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StandardBand {
    pub test_type: TestType,
    pub gender: Gender,
    /// Inclusive.
    pub age_min: u32,
    /// Inclusive.
    pub age_max: u32,
    pub category: String,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub comparison: Comparison,
}

impl StandardBand {
    pub fn range(
        test_type: TestType,
        gender: Gender,
        ages: (u32, u32),
        category: &str,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            test_type,
            gender,
            age_min: ages.0,
            age_max: ages.1,
            category: category.to_string(),
            min_value: Some(min),
            max_value: Some(max),
            comparison: Comparison::Range,
        }
    }

    /// Band admitting everything at or above `min`.
    pub fn at_least(
        test_type: TestType,
        gender: Gender,
        ages: (u32, u32),
        category: &str,
        min: f64,
    ) -> Self {
        Self {
            test_type,
            gender,
            age_min: ages.0,
            age_max: ages.1,
            category: category.to_string(),
            min_value: Some(min),
            max_value: None,
            comparison: Comparison::Threshold,
        }
    }

    /// Band admitting everything at or below `max`.
    pub fn at_most(
        test_type: TestType,
        gender: Gender,
        ages: (u32, u32),
        category: &str,
        max: f64,
    ) -> Self {
        Self {
            test_type,
            gender,
            age_min: ages.0,
            age_max: ages.1,
            category: category.to_string(),
            min_value: None,
            max_value: Some(max),
            comparison: Comparison::Threshold,
        }
    }

    pub fn applies_to(&self, test_type: TestType, gender: Gender, age: u32) -> bool {
        self.test_type == test_type
            && self.gender == gender
            && age >= self.age_min
            && age <= self.age_max
    }

    pub fn admits(&self, value: f64) -> bool {
        self.min_value.is_none_or(|min| value >= min)
            && self.max_value.is_none_or(|max| value <= max)
    }

    fn check(&self) -> Result<(), String> {
        if self.age_min > self.age_max {
            return Err(format!(
                "age_min {} is greater than age_max {}",
                self.age_min, self.age_max
            ));
        }
        if self.category.trim().is_empty() {
            return Err("category is empty".to_string());
        }
        match (self.min_value, self.max_value) {
            (None, None) => Err("band has neither min_value nor max_value".to_string()),
            (Some(min), _) if !min.is_finite() => Err(format!("min_value {min} is not finite")),
            (_, Some(max)) if !max.is_finite() => Err(format!("max_value {max} is not finite")),
            (Some(min), Some(max)) if min > max => Err(format!(
                "min_value {min} is greater than max_value {max}"
            )),
            _ => Ok(()),
        }
    }
}

/// An ordered, read-only list of bands. Declaration order decides which
/// band wins when two of them admit the same value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandTable {
    bands: Vec<StandardBand>,
}

impl BandTable {
    pub fn new(bands: Vec<StandardBand>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[StandardBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// All bands for a test, regardless of gender or age.
    pub fn for_test(&self, test_type: TestType) -> impl Iterator<Item = &StandardBand> {
        self.bands.iter().filter(move |b| b.test_type == test_type)
    }

    pub fn has_test(&self, test_type: TestType) -> bool {
        self.for_test(test_type).next().is_some()
    }

    /// Bands applicable to a subject, in declaration order.
    pub fn matching(
        &self,
        test_type: TestType,
        gender: Gender,
        age: u32,
    ) -> impl Iterator<Item = &StandardBand> {
        self.bands
            .iter()
            .filter(move |b| b.applies_to(test_type, gender, age))
    }

    /// Check every band for structural mistakes. Overlaps are allowed.
    pub fn validate(&self, table: &'static str) -> Result<(), StandardsError> {
        for (index, band) in self.bands.iter().enumerate() {
            band.check().map_err(|reason| StandardsError::InvalidBand {
                table,
                index,
                reason,
            })?;
        }
        Ok(())
    }
}
