//! fitcheck-measurements
//!
//! Body measurements taken before and after a training block, and the
//! comparison that lines them up field by field.

pub mod compare;
pub mod error;
pub mod schema;
pub mod snapshot;

pub use compare::{
    ComparisonRow, ComparisonSummary, Difference, RowValues, SideComparison, compare, summarize,
};
pub use schema::{MEASUREMENT_SCHEMA, MeasurementCategory, MeasurementField, Side};
pub use snapshot::BodyMeasurementSnapshot;
