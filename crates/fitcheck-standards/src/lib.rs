//! fitcheck-standards
//!
//! Fitness standards and the evaluator. Pure data: the built-in general and
//! athlete band tables, plus the lookup that turns a raw measurement into a
//! category for a given test, gender, age and role.

pub mod band;
pub mod document;
pub mod error;
pub mod evaluator;
pub mod tables;

pub use band::{BandTable, Comparison, StandardBand};
pub use evaluator::{
    Evaluation, NO_ATHLETE_STANDARD, Standards, evaluate, is_no_standard_label, merge_evaluation,
};
