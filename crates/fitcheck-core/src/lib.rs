//! fitcheck-core
//!
//! Pure domain types shared by the evaluator, the measurement comparator and
//! the HTTP surface. No I/O — this is the shared vocabulary of the fitcheck system.

pub mod error;
pub mod metrics;
pub mod models;
