//! Built-in band tables.
//!
//! Rows are kept in the order the published tables list them; the
//! evaluator relies on that order when bands overlap. Neighbouring bands
//! share their cut-point, so every value inside a bracket lands somewhere
//! and the first declared band owns the cut-point itself.

pub mod athlete;
pub mod general;

use fitcheck_core::models::subject::Gender;
use fitcheck_core::models::test_type::TestType;

use crate::band::StandardBand;

pub const VERY_GOOD: &str = "ดีมาก";
pub const GOOD: &str = "ดี";
pub const FAIR: &str = "ปานกลาง";
pub const LOW: &str = "ต่ำ";
pub const VERY_LOW: &str = "ต่ำมาก";

/// Cut-points for one age bracket of a five-grade table:
/// `[very_low_max, low_max, fair_max, good_max]`.
pub(crate) type Cuts = [f64; 4];

/// Expand one bracket into its five grades, worst first, so a value equal
/// to a cut-point is graded with the band below it.
pub(crate) fn five_grades(
    test_type: TestType,
    gender: Gender,
    ages: (u32, u32),
    cuts: Cuts,
) -> [StandardBand; 5] {
    let [very_low, low, fair, good] = cuts;
    [
        StandardBand::at_most(test_type, gender, ages, VERY_LOW, very_low),
        StandardBand::range(test_type, gender, ages, LOW, very_low, low),
        StandardBand::range(test_type, gender, ages, FAIR, low, fair),
        StandardBand::range(test_type, gender, ages, GOOD, fair, good),
        StandardBand::at_least(test_type, gender, ages, VERY_GOOD, good),
    ]
}
