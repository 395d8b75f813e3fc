//! Athlete standards. Stricter than the general tables and written for a
//! single 15–25 bracket. Chair-stand and step-up have no athlete rows yet.
//!
//! Bands share cut-points; the better grade is declared first and owns
//! the shared value.

use fitcheck_core::models::subject::Gender;
use fitcheck_core::models::test_type::TestType;

use crate::band::{BandTable, StandardBand};

pub const EXCELLENT: &str = "ดีเยี่ยม";
pub const GOOD: &str = "ดี";
pub const FAIR: &str = "ปานกลาง";
pub const NEEDS_WORK: &str = "ควรปรับปรุง";

const AGES: (u32, u32) = (15, 25);

pub fn bands() -> BandTable {
    use Gender::{Female, Male};
    use TestType::{Bmi, HandGrip, SitAndReach};

    BandTable::new(vec![
        StandardBand::range(Bmi, Male, AGES, EXCELLENT, 20.0, 23.0),
        StandardBand::range(Bmi, Male, AGES, GOOD, 23.0, 25.0),
        StandardBand::range(Bmi, Male, AGES, NEEDS_WORK, 16.0, 20.0),
        StandardBand::range(Bmi, Male, AGES, NEEDS_WORK, 25.0, 28.0),
        StandardBand::range(Bmi, Female, AGES, EXCELLENT, 19.0, 22.0),
        StandardBand::range(Bmi, Female, AGES, GOOD, 22.0, 24.0),
        StandardBand::range(Bmi, Female, AGES, NEEDS_WORK, 15.0, 19.0),
        StandardBand::range(Bmi, Female, AGES, NEEDS_WORK, 24.0, 27.0),
        StandardBand::at_least(SitAndReach, Male, AGES, EXCELLENT, 20.0),
        StandardBand::range(SitAndReach, Male, AGES, GOOD, 15.0, 20.0),
        StandardBand::range(SitAndReach, Male, AGES, FAIR, 10.0, 15.0),
        StandardBand::at_most(SitAndReach, Male, AGES, NEEDS_WORK, 10.0),
        StandardBand::at_least(SitAndReach, Female, AGES, EXCELLENT, 22.0),
        StandardBand::range(SitAndReach, Female, AGES, GOOD, 17.0, 22.0),
        StandardBand::range(SitAndReach, Female, AGES, FAIR, 12.0, 17.0),
        StandardBand::at_most(SitAndReach, Female, AGES, NEEDS_WORK, 12.0),
        StandardBand::at_least(HandGrip, Male, AGES, EXCELLENT, 55.0),
        StandardBand::range(HandGrip, Male, AGES, GOOD, 48.0, 55.0),
        StandardBand::range(HandGrip, Male, AGES, FAIR, 40.0, 48.0),
        StandardBand::at_most(HandGrip, Male, AGES, NEEDS_WORK, 40.0),
        StandardBand::at_least(HandGrip, Female, AGES, EXCELLENT, 36.0),
        StandardBand::range(HandGrip, Female, AGES, GOOD, 31.0, 36.0),
        StandardBand::range(HandGrip, Female, AGES, FAIR, 26.0, 31.0),
        StandardBand::at_most(HandGrip, Female, AGES, NEEDS_WORK, 26.0),
    ])
}
