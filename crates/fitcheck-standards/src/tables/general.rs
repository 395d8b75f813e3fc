//! General-population standards for students and staff.

use fitcheck_core::models::subject::Gender;
use fitcheck_core::models::test_type::TestType;

use super::{Cuts, five_grades};
use crate::band::{BandTable, StandardBand};

const UNDERWEIGHT: &str = "ผอม";
const NORMAL: &str = "สมส่วน";
const OVERWEIGHT: &str = "ท้วม";
const OBESE: &str = "อ้วน";
const SEVERELY_OBESE: &str = "อ้วนมาก";

/// Adult BMI cut-offs for Asian populations; identical for both genders.
const BMI_AGES: (u32, u32) = (15, 89);

/// Sit-and-reach, centimetres past the toes.
const SIT_AND_REACH: &[(Gender, (u32, u32), Cuts)] = &[
    (Gender::Male, (15, 19), [-1.0, 5.0, 11.0, 16.0]),
    (Gender::Male, (20, 24), [-2.0, 4.0, 10.0, 15.0]),
    (Gender::Male, (25, 29), [-3.0, 3.0, 9.0, 14.0]),
    (Gender::Male, (30, 34), [-4.0, 2.0, 8.0, 13.0]),
    (Gender::Male, (35, 39), [-5.0, 1.0, 7.0, 12.0]),
    (Gender::Male, (40, 44), [-6.0, 0.0, 6.0, 11.0]),
    (Gender::Male, (45, 49), [-7.0, -1.0, 5.0, 10.0]),
    (Gender::Male, (50, 54), [-8.0, -2.0, 4.0, 9.0]),
    (Gender::Male, (55, 59), [-9.0, -3.0, 3.0, 8.0]),
    (Gender::Female, (15, 19), [2.0, 8.0, 14.0, 19.0]),
    (Gender::Female, (20, 24), [1.0, 7.0, 13.0, 18.0]),
    (Gender::Female, (25, 29), [0.0, 6.0, 12.0, 17.0]),
    (Gender::Female, (30, 34), [-1.0, 5.0, 11.0, 16.0]),
    (Gender::Female, (35, 39), [-2.0, 4.0, 10.0, 15.0]),
    (Gender::Female, (40, 44), [-3.0, 3.0, 9.0, 14.0]),
    (Gender::Female, (45, 49), [-4.0, 2.0, 8.0, 13.0]),
    (Gender::Female, (50, 54), [-5.0, 1.0, 7.0, 12.0]),
    (Gender::Female, (55, 59), [-6.0, 0.0, 6.0, 11.0]),
];

/// Hand-grip, kilograms.
const HAND_GRIP: &[(Gender, (u32, u32), Cuts)] = &[
    (Gender::Male, (15, 19), [25.0, 32.0, 39.0, 46.0]),
    (Gender::Male, (20, 24), [28.0, 35.0, 42.0, 49.0]),
    (Gender::Male, (25, 29), [29.0, 36.0, 43.0, 50.0]),
    (Gender::Male, (30, 34), [29.0, 36.0, 43.0, 50.0]),
    (Gender::Male, (35, 39), [28.0, 35.0, 42.0, 49.0]),
    (Gender::Male, (40, 44), [27.0, 34.0, 41.0, 48.0]),
    (Gender::Male, (45, 49), [25.0, 32.0, 39.0, 46.0]),
    (Gender::Male, (50, 54), [23.0, 30.0, 37.0, 44.0]),
    (Gender::Male, (55, 59), [21.0, 28.0, 35.0, 42.0]),
    (Gender::Female, (15, 19), [15.0, 20.0, 25.0, 30.0]),
    (Gender::Female, (20, 24), [16.0, 21.0, 26.0, 31.0]),
    (Gender::Female, (25, 29), [17.0, 22.0, 27.0, 32.0]),
    (Gender::Female, (30, 34), [17.0, 22.0, 27.0, 32.0]),
    (Gender::Female, (35, 39), [16.0, 21.0, 26.0, 31.0]),
    (Gender::Female, (40, 44), [15.0, 20.0, 25.0, 30.0]),
    (Gender::Female, (45, 49), [14.0, 19.0, 24.0, 29.0]),
    (Gender::Female, (50, 54), [13.0, 18.0, 23.0, 28.0]),
    (Gender::Female, (55, 59), [12.0, 17.0, 22.0, 27.0]),
];

/// 30-second chair stand, repetitions. Older adults only.
const CHAIR_STAND: &[(Gender, (u32, u32), Cuts)] = &[
    (Gender::Male, (60, 64), [11.0, 13.0, 17.0, 19.0]),
    (Gender::Male, (65, 69), [10.0, 12.0, 16.0, 18.0]),
    (Gender::Male, (70, 74), [9.0, 11.0, 15.0, 17.0]),
    (Gender::Male, (75, 79), [8.0, 10.0, 14.0, 16.0]),
    (Gender::Male, (80, 84), [7.0, 9.0, 13.0, 15.0]),
    (Gender::Male, (85, 89), [6.0, 8.0, 12.0, 14.0]),
    (Gender::Female, (60, 64), [10.0, 12.0, 15.0, 17.0]),
    (Gender::Female, (65, 69), [9.0, 11.0, 14.0, 16.0]),
    (Gender::Female, (70, 74), [8.0, 10.0, 13.0, 15.0]),
    (Gender::Female, (75, 79), [7.0, 9.0, 12.0, 14.0]),
    (Gender::Female, (80, 84), [6.0, 8.0, 11.0, 13.0]),
    (Gender::Female, (85, 89), [5.0, 7.0, 10.0, 12.0]),
];

/// 2-minute step-up, repetitions. Older adults only.
const STEP_UP: &[(Gender, (u32, u32), Cuts)] = &[
    (Gender::Male, (60, 64), [74.0, 86.0, 107.0, 116.0]),
    (Gender::Male, (65, 69), [72.0, 84.0, 105.0, 115.0]),
    (Gender::Male, (70, 74), [67.0, 79.0, 100.0, 110.0]),
    (Gender::Male, (75, 79), [60.0, 72.0, 93.0, 103.0]),
    (Gender::Male, (80, 84), [55.0, 67.0, 88.0, 98.0]),
    (Gender::Male, (85, 89), [48.0, 60.0, 81.0, 91.0]),
    (Gender::Female, (60, 64), [64.0, 76.0, 97.0, 107.0]),
    (Gender::Female, (65, 69), [62.0, 74.0, 95.0, 105.0]),
    (Gender::Female, (70, 74), [57.0, 69.0, 90.0, 100.0]),
    (Gender::Female, (75, 79), [52.0, 64.0, 85.0, 95.0]),
    (Gender::Female, (80, 84), [46.0, 58.0, 79.0, 89.0]),
    (Gender::Female, (85, 89), [40.0, 52.0, 73.0, 83.0]),
];

/// Heaviest first, so each cut-point belongs to the band it opens
/// (18.5 is normal, 23.0 overweight).
fn bmi(gender: Gender) -> [StandardBand; 5] {
    let t = TestType::Bmi;
    [
        StandardBand::at_least(t, gender, BMI_AGES, SEVERELY_OBESE, 30.0),
        StandardBand::range(t, gender, BMI_AGES, OBESE, 25.0, 30.0),
        StandardBand::range(t, gender, BMI_AGES, OVERWEIGHT, 23.0, 25.0),
        StandardBand::range(t, gender, BMI_AGES, NORMAL, 18.5, 23.0),
        StandardBand::at_most(t, gender, BMI_AGES, UNDERWEIGHT, 18.5),
    ]
}

pub fn bands() -> BandTable {
    let graded = [
        (TestType::SitAndReach, SIT_AND_REACH),
        (TestType::HandGrip, HAND_GRIP),
        (TestType::ChairStand, CHAIR_STAND),
        (TestType::StepUp, STEP_UP),
    ];

    let mut bands: Vec<StandardBand> = bmi(Gender::Male)
        .into_iter()
        .chain(bmi(Gender::Female))
        .collect();

    for (test_type, rows) in graded {
        for &(gender, ages, cuts) in rows {
            bands.extend(five_grades(test_type, gender, ages, cuts));
        }
    }

    BandTable::new(bands)
}
