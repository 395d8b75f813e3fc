//! Derived values computed from raw form input.

use jiff::civil::Date;

/// Body mass index from weight in kilograms and height in centimetres,
/// rounded to two decimals.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let metres = height_cm / 100.0;
    let raw = weight_kg / (metres * metres);
    Some((raw * 100.0).round() / 100.0)
}

/// Completed years between `birth_date` and `on`.
pub fn age_on(birth_date: Date, on: Date) -> Option<u32> {
    if on < birth_date {
        return None;
    }
    let mut years = i32::from(on.year()) - i32::from(birth_date.year());
    if (on.month(), on.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}
