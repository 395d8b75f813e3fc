use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The fixed set of body measurements a snapshot can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum MeasurementField {
    Weight,
    Height,
    Pulse,
    Neck,
    ShoulderLeft,
    ShoulderRight,
    Chest,
    Waist,
    HipLeft,
    HipRight,
    ArmLeft,
    ArmRight,
    ThighLeft,
    ThighRight,
    CalfLeft,
    CalfRight,
    SitAndReach,
    HandGrip,
    StepUp,
}

impl MeasurementField {
    pub const ALL: [MeasurementField; 19] = [
        MeasurementField::Weight,
        MeasurementField::Height,
        MeasurementField::Pulse,
        MeasurementField::Neck,
        MeasurementField::ShoulderLeft,
        MeasurementField::ShoulderRight,
        MeasurementField::Chest,
        MeasurementField::Waist,
        MeasurementField::HipLeft,
        MeasurementField::HipRight,
        MeasurementField::ArmLeft,
        MeasurementField::ArmRight,
        MeasurementField::ThighLeft,
        MeasurementField::ThighRight,
        MeasurementField::CalfLeft,
        MeasurementField::CalfRight,
        MeasurementField::SitAndReach,
        MeasurementField::HandGrip,
        MeasurementField::StepUp,
    ];

    /// Key used in stored records.
    pub fn key(self) -> &'static str {
        match self {
            MeasurementField::Weight => "weight",
            MeasurementField::Height => "height",
            MeasurementField::Pulse => "pulse",
            MeasurementField::Neck => "neck",
            MeasurementField::ShoulderLeft => "shoulderLeft",
            MeasurementField::ShoulderRight => "shoulderRight",
            MeasurementField::Chest => "chest",
            MeasurementField::Waist => "waist",
            MeasurementField::HipLeft => "hipLeft",
            MeasurementField::HipRight => "hipRight",
            MeasurementField::ArmLeft => "armLeft",
            MeasurementField::ArmRight => "armRight",
            MeasurementField::ThighLeft => "thighLeft",
            MeasurementField::ThighRight => "thighRight",
            MeasurementField::CalfLeft => "calfLeft",
            MeasurementField::CalfRight => "calfRight",
            MeasurementField::SitAndReach => "sitAndReach",
            MeasurementField::HandGrip => "handGrip",
            MeasurementField::StepUp => "stepUp",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MeasurementCategory {
    VitalSign,
    Circumference,
    Performance,
}

impl MeasurementCategory {
    pub fn label(self) -> &'static str {
        match self {
            MeasurementCategory::VitalSign => "สัญญาณชีพ",
            MeasurementCategory::Circumference => "เส้นรอบวง",
            MeasurementCategory::Performance => "สมรรถภาพ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "ซ้าย",
            Side::Right => "ขวา",
        }
    }
}

/// Which snapshot field(s) a comparison row reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Single(MeasurementField),
    Pair {
        left: MeasurementField,
        right: MeasurementField,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementSpec {
    /// Row id: the field key for single rows, the body part for pairs.
    pub id: &'static str,
    pub label: &'static str,
    pub category: MeasurementCategory,
    pub unit: &'static str,
    pub layout: Layout,
}

const fn single(
    field: MeasurementField,
    id: &'static str,
    label: &'static str,
    category: MeasurementCategory,
    unit: &'static str,
) -> MeasurementSpec {
    MeasurementSpec {
        id,
        label,
        category,
        unit,
        layout: Layout::Single(field),
    }
}

const fn pair(
    left: MeasurementField,
    right: MeasurementField,
    id: &'static str,
    label: &'static str,
) -> MeasurementSpec {
    MeasurementSpec {
        id,
        label,
        category: MeasurementCategory::Circumference,
        unit: "cm",
        layout: Layout::Pair { left, right },
    }
}

/// Canonical row order of a comparison. Every field appears exactly once.
pub static MEASUREMENT_SCHEMA: [MeasurementSpec; 14] = {
    use MeasurementCategory::{Circumference, Performance, VitalSign};
    use MeasurementField as F;

    [
        single(F::Weight, "weight", "น้ำหนัก", VitalSign, "kg"),
        single(F::Height, "height", "ส่วนสูง", VitalSign, "cm"),
        single(F::Pulse, "pulse", "ชีพจร", VitalSign, "ครั้ง/นาที"),
        single(F::Neck, "neck", "รอบคอ", Circumference, "cm"),
        pair(F::ShoulderLeft, F::ShoulderRight, "shoulder", "หัวไหล่"),
        single(F::Chest, "chest", "รอบอก", Circumference, "cm"),
        single(F::Waist, "waist", "รอบเอว", Circumference, "cm"),
        pair(F::HipLeft, F::HipRight, "hip", "สะโพก"),
        pair(F::ArmLeft, F::ArmRight, "arm", "ต้นแขน"),
        pair(F::ThighLeft, F::ThighRight, "thigh", "ต้นขา"),
        pair(F::CalfLeft, F::CalfRight, "calf", "น่อง"),
        single(F::SitAndReach, "sitAndReach", "นั่งงอตัวไปข้างหน้า", Performance, "cm"),
        single(F::HandGrip, "handGrip", "แรงบีบมือ", Performance, "kg"),
        single(F::StepUp, "stepUp", "ยกเข่าขึ้นลง 2 นาที", Performance, "ครั้ง"),
    ]
};
