use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The fitness tests a result can be recorded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TestType {
    /// Body mass index, kg/m².
    Bmi,
    /// Sit-and-reach flexibility, cm past the toes.
    SitAndReach,
    /// Hand-grip dynamometer, kg.
    HandGrip,
    /// 30-second chair stand, repetitions.
    ChairStand,
    /// 2-minute step-up, repetitions.
    StepUp,
}

impl TestType {
    pub const ALL: [TestType; 5] = [
        TestType::Bmi,
        TestType::SitAndReach,
        TestType::HandGrip,
        TestType::ChairStand,
        TestType::StepUp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TestType::Bmi => "bmi",
            TestType::SitAndReach => "sit_and_reach",
            TestType::HandGrip => "hand_grip",
            TestType::ChairStand => "chair_stand",
            TestType::StepUp => "step_up",
        }
    }

    /// Name shown in the front end.
    pub fn display_name(self) -> &'static str {
        match self {
            TestType::Bmi => "ดัชนีมวลกาย",
            TestType::SitAndReach => "นั่งงอตัวไปข้างหน้า",
            TestType::HandGrip => "แรงบีบมือ",
            TestType::ChairStand => "ยืน-นั่งบนเก้าอี้ 30 วินาที",
            TestType::StepUp => "ยกเข่าขึ้นลง 2 นาที",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            TestType::Bmi => "kg/m²",
            TestType::SitAndReach => "cm",
            TestType::HandGrip => "kg",
            TestType::ChairStand | TestType::StepUp => "ครั้ง",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TestType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "test type",
                value: s.to_string(),
            })
    }
}
