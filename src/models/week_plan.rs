use serde::{Serialize, Serializer};
use std::fmt;

/// Emphasis of a two-week block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingFocus {
    TechniqueAndAcceleration,
    SpeedAndConsistency,
    PeakSpeedAndConfidence,
}

impl TrainingFocus {
    /// Weeks 1-2, 3-4 and 5 onwards
    pub fn for_week(week: u32) -> Self {
        match week {
            0..=2 => TrainingFocus::TechniqueAndAcceleration,
            3..=4 => TrainingFocus::SpeedAndConsistency,
            _ => TrainingFocus::PeakSpeedAndConfidence,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrainingFocus::TechniqueAndAcceleration => "Technique & acceleration",
            TrainingFocus::SpeedAndConsistency => "Speed & consistency",
            TrainingFocus::PeakSpeedAndConfidence => "Peak speed & confidence",
        }
    }
}

impl fmt::Display for TrainingFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate of perceived exertion, always shown with one decimal place
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rpe(pub f64);

impl Rpe {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Rpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl Serialize for Rpe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One week of the sprint plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    pub week: u32,
    pub sessions_per_week: f64,
    pub reps: u32,
    pub rpe: Rpe,
    pub rest_seconds: u32,
    #[serde(serialize_with = "serialize_focus_label")]
    pub focus: TrainingFocus,
    pub notes: String,
}

fn serialize_focus_label<S: Serializer>(focus: &TrainingFocus, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(focus.label())
}
