use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported sprint experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl TrainingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingLevel::Beginner => "beginner",
            TrainingLevel::Intermediate => "intermediate",
            TrainingLevel::Advanced => "advanced",
        }
    }
}

/// Unknown values fall back to beginner.
impl From<&str> for TrainingLevel {
    fn from(value: &str) -> Self {
        match value {
            "advanced" => TrainingLevel::Advanced,
            "intermediate" => TrainingLevel::Intermediate,
            _ => TrainingLevel::Beginner,
        }
    }
}

impl fmt::Display for TrainingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the sprints are run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    Track,
    Treadmill,
    Field,
    Pavement,
    #[default]
    Other,
}

impl Surface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Track => "track",
            Surface::Treadmill => "treadmill",
            Surface::Field => "field",
            Surface::Pavement => "pavement",
            Surface::Other => "other",
        }
    }

    /// Footwear and setup guidance for the surface
    pub fn description(&self) -> &'static str {
        match self {
            Surface::Track => {
                "Surface: track. Light trainers or spikes suit the rubberized lanes; use the outer lanes when the track is busy."
            }
            Surface::Treadmill => {
                "Surface: treadmill. Straddle the belt between reps and let it reach speed before you step on."
            }
            Surface::Field => {
                "Surface: field. Walk the stretch first to check for holes and wear shoes with good grip on grass."
            }
            Surface::Pavement => {
                "Surface: pavement. Wear cushioned shoes and pick a smooth, traffic-free stretch."
            }
            Surface::Other => {
                "Surface: mixed or unspecified. Choose shoes appropriate for the ground you will be running on."
            }
        }
    }
}

/// Unknown values fall back to the generic surface.
impl From<&str> for Surface {
    fn from(value: &str) -> Self {
        match value {
            "track" => Surface::Track,
            "treadmill" => Surface::Treadmill,
            "field" => Surface::Field,
            "pavement" => Surface::Pavement,
            _ => Surface::Other,
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Injury history that changes the prescription or the safety notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InjuryHistory {
    #[default]
    None,
    Knees,
    Hamstrings,
    LowerBack,
    Other,
}

impl InjuryHistory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InjuryHistory::None => "none",
            InjuryHistory::Knees => "knees",
            InjuryHistory::Hamstrings => "hamstrings",
            InjuryHistory::LowerBack => "lower-back",
            InjuryHistory::Other => "other",
        }
    }

    /// Safety guidance added to every week, empty when there is none
    pub fn note(&self) -> &'static str {
        match self {
            InjuryHistory::Knees => {
                "Stay on a flat, predictable surface. Focus on soft landings and avoid heavy braking."
            }
            InjuryHistory::Hamstrings => {
                "Emphasize a long warm-up and keep the first 2 weeks at controlled intensity. Stop immediately at any pulling sensation."
            }
            InjuryHistory::LowerBack => {
                "Stay tall while sprinting, brace your core, and avoid excessive forward lean."
            }
            InjuryHistory::None | InjuryHistory::Other => "",
        }
    }
}

/// Unknown values get no injury-specific handling.
impl From<&str> for InjuryHistory {
    fn from(value: &str) -> Self {
        match value {
            "none" => InjuryHistory::None,
            "knees" => InjuryHistory::Knees,
            "hamstrings" => InjuryHistory::Hamstrings,
            "lower-back" => InjuryHistory::LowerBack,
            _ => InjuryHistory::Other,
        }
    }
}

impl fmt::Display for InjuryHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for a six-week sprint plan
///
/// `age` and `days` stay floating point because they come straight from
/// form fields; see [`coerce_number`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub age: f64,
    pub level: TrainingLevel,
    pub days: f64,
    pub surface: Surface,
    pub injury: InjuryHistory,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            age: 30.0,
            level: TrainingLevel::default(),
            days: 3.0,
            surface: Surface::default(),
            injury: InjuryHistory::default(),
        }
    }
}

/// Lenient numeric parsing for form input.
///
/// Absent or blank input is `0` and anything unparsable is NaN. The only
/// accepted spellings of infinity are `Infinity`, `+Infinity` and
/// `-Infinity`; `inf`, `nan` and friends are unparsable.
pub fn coerce_number(raw: Option<&str>) -> f64 {
    let value = match raw.map(str::trim) {
        None | Some("") => return 0.0,
        Some(value) => value,
    };

    match value {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if value.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => f64::NAN,
        _ => value.parse().unwrap_or(f64::NAN),
    }
}

/// Format a coerced number for display: `3`, `2.5`, `NaN`, `Infinity`
pub fn display_number(value: f64) -> String {
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{sign}Infinity")
    } else if value == 0.0 {
        // no "-0"
        "0".to_string()
    } else {
        value.to_string()
    }
}
