use tracing::debug;

use crate::models::{display_number, InjuryHistory, PlanRequest, Rpe, TrainingFocus, TrainingLevel, WeekPlan};

/// Length of every generated plan
pub const PLAN_WEEKS: u32 = 6;

/// Rest between sprints never drops below this
pub const MIN_REST_SECONDS: i32 = 45;

const WARM_UP_NOTE: &str =
    "Warm up thoroughly with 5–10 minutes of easy movement and 3–4 progressive build-up runs.";
const BUILD_UP_REMINDER: &str = "Do at least 2 easy build-up runs before the first sprint.";
const COOL_DOWN_NOTE: &str = "Finish each session with light walking and stretching.";

/// Starting prescription for a training level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProfile {
    pub reps: u32,
    pub rpe: f64,
    pub rest_seconds: i32,
}

impl LevelProfile {
    pub const BEGINNER: LevelProfile = LevelProfile { reps: 6, rpe: 6.0, rest_seconds: 90 };
    pub const INTERMEDIATE: LevelProfile = LevelProfile { reps: 8, rpe: 7.0, rest_seconds: 75 };
    pub const ADVANCED: LevelProfile = LevelProfile { reps: 10, rpe: 8.0, rest_seconds: 60 };

    pub fn for_level(level: TrainingLevel) -> Self {
        match level {
            TrainingLevel::Beginner => Self::BEGINNER,
            TrainingLevel::Intermediate => Self::INTERMEDIATE,
            TrainingLevel::Advanced => Self::ADVANCED,
        }
    }
}

/// Week-one values after the age and injury adjustments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseParameters {
    pub reps: u32,
    pub rpe: f64,
    pub rest_seconds: i32,
}

impl BaseParameters {
    pub fn resolve(request: &PlanRequest) -> Self {
        let profile = LevelProfile::for_level(request.level);
        let mut base = Self {
            reps: profile.reps,
            rpe: profile.rpe,
            rest_seconds: profile.rest_seconds,
        };

        // NaN age compares false and gets no adjustment
        if request.age >= 50.0 {
            base.rest_seconds += 15;
            base.rpe -= 0.5;
        }

        match request.injury {
            InjuryHistory::Knees => base.rest_seconds += 15,
            InjuryHistory::Hamstrings => base.rpe -= 0.5,
            InjuryHistory::LowerBack | InjuryHistory::None | InjuryHistory::Other => {}
        }

        base
    }

    /// Prescription for a 1-indexed week
    fn week(&self, week: u32) -> (u32, Rpe, u32) {
        let elapsed = week.saturating_sub(1);
        let reps = self.reps + elapsed / 2;
        let rpe = Rpe(self.rpe + f64::from(elapsed) * 0.5);
        let rest = (self.rest_seconds - elapsed as i32 * 5).max(MIN_REST_SECONDS);

        (reps, rpe, rest as u32)
    }
}

/// Guidance text shared by every week of a plan
pub fn session_notes(request: &PlanRequest) -> String {
    let mut notes = format!(
        "{} {} {} ",
        WARM_UP_NOTE,
        request.surface.description(),
        BUILD_UP_REMINDER
    );

    let injury_note = request.injury.note();
    if !injury_note.is_empty() {
        notes.push_str(injury_note);
        notes.push(' ');
    }

    notes.push_str(COOL_DOWN_NOTE);
    notes
}

/// Build the six-week sprint plan for a request.
///
/// Pure and total: unknown inputs have already collapsed to their fallback
/// variants, so every request yields exactly [`PLAN_WEEKS`] entries.
pub fn build_sprint_plan(request: &PlanRequest) -> Vec<WeekPlan> {
    let base = BaseParameters::resolve(request);
    let notes = session_notes(request);

    debug!(
        level = %request.level,
        injury = %request.injury,
        base_reps = base.reps,
        base_rpe = base.rpe,
        base_rest = base.rest_seconds,
        "Resolved sprint plan base parameters"
    );

    (1..=PLAN_WEEKS)
        .map(|week| {
            let (reps, rpe, rest_seconds) = base.week(week);
            WeekPlan {
                week,
                sessions_per_week: request.days,
                reps,
                rpe,
                rest_seconds,
                focus: TrainingFocus::for_week(week),
                notes: notes.clone(),
            }
        })
        .collect()
}

/// One-line introduction shown above the week cards.
///
/// `level` and `surface` are echoed as submitted, so unknown values read back
/// verbatim even though the plan itself used the fallback prescription.
pub fn plan_summary(days: f64, level: &str, surface: &str) -> String {
    format!(
        "Here is your {}-week, 100-yard sprint program ({} day(s) per week, {} level on {}).",
        PLAN_WEEKS,
        display_number(days),
        level,
        surface
    )
}
