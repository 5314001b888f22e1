// Presentation of generated plans

pub mod html;
pub mod text;

pub use html::{HtmlRenderer, PlanPage};
pub use text::PlainTextRenderer;

use crate::models::{display_number, WeekPlan};

/// Shown instead of a plan when the required inputs are absent
pub const MISSING_INPUT_MESSAGE: &str = "No data found. Please go back and fill out the form.";

/// Turns a week list into a presentation format
pub trait PlanRenderer {
    type Output;

    /// Render the intro line plus one section per week, in week order
    fn render_plan(&self, summary: &str, weeks: &[WeekPlan]) -> Self::Output;

    /// Render the fallback message without computing a plan
    fn render_missing_input(&self) -> Self::Output;
}

/// Reps, intensity and rest line shared by every renderer
pub fn session_details(week: &WeekPlan) -> String {
    format!(
        "{} session(s) per week. Each session: {} x 100-yard sprints at RPE {}, {} seconds rest between sprints.",
        display_number(week.sessions_per_week),
        week.reps,
        week.rpe,
        week.rest_seconds
    )
}

/// Card heading, e.g. `Week 1 — Technique & acceleration`
pub fn week_title(week: &WeekPlan) -> String {
    format!("Week {} — {}", week.week, week.focus)
}
