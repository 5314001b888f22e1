use askama::Template;

use crate::models::{InjuryHistory, Surface, TrainingLevel};

const LEVELS: [TrainingLevel; 3] = [
    TrainingLevel::Beginner,
    TrainingLevel::Intermediate,
    TrainingLevel::Advanced,
];

const SURFACES: [Surface; 5] = [
    Surface::Track,
    Surface::Treadmill,
    Surface::Field,
    Surface::Pavement,
    Surface::Other,
];

const INJURIES: [InjuryHistory; 5] = [
    InjuryHistory::None,
    InjuryHistory::Knees,
    InjuryHistory::Hamstrings,
    InjuryHistory::LowerBack,
    InjuryHistory::Other,
];

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "form.html")]
pub struct PlanFormTemplate {
    pub levels: Vec<&'static str>,
    pub surfaces: Vec<&'static str>,
    pub injuries: Vec<&'static str>,
}

/// Input form posting the five plan fields to `/plan`
pub async fn plan_form() -> PlanFormTemplate {
    PlanFormTemplate {
        levels: LEVELS.iter().map(TrainingLevel::as_str).collect(),
        surfaces: SURFACES.iter().map(Surface::as_str).collect(),
        injuries: INJURIES.iter().map(InjuryHistory::as_str).collect(),
    }
}
