use askama::Template;
use axum::response::{IntoResponse, Response};

use super::{session_details, week_title, PlanRenderer, MISSING_INPUT_MESSAGE};
use crate::models::WeekPlan;

/// Display strings for one `week-card`
pub struct WeekCard {
    pub title: String,
    pub details: String,
    pub notes: String,
}

impl From<&WeekPlan> for WeekCard {
    fn from(week: &WeekPlan) -> Self {
        Self {
            title: week_title(week),
            details: session_details(week),
            notes: week.notes.clone(),
        }
    }
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "plan.html")]
pub struct PlanPageTemplate {
    pub summary: String,
    pub weeks: Vec<WeekCard>,
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "missing_input.html")]
pub struct MissingInputTemplate {
    pub message: &'static str,
}

/// Either the rendered plan or the fallback page
pub enum PlanPage {
    Plan(PlanPageTemplate),
    MissingInput(MissingInputTemplate),
}

impl PlanPage {
    pub fn render(&self) -> askama::Result<String> {
        match self {
            PlanPage::Plan(page) => page.render(),
            PlanPage::MissingInput(page) => page.render(),
        }
    }
}

impl IntoResponse for PlanPage {
    fn into_response(self) -> Response {
        match self {
            PlanPage::Plan(page) => page.into_response(),
            PlanPage::MissingInput(page) => page.into_response(),
        }
    }
}

/// Renders the plan pages from the askama templates
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PlanRenderer for HtmlRenderer {
    type Output = PlanPage;

    fn render_plan(&self, summary: &str, weeks: &[WeekPlan]) -> PlanPage {
        PlanPage::Plan(PlanPageTemplate {
            summary: summary.to_string(),
            weeks: weeks.iter().map(WeekCard::from).collect(),
        })
    }

    fn render_missing_input(&self) -> PlanPage {
        PlanPage::MissingInput(MissingInputTemplate {
            message: MISSING_INPUT_MESSAGE,
        })
    }
}
