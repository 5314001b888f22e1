use axum::{
    extract::{Form, Query},
    response::{Json, Redirect},
};
use serde::Serialize;
use tracing::info;

use crate::error::PlanError;
use crate::models::{coerce_number, InjuryHistory, PlanRequest, Surface, TrainingLevel, WeekPlan};
use crate::render::{HtmlRenderer, PlainTextRenderer, PlanPage, PlanRenderer};
use crate::services::{build_sprint_plan, plan_summary};

/// Raw `key=value` pairs in arrival order, repeats included
pub type QueryPairs = Vec<(String, String)>;

/// The five plan fields exactly as they arrive in a query string or form body
#[derive(Debug, Clone, Default)]
pub struct PlanQuery {
    pub age: Option<String>,
    pub level: Option<String>,
    pub days: Option<String>,
    pub surface: Option<String>,
    pub injury: Option<String>,
}

impl PlanQuery {
    /// Keep the first value of each known key; repeats and unknown keys are ignored.
    pub fn from_pairs(pairs: QueryPairs) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "age" => &mut query.age,
                "level" => &mut query.level,
                "days" => &mut query.days,
                "surface" => &mut query.surface,
                "injury" => &mut query.injury,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        query
    }

    /// `None` when `age` is absent; every other field is coerced leniently.
    pub fn to_request(&self) -> Option<PlanRequest> {
        let age = self.age.as_deref()?;

        Some(PlanRequest {
            age: coerce_number(Some(age)),
            level: TrainingLevel::from(self.level.as_deref().unwrap_or_default()),
            days: coerce_number(self.days.as_deref()),
            surface: Surface::from(self.surface.as_deref().unwrap_or_default()),
            injury: InjuryHistory::from(self.injury.as_deref().unwrap_or_default()),
        })
    }

    /// Intro line echoing the submitted level and surface.
    ///
    /// An absent field reads back as the value the plan was built with.
    pub fn summary(&self, request: &PlanRequest) -> String {
        plan_summary(
            request.days,
            self.level.as_deref().unwrap_or(request.level.as_str()),
            self.surface.as_deref().unwrap_or(request.surface.as_str()),
        )
    }

    /// Percent-encoded query string with the fields in form order
    pub fn to_query_string(&self) -> String {
        [
            ("age", &self.age),
            ("level", &self.level),
            ("days", &self.days),
            ("surface", &self.surface),
            ("injury", &self.injury),
        ]
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                name,
                urlencoding::encode(value.as_deref().unwrap_or_default())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
    }
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub summary: String,
    pub weeks: Vec<WeekPlan>,
}

/// Carry submitted form fields over to the plan view
pub async fn submit_plan_form(Form(pairs): Form<QueryPairs>) -> Redirect {
    let query = PlanQuery::from_pairs(pairs);
    Redirect::to(&format!("/plan?{}", query.to_query_string()))
}

/// Plan page with one card per week
pub async fn plan_page(Query(pairs): Query<QueryPairs>) -> PlanPage {
    render_with(&HtmlRenderer::new(), &PlanQuery::from_pairs(pairs))
}

/// Plan as plain text
pub async fn plan_text(Query(pairs): Query<QueryPairs>) -> String {
    render_with(&PlainTextRenderer, &PlanQuery::from_pairs(pairs))
}

/// Plan as JSON
pub async fn get_plan(Query(pairs): Query<QueryPairs>) -> Result<Json<PlanResponse>, PlanError> {
    let query = PlanQuery::from_pairs(pairs);
    let request = query.to_request().ok_or(PlanError::MissingInput("age"))?;
    let weeks = build_sprint_plan(&request);

    info!(level = %request.level, surface = %request.surface, "Generated sprint plan");

    Ok(Json(PlanResponse {
        summary: query.summary(&request),
        weeks,
    }))
}

fn render_with<R: PlanRenderer>(renderer: &R, query: &PlanQuery) -> R::Output {
    match query.to_request() {
        Some(request) => {
            let weeks = build_sprint_plan(&request);
            info!(level = %request.level, surface = %request.surface, "Rendering sprint plan");
            renderer.render_plan(&query.summary(&request), &weeks)
        }
        None => renderer.render_missing_input(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn create_test_query(age: Option<&str>) -> PlanQuery {
        PlanQuery {
            age: age.map(str::to_string),
            level: Some("advanced".to_string()),
            days: Some("3".to_string()),
            surface: Some("track".to_string()),
            injury: Some("none".to_string()),
        }
    }

    #[test]
    fn test_missing_age_yields_no_request() {
        assert!(create_test_query(None).to_request().is_none());
    }

    #[test]
    fn test_blank_age_still_counts_as_present() {
        let request = create_test_query(Some("")).to_request().unwrap();
        assert_eq!(request.age, 0.0);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let query = PlanQuery::from_pairs(pairs(&[
            ("age", "30"),
            ("utm_source", "mail"),
            ("age", "40"),
            ("level", "advanced"),
            ("level", "beginner"),
        ]));

        assert_eq!(query.age.as_deref(), Some("30"));
        assert_eq!(query.level.as_deref(), Some("advanced"));
        assert!(query.days.is_none());
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let query = PlanQuery::from_pairs(pairs(&[("age", "30")]));
        let request = query.to_request().unwrap();

        assert_eq!(request.level, TrainingLevel::Beginner);
        assert_eq!(request.days, 0.0);
        assert_eq!(request.surface, Surface::Other);
        assert_eq!(request.injury, InjuryHistory::Other);
        assert!(query.summary(&request).ends_with("(0 day(s) per week, beginner level on other)."));
    }

    #[test]
    fn test_summary_echoes_submitted_values() {
        let mut query = create_test_query(Some("30"));
        query.level = Some("elite".to_string());
        query.surface = Some("sand".to_string());
        let request = query.to_request().unwrap();

        assert_eq!(request.level, TrainingLevel::Beginner);
        assert!(query.summary(&request).ends_with("(3 day(s) per week, elite level on sand)."));
    }

    #[test]
    fn test_query_string_encoding() {
        let mut query = create_test_query(Some("30"));
        query.injury = Some("lower-back".to_string());
        query.surface = Some("grass & dirt".to_string());

        assert_eq!(
            query.to_query_string(),
            "age=30&level=advanced&days=3&surface=grass%20%26%20dirt&injury=lower-back"
        );
    }
}
