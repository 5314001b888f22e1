use super::{session_details, week_title, PlanRenderer, MISSING_INPUT_MESSAGE};
use crate::models::WeekPlan;

/// Plain text, one blank-line separated block per week
#[derive(Debug, Clone, Default)]
pub struct PlainTextRenderer;

impl PlanRenderer for PlainTextRenderer {
    type Output = String;

    fn render_plan(&self, summary: &str, weeks: &[WeekPlan]) -> String {
        let mut blocks = vec![summary.to_string()];
        blocks.extend(
            weeks
                .iter()
                .map(|week| format!("{}\n{}\n{}", week_title(week), session_details(week), week.notes)),
        );

        let mut output = blocks.join("\n\n");
        output.push('\n');
        output
    }

    fn render_missing_input(&self) -> String {
        MISSING_INPUT_MESSAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanRequest;
    use crate::services::{build_sprint_plan, plan_summary};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_input_is_exact_message() {
        assert_eq!(
            PlainTextRenderer.render_missing_input(),
            "No data found. Please go back and fill out the form."
        );
    }

    #[test]
    fn test_render_plan_blocks() {
        let request = PlanRequest::default();
        let summary = plan_summary(request.days, "beginner", "track");
        let text = PlainTextRenderer.render_plan(&summary, &build_sprint_plan(&request));
        let blocks: Vec<&str> = text.trim_end().split("\n\n").collect();

        assert_eq!(blocks.len(), 7);
        assert!(blocks[0].starts_with("Here is your 6-week"));
        assert!(blocks[1].starts_with("Week 1 — Technique & acceleration\n"));
        assert!(blocks[6].starts_with("Week 6 — Peak speed & confidence\n"));
    }
}
