use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::form::plan_form;
use super::health::health_check;
use super::plan::{get_plan, plan_page, plan_text, submit_plan_form};

pub fn create_routes() -> Router {
    Router::new()
        .route("/", get(plan_form))
        .route("/plan", get(plan_page).post(submit_plan_form))
        .route("/plan.txt", get(plan_text))
        .route("/api/plan", get(get_plan))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
}
