// Plan generation logic

pub mod sprint_plan_service;

pub use sprint_plan_service::{build_sprint_plan, plan_summary, BaseParameters, LevelProfile};
