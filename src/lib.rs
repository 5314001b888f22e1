//! Six-week sprint plan generator.
//!
//! [`services::build_sprint_plan`] turns a [`models::PlanRequest`] into six
//! [`models::WeekPlan`]s; the `api` module serves the input form and the
//! rendered plan over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
