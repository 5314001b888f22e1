use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),
}

impl IntoResponse for PlanError {
    fn into_response(self) -> Response {
        let (status, error_code) = match self {
            PlanError::MissingInput(_) => (StatusCode::BAD_REQUEST, "MISSING_INPUT"),
        };

        let body = Json(json!({
            "error_code": error_code,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
