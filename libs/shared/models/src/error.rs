use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A booking that failed validation. `code` is the machine-readable reason.
    #[error("Booking rejected ({code}): {reason}")]
    Rejected { code: &'static str, reason: String },
}

impl AppError {
    /// Every variant is a client error; the in-memory store has no failure modes.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::MissingField(_) | AppError::Rejected { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::BadRequest(msg) => json!({ "error": msg }),
            AppError::MissingField(field) => json!({
                "error": format!("Missing required field: {}", field)
            }),
            AppError::Rejected { code, reason } => json!({
                "error": reason,
                "code": code
            }),
        };

        tracing::warn!("Request rejected: {}: {}", status, self);

        (status, Json(body)).into_response()
    }
}
