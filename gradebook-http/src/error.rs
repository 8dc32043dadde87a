//! Error handling for gradebook-http
//!
//! Every failure leaves the API as `{"error": "<message>"}` with a status code
//! chosen from the error kind.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gradebook_core::GradeError;
use serde_json::json;
use std::cmp::PartialEq;
use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Domain error from gradebook-core
    #[error(transparent)]
    Grade(#[from] GradeError),

    /// Request could not be decoded
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl PartialEq<StatusCode> for AppError {
    fn eq(&self, status_code: &StatusCode) -> bool {
        let (error_status, _) = self.status_and_message();
        &error_status == status_code
    }
}

impl AppError {
    /// Get the status code and error message for this error
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Grade(err @ GradeError::Validation(_)) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Grade(err @ GradeError::NotFound { .. }) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Grade(err @ GradeError::Conflict { .. }) => (StatusCode::CONFLICT, err.to_string()),
            Self::Grade(err @ GradeError::Store(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", error_message);
        } else {
            tracing::debug!(%status, "Request rejected: {}", error_message);
        }

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
