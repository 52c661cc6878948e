//! JSON error bodies shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// Individual validation messages, in rule order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// The title the client submitted, echoed back for re-display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ErrorResponse {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            errors: Vec::new(),
            title: None,
        }
    }

    pub fn not_found() -> Self {
        Self::new(ErrorCode::NotFound, "Not found.")
    }

    pub fn validation(errors: &[ValidationError], title: Option<String>) -> Self {
        let errors: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Self {
            message: errors.join(" "),
            errors,
            title,
            ..Self::new(ErrorCode::ValidationFailed, "")
        }
    }

    /// The body could not be read as a title submission.
    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, detail)
    }

    pub fn session_store() -> Self {
        Self::new(ErrorCode::SessionStoreError, "Session storage is unavailable.")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Pair the body with a status code.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TitleKind;
    use serde_json::json;

    #[test]
    fn not_found_body_is_generic() {
        let body = serde_json::to_value(ErrorResponse::not_found()).unwrap();
        assert_eq!(body, json!({ "code": "NOT_FOUND", "message": "Not found." }));
    }

    #[test]
    fn validation_body_lists_every_error_and_echoes_title() {
        let errors = vec![
            ValidationError::too_long(TitleKind::List, 100),
            ValidationError::not_unique(TitleKind::List),
        ];
        let body =
            serde_json::to_value(ErrorResponse::validation(&errors, Some("Work".to_string())))
                .unwrap();

        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
        assert_eq!(body["errors"][1], "List title must be unique.");
        assert_eq!(body["title"], "Work");
    }

    #[test]
    fn with_status_sets_status_code() {
        let response = ErrorResponse::internal("boom").with_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
