use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::agent::stateless_llm::LLMError;

pub const MISSING_FIELDS_MESSAGE: &str = "text and targetLang are required";
pub const TRANSLATION_FAILED_MESSAGE: &str = "Translation failed";

/// Errors surfaced to HTTP callers as `{"error": ...}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,

    #[error(transparent)]
    Upstream(#[from] LLMError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Upstream message when there is one, otherwise the generic fallback
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            TRANSLATION_FAILED_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_upstream_message_uses_fallback() {
        let err = ApiError::Upstream(LLMError::Api {
            status: 500,
            message: String::new(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), TRANSLATION_FAILED_MESSAGE);
    }

    #[test]
    fn upstream_message_is_passed_through() {
        let err = ApiError::from(LLMError::Api {
            status: 429,
            message: "You exceeded your current quota".to_string(),
        });
        assert_eq!(err.message(), "You exceeded your current quota");
    }

    #[test]
    fn missing_fields_is_bad_request() {
        assert_eq!(ApiError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingFields.message(), MISSING_FIELDS_MESSAGE);
    }
}
