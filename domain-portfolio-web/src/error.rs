//! HTTP mapping of core errors.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use domain_portfolio_core::CoreError;
use serde_json::json;

/// Error returned by every handler; rendered as `{success: false, message}`.
#[derive(Debug)]
pub struct ApiError(pub CoreError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        Self(e)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            CoreError::DomainNotFound(_) => StatusCode::NOT_FOUND,
            CoreError::ValidationError(_) | CoreError::ImportError(_) => StatusCode::BAD_REQUEST,
            CoreError::InvalidPassword | CoreError::Unauthorized => StatusCode::UNAUTHORIZED,
            CoreError::AuthNotConfigured
            | CoreError::SerializationError(_)
            | CoreError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.0.is_expected() {
            tracing::warn!(error = %self.0, "request rejected");
        } else {
            tracing::error!(error = %self.0, "request failed");
        }
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "message": self.0.to_string(),
        }))
    }
}

/// Malformed JSON bodies and query strings become 400 validation errors.
pub fn bad_request(message: impl fmt::Display) -> actix_web::Error {
    ApiError(CoreError::ValidationError(message.to_string())).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        let cases = [
            (CoreError::DomainNotFound(1), StatusCode::NOT_FOUND),
            (CoreError::ValidationError(String::new()), StatusCode::BAD_REQUEST),
            (CoreError::ImportError(String::new()), StatusCode::BAD_REQUEST),
            (CoreError::InvalidPassword, StatusCode::UNAUTHORIZED),
            (CoreError::AuthNotConfigured, StatusCode::INTERNAL_SERVER_ERROR),
            (CoreError::Unauthorized, StatusCode::UNAUTHORIZED),
            (CoreError::SerializationError(String::new()), StatusCode::INTERNAL_SERVER_ERROR),
            (CoreError::StorageError(String::new()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status_code(), status);
        }
    }
}
