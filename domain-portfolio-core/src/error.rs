//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Domain record not found
    #[error("Domain not found: {0}")]
    DomainNotFound(u64),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Bulk import rejected (the whole batch is aborted)
    #[error("Import failed: {0}")]
    ImportError(String),

    /// Password did not match the configured secret
    #[error("Incorrect password")]
    InvalidPassword,

    /// No admin password configured on the server
    #[error("Admin password is not configured")]
    AuthNotConfigured,

    /// Write attempted without an authenticated session
    #[error("Authentication required")]
    Unauthorized,

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::DomainNotFound(_)
            | Self::ValidationError(_)
            | Self::ImportError(_)
            | Self::InvalidPassword
            | Self::Unauthorized => true,
            Self::AuthNotConfigured | Self::SerializationError(_) | Self::StorageError(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_expected() {
        assert!(CoreError::DomainNotFound(3).is_expected());
        assert!(CoreError::InvalidPassword.is_expected());
        assert!(CoreError::ImportError("x".to_string()).is_expected());
    }

    #[test]
    fn server_faults_are_not_expected() {
        assert!(!CoreError::AuthNotConfigured.is_expected());
        assert!(!CoreError::StorageError("disk".to_string()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::DomainNotFound(7)).unwrap();
        assert_eq!(json["code"], "DomainNotFound");
        assert_eq!(json["details"], 7);
    }
}
