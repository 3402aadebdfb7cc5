//! Admin password check

use crate::error::{CoreError, CoreResult};

/// Checks login attempts against the admin password configured at startup.
///
/// The comparison is a plain string match; nothing is hashed or stored.
pub struct AuthService {
    admin_password: Option<String>,
}

impl AuthService {
    /// `None` (or an empty secret) means no password is configured and every
    /// login fails with `AuthNotConfigured`.
    #[must_use]
    pub fn new(admin_password: Option<String>) -> Self {
        Self {
            admin_password: admin_password.filter(|p| !p.is_empty()),
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.admin_password.is_some()
    }

    pub fn login(&self, password: &str) -> CoreResult<()> {
        if password.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Password cannot be empty".to_string(),
            ));
        }
        let Some(ref expected) = self.admin_password else {
            log::error!("Login attempted but no admin password is configured");
            return Err(CoreError::AuthNotConfigured);
        };
        if password != expected {
            log::warn!("Admin login rejected: wrong password");
            return Err(CoreError::InvalidPassword);
        }
        log::info!("Admin login succeeded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_password_succeeds() {
        let auth = AuthService::new(Some("s3cret".to_string()));
        assert!(auth.login("s3cret").is_ok());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let auth = AuthService::new(Some("s3cret".to_string()));
        assert!(matches!(auth.login("guess"), Err(CoreError::InvalidPassword)));
    }

    #[test]
    fn blank_password_is_a_validation_error() {
        let auth = AuthService::new(Some("s3cret".to_string()));
        assert!(matches!(auth.login("   "), Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn missing_secret_is_not_configured() {
        for secret in [None, Some(String::new())] {
            let auth = AuthService::new(secret);
            assert!(!auth.is_configured());
            assert!(matches!(auth.login("anything"), Err(CoreError::AuthNotConfigured)));
        }
    }
}
