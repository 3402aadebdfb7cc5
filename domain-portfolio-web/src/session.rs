//! Admin session cookie.

use std::future::{Ready, ready};

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use domain_portfolio_core::CoreError;

use crate::error::ApiError;

pub const COOKIE_NAME: &str = "adminAuthenticated";

const COOKIE_MAX_AGE_SECS: i64 = 24 * 60 * 60;

pub fn is_authenticated(req: &HttpRequest) -> bool {
    req.cookie(COOKIE_NAME).is_some_and(|c| c.value() == "true")
}

/// Cookie set after a successful login
pub fn login_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build(COOKIE_NAME, "true")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(COOKIE_MAX_AGE_SECS))
        .secure(secure)
        .finish()
}

/// Expired cookie that clears the session
pub fn logout_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = login_cookie(secure);
    cookie.make_removal();
    cookie
}

/// Extractor guarding write endpoints; rejects with 401 when the session
/// cookie is missing.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl FromRequest for AdminSession {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(if is_authenticated(req) {
            Ok(Self)
        } else {
            Err(ApiError(CoreError::Unauthorized))
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn login_cookie_attributes() {
        let cookie = login_cookie(true);
        assert_eq!(cookie.value(), "true");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(86400)));
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn detects_cookie_value() {
        let req = TestRequest::default()
            .cookie(Cookie::new(COOKIE_NAME, "true"))
            .to_http_request();
        assert!(is_authenticated(&req));

        let req = TestRequest::default()
            .cookie(Cookie::new(COOKIE_NAME, "false"))
            .to_http_request();
        assert!(!is_authenticated(&req));
        assert!(!is_authenticated(&TestRequest::default().to_http_request()));
    }
}
