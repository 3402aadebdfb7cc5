//! `/api/auth`: admin login, session check and logout.

use actix_web::{HttpRequest, HttpResponse, web};
use domain_portfolio_app::AppState;
use domain_portfolio_core::types::{AuthResponse, LoginRequest};
use tracing_attributes::instrument;

use crate::config::AuthConfig;
use crate::error::ApiResult;
use crate::session;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/auth")
            .route(web::post().to(login))
            .route(web::get().to(status))
            .route(web::delete().to(logout)),
    );
}

#[instrument(skip_all)]
async fn login(
    state: web::Data<AppState>,
    auth: web::Data<AuthConfig>,
    body: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    state.auth_service.login(&body.password)?;
    Ok(HttpResponse::Ok()
        .cookie(session::login_cookie(auth.secure_cookie))
        .json(AuthResponse::ok()))
}

async fn status(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().json(AuthResponse {
        success: session::is_authenticated(&req),
        message: None,
    })
}

#[instrument(skip_all)]
async fn logout(auth: web::Data<AuthConfig>) -> HttpResponse {
    tracing::info!("admin session cleared");
    HttpResponse::Ok()
        .cookie(session::logout_cookie(auth.secure_cookie))
        .json(AuthResponse::ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    use super::super::test_support::{PASSWORD, admin_cookie, app};
    use crate::session::COOKIE_NAME;

    #[actix_web::test]
    async fn correct_password_sets_cookie() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/auth")
            .set_json(json!({ "password": PASSWORD }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == COOKIE_NAME)
            .unwrap();
        assert_eq!(cookie.value(), "true");
        assert_eq!(cookie.http_only(), Some(true));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true }));
    }

    #[actix_web::test]
    async fn wrong_password_is_unauthorized() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/auth")
            .set_json(json!({ "password": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(resp.response().cookies().next().is_none());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["message"].is_string());
    }

    #[actix_web::test]
    async fn blank_password_is_bad_request() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/auth")
            .set_json(json!({ "password": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn status_reflects_cookie() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/auth").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], false);

        let req = test::TestRequest::get()
            .uri("/api/auth")
            .cookie(admin_cookie())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
    }

    #[actix_web::test]
    async fn logout_expires_cookie() {
        let app = app!();
        let req = test::TestRequest::delete()
            .uri("/api/auth")
            .cookie(admin_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == COOKIE_NAME)
            .unwrap();
        assert_eq!(cookie.value(), "");
    }
}
