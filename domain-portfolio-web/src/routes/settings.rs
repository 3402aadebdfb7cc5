//! `/api/settings`: site settings, contact info and social links.

use actix_web::{HttpResponse, web};
use domain_portfolio_app::AppState;
use domain_portfolio_core::types::{ContactInfo, SiteSettings, SocialLinks};
use serde_json::json;
use tracing_attributes::instrument;

use crate::error::ApiResult;
use crate::session::AdminSession;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/settings")
            .service(
                web::resource("")
                    .route(web::get().to(get_site))
                    .route(web::post().to(save_site)),
            )
            .service(
                web::resource("/contact")
                    .route(web::get().to(get_contact))
                    .route(web::post().to(save_contact)),
            )
            .service(
                web::resource("/social")
                    .route(web::get().to(get_social))
                    .route(web::post().to(save_social)),
            ),
    );
}

async fn get_site(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let settings = state.settings_service.get_site_settings().await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "settings": settings })))
}

#[instrument(skip(state, _admin))]
async fn save_site(
    _admin: AdminSession,
    state: web::Data<AppState>,
    body: web::Json<SiteSettings>,
) -> ApiResult<HttpResponse> {
    state.settings_service.save_site_settings(&body).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "settings": body.into_inner() })))
}

async fn get_contact(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let contact = state.settings_service.get_contact_info().await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "contact": contact })))
}

#[instrument(skip(state, _admin))]
async fn save_contact(
    _admin: AdminSession,
    state: web::Data<AppState>,
    body: web::Json<ContactInfo>,
) -> ApiResult<HttpResponse> {
    state.settings_service.save_contact_info(&body).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "contact": body.into_inner() })))
}

async fn get_social(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let social = state.settings_service.get_social_links().await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "social": social })))
}

#[instrument(skip(state, _admin))]
async fn save_social(
    _admin: AdminSession,
    state: web::Data<AppState>,
    body: web::Json<SocialLinks>,
) -> ApiResult<HttpResponse> {
    state.settings_service.save_social_links(&body).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "social": body.into_inner() })))
}
