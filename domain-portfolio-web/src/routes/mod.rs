//! `/api` routes.

mod auth;
mod console;
mod domains;
mod settings;

use actix_web::web;

use crate::error::bad_request;

/// Request bodies up to the data file cap (large imports)
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Mount every API route under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(MAX_BODY_BYTES)
            .error_handler(|err, _| bad_request(err)),
    )
    .app_data(web::QueryConfig::default().error_handler(|err, _| bad_request(err)))
    .app_data(web::PathConfig::default().error_handler(|err, _| bad_request(err)))
    .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
    .service(
        web::scope("/api")
            .configure(auth::configure)
            .configure(domains::configure)
            .configure(settings::configure)
            .configure(console::configure),
    );
}
