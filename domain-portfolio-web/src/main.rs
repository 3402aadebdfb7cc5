//! Domain Portfolio web server
//!
//! Serves the JSON API over Actix-web, backed by a single JSON data file.

mod config;
mod error;
mod logging;
mod routes;
mod session;

use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use anyhow::Context;
use domain_portfolio_app::AppStateBuilder;
use domain_portfolio_app::adapters::JsonFileStore;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let _log_guard = logging::init(&config.log)?;

    tracing::info!("Starting Domain Portfolio server");

    let store = JsonFileStore::new(&config.storage.data_file)
        .await
        .context("failed to open data file")?;
    let state = web::Data::new(
        AppStateBuilder::new()
            .key_value_store(Arc::new(store))
            .admin_password(Config::admin_password())
            .build()?,
    );
    let auth = web::Data::new(config.auth.clone());

    let workers = config.server.worker_count();
    let addr = (config.server.host.clone(), config.server.port);
    tracing::info!("Listening on {}:{} with {workers} workers", addr.0, addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(auth.clone())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .workers(workers)
    .bind(addr)
    .with_context(|| format!("failed to bind {}:{}", config.server.host, config.server.port))?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
