//! `/api/console`: the `domain-list` command line.

use actix_web::{HttpResponse, web};
use domain_portfolio_app::AppState;
use domain_portfolio_core::console::{EXAMPLE_COMMANDS, suggest_example};
use domain_portfolio_core::types::{SortDirection, SortField, SortSpec};
use serde::Deserialize;
use serde_json::json;
use tracing_attributes::instrument;

use crate::error::ApiResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/console")
            .service(web::resource("").route(web::post().to(run)))
            .service(web::resource("/commands").route(web::get().to(commands)))
            .service(web::resource("/suggest").route(web::get().to(suggest)))
            .service(web::resource("/history").route(web::get().to(history))),
    );
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunBody {
    command: String,
    #[serde(default)]
    sort_field: SortField,
    #[serde(default)]
    sort_direction: SortDirection,
}

#[derive(Debug, Deserialize)]
struct SuggestParams {
    #[serde(default)]
    input: String,
}

#[instrument(skip(state))]
async fn run(state: web::Data<AppState>, body: web::Json<RunBody>) -> ApiResult<HttpResponse> {
    let RunBody {
        command,
        sort_field,
        sort_direction,
    } = body.into_inner();
    let outcome = state
        .run_console_command(&command, SortSpec::new(sort_field, sort_direction))
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "command": command,
        "filter": outcome.filter,
        "domains": outcome.domains,
    })))
}

async fn commands() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "success": true, "commands": EXAMPLE_COMMANDS }))
}

async fn suggest(params: web::Query<SuggestParams>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "suggestion": suggest_example(&params.input),
    }))
}

async fn history(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "success": true, "history": state.console_history().await }))
}
