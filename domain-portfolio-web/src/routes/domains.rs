//! `/api/domains`: listing, CRUD, ordering and bulk import.

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, web};
use domain_portfolio_app::AppState;
use domain_portfolio_core::types::{
    CreateDomainRequest, DomainFilter, DomainUpdate, ImportFile, ListQuery, MoveDirection,
    SortDirection, SortField, SortSpec, TEMPLATE_FILE_NAME,
};
use serde::Deserialize;
use serde_json::json;
use tracing_attributes::instrument;

use crate::error::ApiResult;
use crate::session::AdminSession;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/domains")
            .service(
                web::resource("")
                    .route(web::get().to(list))
                    .route(web::post().to(create)),
            )
            .service(web::resource("/template").route(web::get().to(template)))
            .service(web::resource("/import").route(web::post().to(import)))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get))
                    .route(web::put().to(update))
                    .route(web::delete().to(delete)),
            )
            .service(web::resource("/{id}/clone").route(web::post().to(clone)))
            .service(web::resource("/{id}/move").route(web::post().to(move_order)))
            .service(web::resource("/{id}/permanent").route(web::put().to(set_permanent))),
    );
}

/// `?filter=provider&value=Namecheap&sortField=expiry&sortDirection=desc`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    filter: Option<String>,
    value: Option<String>,
    sort_field: Option<SortField>,
    sort_direction: Option<SortDirection>,
}

impl ListParams {
    fn into_query(self) -> ListQuery {
        ListQuery {
            filter: DomainFilter::from_parts(self.filter.as_deref().unwrap_or("all"), self.value),
            sort: SortSpec::new(
                self.sort_field.unwrap_or_default(),
                self.sort_direction.unwrap_or_default(),
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MoveBody {
    direction: MoveDirection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PermanentBody {
    is_permanent: bool,
}

#[instrument(skip(state))]
async fn list(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> ApiResult<HttpResponse> {
    let domains = state.domain_service.list(&params.into_inner().into_query()).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "domains": domains })))
}

#[instrument(skip(state))]
async fn get(state: web::Data<AppState>, id: web::Path<u64>) -> ApiResult<HttpResponse> {
    let domain = state.domain_service.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "domain": domain })))
}

#[instrument(skip(state, _admin))]
async fn create(
    _admin: AdminSession,
    state: web::Data<AppState>,
    body: web::Json<CreateDomainRequest>,
) -> ApiResult<HttpResponse> {
    let domain = state.domain_service.add(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "domain": domain })))
}

#[instrument(skip(state, _admin))]
async fn update(
    _admin: AdminSession,
    state: web::Data<AppState>,
    id: web::Path<u64>,
    body: web::Json<DomainUpdate>,
) -> ApiResult<HttpResponse> {
    let domain = state
        .domain_service
        .update(id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "domain": domain })))
}

#[instrument(skip(state, _admin))]
async fn delete(
    _admin: AdminSession,
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    state.domain_service.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

#[instrument(skip(state, _admin))]
async fn clone(
    _admin: AdminSession,
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let domain = state.domain_service.clone_domain(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "domain": domain })))
}

#[instrument(skip(state, _admin))]
async fn move_order(
    _admin: AdminSession,
    state: web::Data<AppState>,
    id: web::Path<u64>,
    body: web::Json<MoveBody>,
) -> ApiResult<HttpResponse> {
    let domains = state
        .domain_service
        .move_order(id.into_inner(), body.direction)
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "domains": domains })))
}

#[instrument(skip(state, _admin))]
async fn set_permanent(
    _admin: AdminSession,
    state: web::Data<AppState>,
    id: web::Path<u64>,
    body: web::Json<PermanentBody>,
) -> ApiResult<HttpResponse> {
    let domain = state
        .domain_service
        .set_permanent(id.into_inner(), body.is_permanent)
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "domain": domain })))
}

async fn template(state: web::Data<AppState>) -> HttpResponse {
    let template: ImportFile = state.domain_service.export_template();
    HttpResponse::Ok()
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(TEMPLATE_FILE_NAME.to_string())],
        })
        .json(json!({
            "success": true,
            "fileName": TEMPLATE_FILE_NAME,
            "template": template,
        }))
}

/// The body is taken raw so malformed JSON is reported as an import error.
#[instrument(skip_all)]
async fn import(
    _admin: AdminSession,
    state: web::Data<AppState>,
    body: String,
) -> ApiResult<HttpResponse> {
    let imported = state.domain_service.import(&body).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "imported": imported })))
}
