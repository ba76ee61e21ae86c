use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use models::{company, employee};
use service::company::domain::{CreateCompanyInput, UpdateCompanyInput};
use service::company::service as companies;
use service::pagination::PageQuery;

use crate::errors::ApiError;
use crate::routes::AppState;

#[utoipa::path(post, path = "/api/v1/companies", tag = "companies", request_body = crate::openapi::CreateCompanyDoc, responses((status = 201, description = "Created"), (status = 400, description = "Validation error"), (status = 409, description = "CNPJ already exists")))]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCompanyInput>,
) -> Result<(StatusCode, Json<company::Public>), ApiError> {
    let created = companies::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/companies", tag = "companies", responses((status = 200, description = "OK")))]
pub async fn find(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<company::Public>>, ApiError> {
    let rows = companies::find(&state.db, query.paginate()).await?;
    Ok(Json(rows))
}

#[utoipa::path(get, path = "/api/v1/companies/{id}", tag = "companies", responses((status = 200, description = "OK"), (status = 400, description = "Invalid ID"), (status = 404, description = "Not Found")))]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<company::Public>, ApiError> {
    let found = companies::find_by_id(&state.db, &id).await?;
    Ok(Json(found))
}

#[utoipa::path(get, path = "/api/v1/companies/{id}/employees", tag = "companies", responses((status = 200, description = "OK"), (status = 400, description = "Invalid ID")))]
pub async fn find_employees(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<employee::Public>>, ApiError> {
    let rows = companies::find_employees(&state.db, &id, query.paginate()).await?;
    Ok(Json(rows))
}

#[utoipa::path(patch, path = "/api/v1/companies/{id}", tag = "companies", request_body = crate::openapi::UpdateCompanyDoc, responses((status = 200, description = "OK"), (status = 400, description = "Invalid ID / validation error"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCompanyInput>,
) -> Result<Json<company::Public>, ApiError> {
    let updated = companies::update(&state.db, &id, input).await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/api/v1/companies/{id}", tag = "companies", responses((status = 204, description = "Deleted"), (status = 400, description = "Invalid ID"), (status = 404, description = "Not Found")))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    companies::delete(&state.db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
