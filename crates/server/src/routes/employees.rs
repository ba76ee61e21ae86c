use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use models::employee;
use service::employee::domain::{CreateEmployeeInput, UpdateEmployeeInput};
use service::employee::service as employees;
use service::pagination::PageQuery;

use crate::errors::ApiError;
use crate::routes::AppState;

#[utoipa::path(post, path = "/api/v1/employees", tag = "employees", request_body = crate::openapi::CreateEmployeeDoc, responses((status = 201, description = "Created"), (status = 400, description = "Validation error"), (status = 404, description = "Associated company not found"), (status = 409, description = "Email already exists")))]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployeeInput>,
) -> Result<(StatusCode, Json<employee::Public>), ApiError> {
    let created = employees::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/employees", tag = "employees", responses((status = 200, description = "OK")))]
pub async fn find(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<employee::Public>>, ApiError> {
    let rows = employees::find(&state.db, query.paginate()).await?;
    Ok(Json(rows))
}

#[utoipa::path(get, path = "/api/v1/employees/{id}", tag = "employees", responses((status = 200, description = "OK"), (status = 400, description = "Invalid ID"), (status = 404, description = "Not Found")))]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<employee::Public>, ApiError> {
    let found = employees::find_by_id(&state.db, &id).await?;
    Ok(Json(found))
}

#[utoipa::path(patch, path = "/api/v1/employees/{id}", tag = "employees", request_body = crate::openapi::UpdateEmployeeDoc, responses((status = 200, description = "OK"), (status = 400, description = "Invalid ID / validation error"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateEmployeeInput>,
) -> Result<Json<employee::Public>, ApiError> {
    let updated = employees::update(&state.db, &id, input).await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/api/v1/employees/{id}", tag = "employees", responses((status = 204, description = "Deleted"), (status = 400, description = "Invalid ID"), (status = 404, description = "Not Found")))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    employees::delete(&state.db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
