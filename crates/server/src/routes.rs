use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::rate_limit::{self, RateLimiter};

pub mod companies;
pub mod employees;

/// Explicit handles for everything request handling needs.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub limiter: Arc<RateLimiter>,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health + docs, versioned resource
/// routes, rate limiting, CORS and request tracing.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/companies", get(companies::find).post(companies::create))
        .route(
            "/companies/:id",
            get(companies::find_by_id)
                .patch(companies::update)
                .delete(companies::delete),
        )
        .route("/companies/:id/employees", get(companies::find_employees))
        .route("/employees", get(employees::find).post(employees::create))
        .route(
            "/employees/:id",
            get(employees::find_by_id)
                .patch(employees::update)
                .delete(employees::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::limit_by_addr,
        ))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
