use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use service::errors::ServiceError;

/// Terminal translation of the service error taxonomy into the JSON error
/// contract. Handlers bubble `ServiceError` up with `?`; everything a caller
/// sees goes through here.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

fn respond(status: StatusCode, message: String) -> Response {
    let body = serde_json::json!({"code": status.as_u16(), "message": message});
    (status, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Runs inside the request span, so method and URL travel with these
        // log lines.
        match self.0 {
            ServiceError::Validation(fields) => {
                warn!(error = "Validation error", violations = fields.len(), "request rejected");
                let body = serde_json::json!({
                    "code": 400,
                    "message": "Validation error",
                    "fields": fields,
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            e @ ServiceError::InvalidId => {
                warn!(error = %e, "request rejected");
                respond(StatusCode::BAD_REQUEST, e.to_string())
            }
            e @ ServiceError::NotFound(_) => {
                warn!(error = %e, "request rejected");
                respond(StatusCode::NOT_FOUND, e.to_string())
            }
            e @ ServiceError::AlreadyExists(_) => {
                warn!(error = %e, "request rejected");
                respond(StatusCode::CONFLICT, e.to_string())
            }
            // Hash/Db and anything future: full detail stays server-side
            e => {
                error!(error = %e, "internal error");
                respond(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        }
    }
}
