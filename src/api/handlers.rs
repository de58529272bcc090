use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::warn;

use crate::api::models::{ErrorResponse, EstimateRequest, HealthResponse};
use crate::api::routes::AppState;
use crate::efficiency::{estimate, TripResult, ValidationError};

/// 핸들러 오류. 응답 본문은 `{ code, message }` 형태이다.
#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    InvalidInput(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.code(), e.to_string()),
            ApiError::InvalidInput(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_INPUT", msg),
        };
        let body = ErrorResponse {
            code: code.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(value: ValidationError) -> Self {
        ApiError::Validation(value)
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn estimate_trip(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<TripResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("rejected estimate body: {}", rejection.body_text());
        ApiError::InvalidInput(rejection.body_text())
    })?;
    let input = request.into_trip_input(state.default_fuel_price_per_liter);
    let result = estimate(&input).inspect_err(|e| warn!(code = e.code(), "estimate rejected"))?;
    Ok(Json(result))
}
