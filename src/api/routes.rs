use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{classify::ServerErrorsFailureClass, cors::CorsLayer, trace::TraceLayer};
use tracing::{Level, Span};

use crate::api::handlers::{estimate_trip, health_check};
use crate::config::Config;

/// 핸들러가 공유하는 읽기 전용 상태.
#[derive(Debug, Clone)]
pub struct AppState {
    pub default_fuel_price_per_liter: f64,
}

impl AppState {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            default_fuel_price_per_liter: cfg.fuel_price_per_liter,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/efficiency/estimate", post(estimate_trip))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::span!(
                        Level::INFO,
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, _span: &Span| {
                        tracing::info!(
                            status = %response.status(),
                            latency_ms = latency.as_secs_f64() * 1000.0,
                            "response sent"
                        );
                    },
                )
                .on_failure(
                    |error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                        tracing::error!(
                            ?error,
                            latency_ms = latency.as_secs_f64() * 1000.0,
                            "request failed"
                        );
                    },
                ),
        )
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}
