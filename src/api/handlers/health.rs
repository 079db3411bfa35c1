use axum::response::{IntoResponse, Json};
use axum::http::StatusCode;
use time::OffsetDateTime;
use crate::{HealthResponse, RootResponse};

pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        message: "Welcome to the Time Series API",
    })
}

pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: "OK",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: OffsetDateTime::now_utc().to_string(),
    };

    (StatusCode::OK, Json(response))
}
