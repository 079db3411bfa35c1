use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use tracing::error;

use crate::Error;

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Store-layer failure carried to the request boundary.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

pub fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        Error::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
        // An empty window is served as a failure, indistinguishable from a
        // store fault to the caller. Pinned by a regression test.
        Error::NoData => StatusCode::INTERNAL_SERVER_ERROR,
        Error::Config(_) | Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_code(err: &Error) -> &'static str {
    match err {
        Error::Validation(_) => "VALIDATION_ERROR",
        Error::Connection(_) => "STORE_UNAVAILABLE",
        Error::NoData => "NO_DATA",
        Error::Config(_) => "CONFIG_ERROR",
        Error::Store(_) => "STORE_ERROR",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        error!("Request failed ({}): {}", status, self.0);

        // The fault's message is echoed to the caller; there is no trust
        // boundary anywhere in this system.
        let body = ErrorResponse {
            error: error_code(&self.0).to_string(),
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
