use axum::{
    extract::{Path, State},
    response::Json,
};
use crate::{ApiError, AppState, Error, MedianResponse};
use tracing::{info, warn};
use std::sync::Arc;

pub async fn get_median(
    State(state): State<Arc<AppState>>,
    Path((feature_id, customer_id)): Path<(String, String)>,
) -> Result<Json<MedianResponse>, ApiError> {
    info!(
        "Received median request for feature {} / customer {}",
        feature_id, customer_id
    );

    let store = state.provider.acquire()?;
    let median = store
        .median(&feature_id, &customer_id)
        .await?
        .ok_or_else(|| {
            warn!(
                "No points in window for feature {} / customer {}",
                feature_id, customer_id
            );
            Error::NoData
        })?;

    Ok(Json(MedianResponse {
        status: "success",
        message: "Median computed",
        feature_id,
        customer_id,
        median,
    }))
}
