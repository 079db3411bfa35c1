use axum::{
    extract::{Path, State},
    response::Json,
};
use crate::{ApiError, AppState, FeatureData, IngestResponse};
use tracing::info;
use std::sync::Arc;

pub async fn post_feature_data(
    State(state): State<Arc<AppState>>,
    Path((feature_id, customer_id)): Path<(String, String)>,
    Json(data): Json<FeatureData>,
) -> Result<Json<IngestResponse>, ApiError> {
    info!(
        "Received data point for feature {} / customer {}: {}",
        feature_id, customer_id, data.value
    );

    // Existence of the feature and customer identifiers is not checked;
    // they are opaque tags.
    let store = state.provider.acquire()?;
    store
        .write_point(&feature_id, &customer_id, data.value)
        .await?;

    Ok(Json(IngestResponse {
        status: "success",
        message: "Data received",
        feature_id,
        customer_id,
        data,
    }))
}
