use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use crate::{
    constants::DEFAULT_BUCKET_WIDTH, ApiError, AppState, BucketWidth, Error, MidrangeQuery,
    MidrangeResponse,
};
use tracing::{info, warn};
use std::sync::Arc;

pub async fn get_midrange(
    State(state): State<Arc<AppState>>,
    Path((feature_id, customer_id)): Path<(String, String)>,
    Query(params): Query<MidrangeQuery>,
) -> Result<Json<MidrangeResponse>, ApiError> {
    let interval = params
        .interval
        .unwrap_or_else(|| DEFAULT_BUCKET_WIDTH.to_string());

    info!(
        "Received midrange request for feature {} / customer {} at interval {}",
        feature_id, customer_id, interval
    );

    // Reject unsupported widths before any store interaction.
    let width = interval.parse::<BucketWidth>()?;

    let store = state.provider.acquire()?;
    let midrange = store
        .midrange(&feature_id, &customer_id, width)
        .await?
        .ok_or_else(|| {
            warn!(
                "Windowed mean series is empty for feature {} / customer {}",
                feature_id, customer_id
            );
            Error::NoData
        })?;

    Ok(Json(MidrangeResponse {
        status: "success",
        message: "Midrange computed",
        feature_id,
        customer_id,
        midrange,
    }))
}
