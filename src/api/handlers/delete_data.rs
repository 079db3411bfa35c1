use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use crate::{ApiError, AppState, DeleteQuery, DeleteResponse};
use tracing::info;
use std::sync::Arc;

pub async fn delete_feature_data(
    State(state): State<Arc<AppState>>,
    Path((feature_id, customer_id)): Path<(String, String)>,
    Query(params): Query<DeleteQuery>,
) -> Result<Json<DeleteResponse>, ApiError> {
    info!(
        "Received delete request for feature {} / customer {} before {}",
        feature_id, customer_id, params.before
    );

    let store = state.provider.acquire()?;
    store
        .delete_before(&feature_id, &customer_id, &params.before)
        .await?;

    Ok(Json(DeleteResponse {
        status: "success",
        message: "Data deleted",
        feature_id,
        customer_id,
        before: params.before,
    }))
}
