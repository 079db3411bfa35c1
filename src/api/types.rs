use serde::{Deserialize, Serialize};

use crate::models::MidrangeSummary;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Measurement submission body: the single numeric field of a point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureData {
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub feature_id: String,
    pub customer_id: String,
    pub data: FeatureData,
}

#[derive(Debug, Serialize)]
pub struct MedianResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub feature_id: String,
    pub customer_id: String,
    pub median: f64,
}

#[derive(Debug, Deserialize)]
pub struct MidrangeQuery {
    pub interval: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MidrangeResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub feature_id: String,
    pub customer_id: String,
    pub midrange: MidrangeSummary,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub before: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub feature_id: String,
    pub customer_id: String,
    pub before: String,
}
