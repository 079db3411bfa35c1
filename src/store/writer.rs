use clickhouse::Row;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;

use crate::constants::DEFAULT_MEASUREMENT;
use crate::store::StoreHandle;
use crate::Error;

/// A single observation: two indexed tags, one numeric field, and the
/// timestamp assigned at write time. Points are never mutated after the
/// insert; they only leave the store through a range delete.
#[derive(Debug, Clone, Row, Serialize)]
pub struct MeasurementPoint {
    pub feature_id: String,
    pub customer_id: String,
    pub value: f64,
    #[serde(with = "clickhouse::serde::time::datetime64::millis")]
    pub ts: OffsetDateTime,
}

impl StoreHandle {
    /// Append exactly one point for the given tag pair.
    ///
    /// The timestamp is the instant of this call (UTC), not caller-supplied.
    /// No batching and no deduplication: one call, one synchronous insert.
    pub async fn write_point(
        &self,
        feature_id: &str,
        customer_id: &str,
        value: f64,
    ) -> Result<MeasurementPoint, Error> {
        let point = MeasurementPoint {
            feature_id: feature_id.to_string(),
            customer_id: customer_id.to_string(),
            value,
            ts: OffsetDateTime::now_utc(),
        };

        let mut insert = self.client.insert(DEFAULT_MEASUREMENT)?;
        insert.write(&point).await?;
        insert.end().await?;

        info!(
            "Wrote point for feature {} / customer {} at {}",
            point.feature_id, point.customer_id, point.ts
        );

        Ok(point)
    }
}
