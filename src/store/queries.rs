use tracing::{debug, info};

use crate::constants::{DEFAULT_MEASUREMENT, WINDOW_DAYS};
use crate::models::{BucketWidth, MidrangeSummary};
use crate::store::StoreHandle;
use crate::Error;

/// Approximate median of all points for one tag pair inside the trailing
/// window. `quantile` is a sampling estimator: exactness is traded for
/// reduced cost. Grouping by the tag pair makes an empty series come back
/// as zero rows rather than a single NULL row.
pub fn median_sql() -> String {
    format!(
        "SELECT quantile(0.5)(value) AS median \
         FROM {table} \
         WHERE feature_id = ? AND customer_id = ? \
         AND ts >= now64(3) - INTERVAL {days} DAY AND ts <= now64(3) \
         GROUP BY feature_id, customer_id",
        table = DEFAULT_MEASUREMENT,
        days = WINDOW_DAYS,
    )
}

/// Mean of each non-empty bucket of the given width inside the trailing
/// window, oldest bucket first. Buckets with no points produce no row.
pub fn bucket_means_sql(width: BucketWidth) -> String {
    format!(
        "SELECT avg(value) AS bucket_mean \
         FROM {table} \
         WHERE feature_id = ? AND customer_id = ? \
         AND ts >= now64(3) - INTERVAL {days} DAY AND ts <= now64(3) \
         GROUP BY toStartOfInterval(ts, {interval}) AS bucket \
         ORDER BY bucket ASC",
        table = DEFAULT_MEASUREMENT,
        days = WINDOW_DAYS,
        interval = width.as_sql_interval(),
    )
}

/// First row wins. If the reduction ever produces more than one row, the
/// rest are not consulted; there is no aggregation across rows here.
pub fn first_scalar(rows: &[f64]) -> Option<f64> {
    rows.first().copied()
}

impl StoreHandle {
    pub async fn median(
        &self,
        feature_id: &str,
        customer_id: &str,
    ) -> Result<Option<f64>, Error> {
        debug!(
            "Running median query for feature {} / customer {}",
            feature_id, customer_id
        );

        let rows = self
            .client
            .query(&median_sql())
            .bind(feature_id)
            .bind(customer_id)
            .fetch_all::<f64>()
            .await?;

        Ok(first_scalar(&rows))
    }

    pub async fn midrange(
        &self,
        feature_id: &str,
        customer_id: &str,
        width: BucketWidth,
    ) -> Result<Option<MidrangeSummary>, Error> {
        debug!(
            "Running windowed mean query for feature {} / customer {} at width {}",
            feature_id, customer_id, width
        );

        let means = self
            .client
            .query(&bucket_means_sql(width))
            .bind(feature_id)
            .bind(customer_id)
            .fetch_all::<f64>()
            .await?;

        info!(
            "Windowed mean series for feature {} / customer {} has {} buckets",
            feature_id,
            customer_id,
            means.len()
        );

        Ok(MidrangeSummary::from_series(&means))
    }
}
