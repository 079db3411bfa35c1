use tracing::info;

use crate::constants::DEFAULT_MEASUREMENT;
use crate::store::StoreHandle;
use crate::Error;

/// Range delete for one tag pair: [epoch zero, before). The lower bound is
/// fixed; deletion is always "everything up to the cutoff", never a
/// bounded-below range. The cutoff arrives as a bound parameter and is
/// parsed store-side, so its format is not checked here.
pub fn delete_before_sql() -> String {
    format!(
        "ALTER TABLE {table} DELETE \
         WHERE feature_id = ? AND customer_id = ? \
         AND ts >= toDateTime64(0, 3) AND ts < parseDateTime64BestEffort(?)",
        table = DEFAULT_MEASUREMENT,
    )
}

impl StoreHandle {
    /// Delete every point for the tag pair with timestamp strictly before
    /// the cutoff. The store reports no affected-row count for a predicate
    /// delete; completion without fault is the only confirmation.
    pub async fn delete_before(
        &self,
        feature_id: &str,
        customer_id: &str,
        before: &str,
    ) -> Result<(), Error> {
        self.client
            .query(&delete_before_sql())
            .bind(feature_id)
            .bind(customer_id)
            .bind(before)
            .execute()
            .await?;

        info!(
            "Deleted points for feature {} / customer {} before {}",
            feature_id, customer_id, before
        );

        Ok(())
    }
}
