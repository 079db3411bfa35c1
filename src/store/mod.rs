mod provider;
mod writer;
mod queries;
mod delete;

pub use provider::{StoreHandle, StoreProvider};
pub use writer::MeasurementPoint;
pub use queries::{bucket_means_sql, first_scalar, median_sql};
pub use delete::delete_before_sql;
