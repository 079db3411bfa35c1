use serde::Deserialize;
use std::env;

/// Connection parameters for the backing time-series store.
///
/// Built once at process start and passed by reference into everything that
/// touches the store. The defaults are only suitable for a local dev
/// instance; production deployments must set all four variables.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub url: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("TSDB_URL").unwrap_or_else(|_| "http://localhost:8123".to_string()),
            user: env::var("TSDB_USER").unwrap_or_else(|_| "default".to_string()),
            password: env::var("TSDB_PASSWORD").unwrap_or_default(),
            database: env::var("TSDB_DATABASE").unwrap_or_else(|_| "time_series_data".to_string()),
        }
    }
}
