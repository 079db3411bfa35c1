use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Store configuration error: {0}")]
    Config(String),

    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No data points in the query window")]
    NoData,
}

impl From<clickhouse::error::Error> for Error {
    fn from(err: clickhouse::error::Error) -> Self {
        // Transport faults get their own variant so the boundary can answer
        // 503 instead of a generic 500.
        match err {
            clickhouse::error::Error::Network(_) => Error::Connection(err.to_string()),
            clickhouse::error::Error::TimedOut => Error::Connection(err.to_string()),
            other => Error::Store(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Store(err.to_string())
    }
}
