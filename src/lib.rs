pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod store;

#[cfg(test)]
mod tests;

pub use api::*;
pub use config::StoreConfig;
pub use constants::*;
pub use error::Error;
pub use models::*;
pub use store::*;

use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
