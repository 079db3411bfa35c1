// Submodules
pub mod health;  // Root and health endpoints

// Measurement endpoints
pub mod ingest;
pub mod median;
pub mod midrange;
pub mod delete_data;

// Re-exports
pub use health::{health_check, root};

// Measurement endpoints
pub use ingest::post_feature_data;
pub use median::get_median;
pub use midrange::get_midrange;
pub use delete_data::delete_feature_data;
