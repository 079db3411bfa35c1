mod error;
mod handlers;
mod state;
mod types;
pub use error::*;
pub use handlers::*;
pub use state::*;
pub use types::*;

use tokio::net::TcpListener;
use axum::{
    Router,
    routing::{get, post}
};
use tower_http::cors::{Any, CorsLayer};
use std::sync::Arc;
use std::net::SocketAddr;
use tracing::info;
use anyhow::Result;
use std::time::Duration;

use crate::store::StoreProvider;

pub async fn serve(host: String, port: u16, provider: StoreProvider) -> Result<()> {
    // Create application state
    let state = Arc::new(AppState::new(provider));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    // Build router with routes and middleware
    let app = Router::new()
        // Core endpoints
        .route("/", get(root))
        .route("/health", get(health_check))

        // Measurement endpoints
        .route(
            "/data/features/{feature_id}/customers/{customer_id}",
            post(post_feature_data).delete(delete_feature_data),
        )
        .route(
            "/data/features/{feature_id}/customers/{customer_id}/median",
            get(get_median),
        )
        .route(
            "/data/features/{feature_id}/customers/{customer_id}/midrange",
            get(get_midrange),
        )
        .layer(cors)
        .with_state(state);

    // Create socket address
    let addr = format!("{}:{}", host, port)
        .parse::<SocketAddr>()?;

    // Create TCP listener
    let listener = TcpListener::bind(&addr).await?;

    info!("API server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
