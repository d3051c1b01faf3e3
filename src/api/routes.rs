//! API Routes
//!
//! Configures the Axum router with the fingerprint middleware and the
//! demo endpoints.

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{fingerprint_handler, health_handler, stats_handler, AppState};
use crate::middleware::ja4h_middleware;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /fingerprint` - The fingerprint resolved for this request
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Fingerprint: resolves and publishes the `ja4h` value on every request
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router; every route passes through the fingerprint middleware
    Router::new()
        .route("/fingerprint", get(fingerprint_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            ja4h_middleware,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
