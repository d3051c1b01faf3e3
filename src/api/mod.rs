//! API Module
//!
//! HTTP handlers and routing for the demo server surface.
//!
//! # Endpoints
//! - `GET /fingerprint` - The fingerprint resolved for this request
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
