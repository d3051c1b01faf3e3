//! API Handlers
//!
//! HTTP request handlers for the demo endpoints, plus the shared
//! application state the fingerprint middleware runs against.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use axum::extract::State;
use axum::{Extension, Json};

use crate::cache::FingerprintCache;
use crate::config::Config;
use crate::fingerprint::{Fingerprinter, Ja4hFingerprinter};
use crate::middleware::Ja4h;
use crate::models::{FingerprintResponse, HealthResponse, StatsResponse};

/// Application state shared by the middleware and all handlers.
///
/// The cache sits behind a reader-writer lock: lookups take the shared
/// side, writes (with their piggybacked cleanup) take the exclusive side.
/// Each state value owns its cache, so independent router instances never
/// share entries.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe fingerprint cache
    pub cache: Arc<RwLock<FingerprintCache>>,
    /// Pluggable fingerprint computation
    pub fingerprinter: Arc<dyn Fingerprinter>,
}

impl AppState {
    /// Creates state around an existing cache and fingerprinter.
    pub fn new(cache: FingerprintCache, fingerprinter: Arc<dyn Fingerprinter>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            fingerprinter,
        }
    }

    /// Creates state with the default JA4H fingerprinter and the
    /// configured cache duration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_ttl(config.cache_duration)
    }

    /// Creates state with the default JA4H fingerprinter and an explicit
    /// TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self::new(FingerprintCache::new(ttl), Arc::new(Ja4hFingerprinter::new()))
    }
}

/// Handler for GET /fingerprint
///
/// Echoes the fingerprint the middleware published for this request.
pub async fn fingerprint_handler(Extension(Ja4h(hash)): Extension<Ja4h>) -> Json<FingerprintResponse> {
    Json(FingerprintResponse::new(hash))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let snapshot = { state.cache.read().await.stats() };
    Json(StatsResponse::from_snapshot(&snapshot))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
