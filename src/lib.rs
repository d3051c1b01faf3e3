//! JA4H Cache - client fingerprint middleware with TTL caching
//!
//! Computes a JA4H-style fingerprint per client, caches it for a
//! configurable duration, and publishes it to downstream request
//! handlers under the `ja4h` name.

pub mod api;
pub mod cache;
pub mod config;
pub mod fingerprint;
pub mod middleware;
pub mod models;

pub use api::AppState;
pub use cache::FingerprintCache;
pub use config::Config;
pub use fingerprint::{Fingerprinter, Ja4hFingerprinter, SENTINEL};
pub use middleware::{ja4h_middleware, Ja4h};
