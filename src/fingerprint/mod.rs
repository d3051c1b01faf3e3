//! Fingerprint Module
//!
//! Seam for the per-client fingerprint computation. The cache and
//! middleware only depend on the [`Fingerprinter`] trait; the bundled
//! [`Ja4hFingerprinter`] derives a JA4H-style hash from request
//! properties, but any implementation can be plugged in.

mod ja4h;

pub use ja4h::Ja4hFingerprinter;

use axum::extract::Request;
use thiserror::Error;
use tracing::debug;

// == Public Constants ==
/// Placeholder stored and published when a fingerprint cannot be
/// computed. Downstream consumers never observe an empty string.
pub const SENTINEL: &str = "unknown";

// == Fingerprint Error ==
/// Reasons a fingerprint computation can come up empty-handed.
///
/// None of these surface to the request path: [`resolve_fingerprint`]
/// collapses them into the sentinel value.
#[derive(Error, Debug)]
pub enum FingerprintError {
    /// The request uses an HTTP version the hash format has no code for
    #[error("unsupported HTTP version: {0}")]
    UnsupportedVersion(String),

    /// The request method is empty or non-ASCII
    #[error("malformed request method: {0:?}")]
    MalformedMethod(String),
}

// == Fingerprinter Trait ==
/// Computes a client fingerprint from stable request properties.
///
/// Implementations must be pure with respect to the request: the same
/// method, version, and headers always produce the same output.
pub trait Fingerprinter: Send + Sync {
    fn fingerprint(&self, request: &Request) -> Result<String, FingerprintError>;
}

// == Resolve Fingerprint ==
/// Invokes the fingerprinter and normalizes the result.
///
/// An empty or failed computation yields [`SENTINEL`], never an empty
/// string, so a cached placeholder is distinguishable from "not yet
/// computed".
pub fn resolve_fingerprint(fingerprinter: &dyn Fingerprinter, request: &Request) -> String {
    match fingerprinter.fingerprint(request) {
        Ok(hash) if !hash.is_empty() => hash,
        Ok(_) => SENTINEL.to_string(),
        Err(err) => {
            debug!(error = %err, "fingerprint computation failed, using sentinel");
            SENTINEL.to_string()
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    struct FixedFingerprinter(&'static str);

    impl Fingerprinter for FixedFingerprinter {
        fn fingerprint(&self, _request: &Request) -> Result<String, FingerprintError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingFingerprinter;

    impl Fingerprinter for FailingFingerprinter {
        fn fingerprint(&self, _request: &Request) -> Result<String, FingerprintError> {
            Err(FingerprintError::UnsupportedVersion("HTTP/0.9".to_string()))
        }
    }

    fn test_request() -> Request {
        axum::http::Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_resolve_passes_through_valid_hash() {
        let hash = resolve_fingerprint(&FixedFingerprinter("ge11cn060000_abc"), &test_request());
        assert_eq!(hash, "ge11cn060000_abc");
    }

    #[test]
    fn test_resolve_normalizes_empty_to_sentinel() {
        let hash = resolve_fingerprint(&FixedFingerprinter(""), &test_request());
        assert_eq!(hash, SENTINEL);
    }

    #[test]
    fn test_resolve_normalizes_error_to_sentinel() {
        let hash = resolve_fingerprint(&FailingFingerprinter, &test_request());
        assert_eq!(hash, SENTINEL);
    }

    #[test]
    fn test_sentinel_is_never_empty() {
        assert!(!SENTINEL.is_empty());
    }
}
