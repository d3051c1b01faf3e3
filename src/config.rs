//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. Invalid values fall back silently rather than failing
/// startup; the cache is a side channel and must never block serving.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long a cached fingerprint stays valid
    pub cache_duration: Duration,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DURATION` - Duration literal such as `30s`, `500ms`, `5m`, `1h`
    ///   (default: 30s)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            cache_duration: env::var("CACHE_DURATION")
                .ok()
                .and_then(|v| parse_duration(&v))
                .unwrap_or(DEFAULT_TTL),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_duration: DEFAULT_TTL,
            server_port: 3000,
        }
    }
}

// == Duration Parsing ==
/// Parses a duration literal with an `ms`, `s`, `m`, or `h` suffix.
/// A bare number is read as seconds. Returns None for anything else.
pub fn parse_duration(literal: &str) -> Option<Duration> {
    let literal = literal.trim();

    let (number, unit) = match literal.find(|c: char| !c.is_ascii_digit()) {
        Some(split) => literal.split_at(split),
        None => (literal, "s"),
    };
    let number: u64 = number.parse().ok()?;

    // Overflowing literals are invalid, not huge: they fall back too
    match unit {
        "ms" => Some(Duration::from_millis(number)),
        "s" => Some(Duration::from_secs(number)),
        "m" => number.checked_mul(60).map(Duration::from_secs),
        "h" => number.checked_mul(3600).map(Duration::from_secs),
        _ => None,
    }
}
