//! Cache Module
//!
//! Provides the in-memory fingerprint cache with TTL expiry and
//! write-path cleanup.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::FingerprintEntry;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::FingerprintCache;

use std::time::Duration;

// == Public Constants ==
/// TTL applied when no cache duration is configured or the configured
/// value does not parse.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30);
