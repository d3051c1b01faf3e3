//! Cache Entry Module
//!
//! Defines the structure for individual fingerprint cache entries.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Fingerprint Entry ==
/// A single cached fingerprint with its creation timestamp.
#[derive(Debug, Clone)]
pub struct FingerprintEntry {
    /// The cached fingerprint value
    pub value: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl FingerprintEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: String) -> Self {
        Self {
            value,
            created_at: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Returns the entry's age in milliseconds.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is valid while its age is less than or
    /// equal to the TTL, and expired only once the age strictly exceeds it.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        // TTLs beyond u64 milliseconds clamp rather than wrap
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        self.age_ms() > ttl_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = FingerprintEntry::new("ge11cn060000_9ed1ff1f7b03".to_string());

        assert_eq!(entry.value, "ge11cn060000_9ed1ff1f7b03");
        assert!(entry.age_ms() < 1000);
        assert!(!entry.is_expired(Duration::from_secs(30)));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = FingerprintEntry::new("hash".to_string());

        assert!(!entry.is_expired(Duration::from_millis(50)));

        sleep(Duration::from_millis(80));

        assert!(entry.is_expired(Duration::from_millis(50)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // Entry created exactly `ttl` milliseconds ago
        let now = current_timestamp_ms();
        let entry = FingerprintEntry {
            value: "hash".to_string(),
            created_at: now - 100,
        };

        // Age <= TTL is still valid; only age > TTL expires
        assert!(!entry.is_expired(Duration::from_millis(5000)));
        assert!(entry.is_expired(Duration::from_millis(50)));
    }

    #[test]
    fn test_huge_ttl_never_reads_as_expired() {
        // A TTL whose millisecond count exceeds u64 must clamp, not wrap
        let entry = FingerprintEntry {
            value: "hash".to_string(),
            created_at: 0,
        };

        assert!(!entry.is_expired(Duration::MAX));
        assert!(!entry.is_expired(Duration::from_secs(u64::MAX)));
    }

    #[test]
    fn test_age_saturates_on_clock_skew() {
        // created_at in the future must not underflow
        let entry = FingerprintEntry {
            value: "hash".to_string(),
            created_at: current_timestamp_ms() + 10_000,
        };

        assert_eq!(entry.age_ms(), 0);
        assert!(!entry.is_expired(Duration::from_secs(1)));
    }
}
