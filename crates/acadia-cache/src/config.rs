//! Cache tuning knobs. Defaults suit an interactive console.

use std::time::Duration;

/// Settings shared by the query cache and the record cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a settled query stays fresh before a new access
    /// triggers background revalidation.
    pub stale_after: Duration,
    /// Time-to-live of by-id records in the record cache.
    pub record_ttl: Duration,
    /// Maximum records held by the record cache.
    pub record_capacity: u64,
}

impl CacheConfig {
    /// Default configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a staleness window.
    #[inline]
    #[must_use]
    pub fn with_stale_after(mut self, window: Duration) -> Self {
        self.stale_after = window;
        self
    }

    /// With a record time-to-live.
    #[inline]
    #[must_use]
    pub fn with_record_ttl(mut self, ttl: Duration) -> Self {
        self.record_ttl = ttl;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_after: Duration::from_secs(30),
            record_ttl: Duration::from_secs(60),
            record_capacity: 10_000,
        }
    }
}
