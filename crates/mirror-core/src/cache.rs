//! Per-brand cache of profile detection results.
//!
//! Replaces the module-level singleton map of the original service with an
//! explicit instance the composing service owns. Expiry is checked on read;
//! there is no background eviction.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::profile::BusinessProfileAnalysis;

/// Clock function injected into the cache so tests control time.
pub type Clock = fn() -> DateTime<Utc>;

#[derive(Debug, Clone)]
struct CachedEntry {
    analysis: BusinessProfileAnalysis,
    cached_at: DateTime<Utc>,
}

/// TTL cache mapping brand id to its last profile analysis.
pub struct ProfileCache {
    entries: HashMap<String, CachedEntry>,
    ttl: Duration,
    clock: Clock,
}

impl ProfileCache {
    /// Default entry lifetime: one hour.
    pub const DEFAULT_TTL_SECS: i64 = 3600;

    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Duration::seconds(Self::DEFAULT_TTL_SECS), Utc::now)
    }

    /// Build a cache with an explicit TTL and clock. Tests pass a fixed
    /// clock to exercise expiry without sleeping.
    #[must_use]
    pub fn with_clock(ttl: Duration, clock: Clock) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            clock,
        }
    }

    /// Look up a non-expired analysis for `brand_id`.
    #[must_use]
    pub fn get(&self, brand_id: &str) -> Option<&BusinessProfileAnalysis> {
        let entry = self.entries.get(brand_id)?;
        let age = (self.clock)() - entry.cached_at;
        if age > self.ttl {
            return None;
        }
        Some(&entry.analysis)
    }

    /// Store an analysis for `brand_id`, stamping it with the current time.
    pub fn insert(&mut self, brand_id: &str, analysis: BusinessProfileAnalysis) {
        let cached_at = (self.clock)();
        self.entries.insert(
            brand_id.to_string(),
            CachedEntry {
                analysis,
                cached_at,
            },
        );
    }

    /// Drop every expired entry. Callers invoke this explicitly; nothing
    /// runs in the background.
    pub fn purge_expired(&mut self) {
        let now = (self.clock)();
        let ttl = self.ttl;
        self.entries.retain(|_, e| now - e.cached_at <= ttl);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProfileCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::profile::{
        BusinessProfileType, CustomerType, OfferingType, Scope,
    };

    fn sample_analysis() -> BusinessProfileAnalysis {
        BusinessProfileAnalysis {
            profile_type: BusinessProfileType::NationalSaasB2b,
            confidence: 0.85,
            scope: Scope::National,
            customer_type: CustomerType::B2b,
            offering_type: OfferingType::Saas,
            signals: vec!["saas indicators: 3 matches".to_string()],
        }
    }

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn later_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 14, 0, 0).unwrap()
    }

    #[test]
    fn get_returns_fresh_entry() {
        let mut cache = ProfileCache::with_clock(Duration::hours(1), fixed_clock);
        cache.insert("brand-1", sample_analysis());
        let hit = cache.get("brand-1").unwrap();
        assert_eq!(hit.profile_type, BusinessProfileType::NationalSaasB2b);
    }

    #[test]
    fn get_misses_unknown_brand() {
        let cache = ProfileCache::with_clock(Duration::hours(1), fixed_clock);
        assert!(cache.get("nope").is_none());
    }

    #[test]
    fn expired_entry_is_not_returned() {
        // Insert at 12:00 with the fixed clock, then read through a cache
        // whose clock reports 14:00 — past the 1h TTL.
        let mut cache = ProfileCache::with_clock(Duration::hours(1), fixed_clock);
        cache.insert("brand-1", sample_analysis());
        cache.clock = later_clock;
        assert!(cache.get("brand-1").is_none());
    }

    #[test]
    fn purge_drops_expired_entries() {
        let mut cache = ProfileCache::with_clock(Duration::hours(1), fixed_clock);
        cache.insert("brand-1", sample_analysis());
        cache.clock = later_clock;
        cache.purge_expired();
        assert!(cache.is_empty());
    }
}
