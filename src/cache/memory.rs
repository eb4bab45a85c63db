//! In-memory TTL cache

use super::clock::{Clock, SystemClock};
use crate::{metrics, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Default TTL for aggregates: 6 hours
pub const DEFAULT_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// Aggregate kinds cached per username
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKind {
    Languages,
    Stats,
}

impl CacheKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKind::Languages => "languages",
            CacheKind::Stats => "stats",
        }
    }
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cache key for one aggregate of one user (`<username>:<kind>`)
pub fn cache_key(username: &str, kind: CacheKind) -> String {
    format!("{}:{}", username, kind)
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Key/value cache with a single TTL for every entry
///
/// Values are stored serialized and replaced whole on write. Expired entries
/// are dropped lazily when read, or in bulk by [`TtlCache::purge_expired`].
pub struct TtlCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TtlCache {
    /// Create a cache on the system clock
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create a cache on a custom clock
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up a live entry
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let now = self.clock.now();

        let expired = {
            let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
            match entries.get(key) {
                Some(entry) if !entry.is_expired(now) => {
                    metrics::record_cache_hit();
                    tracing::debug!(key = %key, "cache hit");
                    return Some(entry.value.clone());
                }
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
            // Re-check: a writer may have refreshed the key in between
            if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
                entries.remove(key);
                tracing::debug!(key = %key, "cache entry expired");
            }
        }

        metrics::record_cache_miss();
        tracing::debug!(key = %key, "cache miss");
        None
    }

    /// Look up and deserialize a live entry
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Store a value, replacing any entry under the same key
    pub fn set(&self, key: impl Into<String>, value: serde_json::Value) {
        let delta = chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::MAX);
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(delta)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.into(), CacheEntry { value, expires_at });
    }

    /// Serialize and store a value
    pub fn set_as<T: Serialize>(&self, key: impl Into<String>, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.set(key, value);
        Ok(())
    }

    /// Remove an entry, returning whether one was present
    pub fn remove(&self, key: &str) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key).is_some()
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    /// Number of stored entries, expired or not
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
