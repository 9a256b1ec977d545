//! Time-bounded response cache.
//!
//! [`TtlCache`] maps a key to a value and the instant at which that value expires.
//! Time comes from an injected [`Clock`] so expiry can be driven explicitly in tests.
//!
//! Each key owns an async lock. A caller that finds no live value keeps the lock while
//! it fetches, so concurrent callers for the same key wait for that fetch and then read
//! its result instead of issuing their own. Failed fetches leave the slot empty.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// [`Clock`] backed by the system wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

type Slot<V> = Arc<tokio::sync::Mutex<Option<CacheEntry<V>>>>;

/// Key → (value, expiry) cache with per-key request coalescing.
pub struct TtlCache<V> {
    slots: Mutex<HashMap<String, Slot<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V> TtlCache<V>
where
    V: Clone + Send,
{
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// How long a stored value stays valid.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the live value for `key`, if any.
    pub async fn get(&self, key: &str) -> Option<V> {
        let slot = self.existing_slot(key)?;
        let guard = slot.lock().await;
        let now = self.clock.now();
        guard
            .as_ref()
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.value.clone())
    }

    /// Returns the live value for `key`, or runs `fetch` and stores its result.
    ///
    /// Only `Ok` results are stored. While `fetch` runs, other callers for the same
    /// key wait and then observe the stored value.
    ///
    /// # Errors
    ///
    /// Returns whatever error `fetch` produced. The slot stays empty so the next
    /// caller fetches again.
    pub async fn get_or_try_insert_with<F, Fut, E>(&self, key: &str, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let slot = self.slot(key);
        let mut guard = slot.lock().await;

        let now = self.clock.now();
        if let Some(entry) = guard.as_ref() {
            if entry.expires_at > now {
                debug!(key = key, cache_hit = true, "Serving value from cache");
                return Ok(entry.value.clone());
            }
            debug!(key = key, "Cached value expired");
        }

        debug!(key = key, cache_hit = false, "Fetching value");
        let value = fetch().await?;

        let expires_at = self.clock.now() + self.ttl;
        *guard = Some(CacheEntry {
            value: value.clone(),
            expires_at,
        });

        Ok(value)
    }

    /// Number of entries that hold a live value.
    ///
    /// Slots that are currently being filled are not counted.
    pub fn len(&self) -> usize {
        let now = self.clock.now();
        self.snapshot()
            .iter()
            .filter(|slot| match slot.try_lock() {
                Ok(guard) => guard.as_ref().is_some_and(|e| e.expires_at > now),
                Err(_) => false,
            })
            .count()
    }

    /// Returns `true` if no entry holds a live value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every slot that no caller holds and that has no live value.
    pub fn purge_expired(&self) {
        let now = self.clock.now();
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let before = slots.len();
        slots.retain(|_, slot| {
            // Another caller holds this slot and may be about to fill it.
            if Arc::strong_count(slot) > 1 {
                return true;
            }
            match slot.try_lock() {
                Ok(guard) => guard.as_ref().is_some_and(|e| e.expires_at > now),
                // A fetch is in flight.
                Err(_) => true,
            }
        });
        debug!(removed = before - slots.len(), "Purged expired cache entries");
    }

    fn slot(&self, key: &str) -> Slot<V> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.entry(key.to_string()).or_default().clone()
    }

    fn existing_slot(&self, key: &str) -> Option<Slot<V>> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(key).cloned()
    }

    fn snapshot(&self) -> Vec<Slot<V>> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.values().cloned().collect()
    }
}
