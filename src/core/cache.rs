//! # Verse Cache
//!
//! A bounded, recency-ordered verse cache. Each open viewer owns one, so a
//! verse fetched once in a session is not parsed (or, for future remote
//! backends, downloaded) again while it stays warm.
//!
//! Misses are cached too: a verse a backend has no data for (missing or
//! bridged) stores `None`, so repeated lookups of the same hole don't keep
//! hitting the backend.

use std::collections::HashMap;
use std::collections::VecDeque;

use log::debug;

use crate::core::verse_data::VerseData;
use crate::core::verse_key::VerseKey;

/// Maximum cached verses per viewer. Sized empirically: each viewer tends to
/// browse one neighbourhood of the text, and 300 comfortably covers the
/// largest by-book view plus scrollback.
pub const MAX_CACHED_VERSES: usize = 300;

/// Hit/miss counters for the status line and logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Bounded recency-ordered map from verse-key hash to fetched display data.
///
/// The most recently used entries sit at the back of the recency queue; when
/// an insertion pushes the map over capacity, the front (least recently
/// used) entry is dropped.
pub struct VerseCache {
    entries: HashMap<String, Option<VerseData>>,
    recency: VecDeque<String>,
    max_entries: usize,
    stats: CacheStats,
}

impl VerseCache {
    pub fn new() -> Self {
        Self::with_capacity(MAX_CACHED_VERSES)
    }

    /// A cache bounded at `max_entries`. Mainly for tests; production
    /// viewers use [`MAX_CACHED_VERSES`].
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(max_entries.min(MAX_CACHED_VERSES)),
            recency: VecDeque::new(),
            max_entries,
            stats: CacheStats::default(),
        }
    }

    /// Returns the cached data for `key`, fetching on a miss.
    ///
    /// On a hit the entry is promoted to most-recently-used and `fetch` is
    /// not called; the stored value is returned as-is. On a miss the fetch
    /// result is stored (even when `None`), and the least-recently-used
    /// entry is evicted if the cache is now over capacity.
    ///
    /// This operation never fails; fetch problems surface as `None`.
    pub fn get<F>(&mut self, key: &VerseKey, fetch: F) -> Option<VerseData>
    where
        F: FnOnce(&VerseKey) -> Option<VerseData>,
    {
        let hash = key.hash_key();

        if let Some(stored) = self.entries.get(&hash) {
            self.stats.hits += 1;
            let value = stored.clone();
            self.promote(&hash);
            return value;
        }

        self.stats.misses += 1;
        let value = fetch(key);
        self.entries.insert(hash.clone(), value.clone());
        self.recency.push_back(hash);

        if self.entries.len() > self.max_entries
            && let Some(oldest) = self.recency.pop_front()
        {
            debug!("verse cache full ({}), evicting {oldest}", self.max_entries);
            self.entries.remove(&oldest);
        }

        value
    }

    /// Moves `hash` to the most-recently-used position.
    fn promote(&mut self, hash: &str) {
        if let Some(pos) = self.recency.iter().position(|h| h == hash) {
            self.recency.remove(pos);
            self.recency.push_back(hash.to_string());
        }
    }

    /// True if `key` is cached (hit or cached miss); recency is untouched.
    pub fn contains(&self, key: &VerseKey) -> bool {
        self.entries.contains_key(&key.hash_key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for VerseCache {
    fn default() -> Self {
        Self::new()
    }
}
