//! Memoized correction rankings, addressed by word text.

use std::collections::hash_map::Entry;

use ahash::AHashMap;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::types::{CorrectionEntry, Word};

/// Hit/miss counters of a [`CorrectionCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that ranked and stored the word.
    pub misses: u64,
}

/// Cache of ranked corrections keyed by word text.
///
/// Entries live for the whole session; nothing is evicted when the set of
/// flagged words changes.
#[derive(Debug, Clone, Default)]
pub struct CorrectionCache {
    entries: AHashMap<String, CorrectionEntry>,
    stats: CacheStats,
}

impl CorrectionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        CorrectionCache {
            entries: AHashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Return the entry for `word`, ranking it with `compute` on a miss.
    ///
    /// On a hit the stored ranking is kept but the entry's word record is
    /// replaced by `word`, so its offsets are always current. If `compute`
    /// fails nothing is stored and no miss is counted.
    pub fn get_or_try_insert_with<F>(&mut self, word: Word, compute: F) -> Result<&CorrectionEntry>
    where
        F: FnOnce(&Word) -> Result<CorrectionEntry>,
    {
        match self.entries.entry(word.value.clone()) {
            Entry::Occupied(slot) => {
                self.stats.hits += 1;
                trace!("correction cache hit for '{}'", word.value);
                let entry = slot.into_mut();
                entry.word = word;
                Ok(entry)
            }
            Entry::Vacant(slot) => {
                let entry = compute(&word)?;
                self.stats.misses += 1;
                Ok(slot.insert(entry))
            }
        }
    }

    /// Cached entry for a word text.
    pub fn get(&self, word: &str) -> Option<&CorrectionEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
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

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpellRankError;
    use crate::spelling::types::Correction;

    fn ranked(word: &Word) -> Result<CorrectionEntry> {
        Ok(CorrectionEntry {
            word: word.clone(),
            corrections: vec![Correction {
                probability: 0.5,
                candidate: format!("{}s", word.value),
            }],
        })
    }

    #[test]
    fn test_miss_then_hit_refreshes_offsets() {
        let mut cache = CorrectionCache::new();

        let entry = cache
            .get_or_try_insert_with(Word::new("cat", 0, 3), ranked)
            .unwrap();
        assert_eq!(entry.word.start, 0);

        let entry = cache
            .get_or_try_insert_with(Word::new("cat", 10, 13), |_| {
                panic!("cached word must not be ranked again")
            })
            .unwrap();
        assert_eq!(entry.word, Word::new("cat", 10, 13));
        assert_eq!(entry.top(1), vec!["cats"]);

        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.get("cat").unwrap().word.start, 10);
    }

    #[test]
    fn test_failed_compute_stores_nothing() {
        let mut cache = CorrectionCache::new();
        let result = cache.get_or_try_insert_with(Word::new("cat", 0, 3), |_| {
            Err(SpellRankError::other("lookup failed"))
        });

        assert!(result.is_err());
        assert!(!cache.contains("cat"));
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());

        cache
            .get_or_try_insert_with(Word::new("cat", 0, 3), ranked)
            .unwrap();
        assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 1 });
    }

    #[test]
    fn test_clear() {
        let mut cache = CorrectionCache::new();
        cache
            .get_or_try_insert_with(Word::new("dog", 0, 3), ranked)
            .unwrap();
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
