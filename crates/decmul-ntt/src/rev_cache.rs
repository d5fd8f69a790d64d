//! Process-wide cache for bit-reversal tables.
//!
//! Transform lengths repeat across multiplications, so the permutation
//! tables are cached keyed by length. The cache is an optimization only;
//! results never depend on it.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::bitrev;

/// Bounded cache of bit-reversal tables keyed by transform length.
pub struct RevTableCache {
    tables: Mutex<HashMap<usize, Arc<[u32]>>>,
    max_entries: usize,
}

impl RevTableCache {
    /// Create a cache holding at most `max_entries` tables.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            tables: Mutex::new(HashMap::new()),
            max_entries,
        }
    }

    /// Fetch the table for length `n`, building and caching it on a miss.
    pub fn table_for(&self, n: usize) -> Arc<[u32]> {
        if let Some(table) = self.tables.lock().get(&n) {
            return Arc::clone(table);
        }

        let table: Arc<[u32]> = bitrev::build_table(n).into();
        let mut tables = self.tables.lock();
        if tables.len() >= self.max_entries {
            // Simple eviction: clear all (LRU would be more sophisticated)
            tables.clear();
        }
        tables.insert(n, Arc::clone(&table));
        table
    }

    /// Get the number of cached tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.lock().len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.lock().is_empty()
    }

    /// Clear the cache.
    pub fn clear(&self) {
        self.tables.lock().clear();
    }
}

impl Default for RevTableCache {
    fn default() -> Self {
        Self::new(32)
    }
}

/// Shared process-wide cache instance.
pub fn shared() -> &'static RevTableCache {
    static CACHE: OnceLock<RevTableCache> = OnceLock::new();
    CACHE.get_or_init(RevTableCache::default)
}
