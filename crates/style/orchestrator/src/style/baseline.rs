//! Reference-counted cache of baseline styles.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::style_model::ComputedStyle;

#[derive(Debug)]
struct BaselineEntry {
    style: Arc<ComputedStyle>,
    /// Elements currently holding this baseline.
    users: usize,
}

/// Baselines keyed by [`super::cascade::baseline_key`].
///
/// Entries whose user count drops to zero stay cached until the cache grows past its
/// capacity or [`BaselineCache::purge_unused`] is called.
#[derive(Debug)]
pub struct BaselineCache {
    entries: HashMap<u64, BaselineEntry>,
    capacity: usize,
}

impl BaselineCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
        }
    }

    /// Take a reference on the baseline for `key`, building it on a miss.
    pub fn acquire(&mut self, key: u64, build: impl FnOnce() -> ComputedStyle) -> Arc<ComputedStyle> {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.users += 1;
            return Arc::clone(&entry.style);
        }
        if self.entries.len() >= self.capacity {
            self.purge_unused();
        }
        let style = Arc::new(build());
        self.entries.insert(
            key,
            BaselineEntry {
                style: Arc::clone(&style),
                users: 1,
            },
        );
        style
    }

    /// Drop a reference taken by [`BaselineCache::acquire`].
    pub fn release(&mut self, key: u64) {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.users = entry.users.saturating_sub(1);
        }
    }

    pub fn get(&self, key: u64) -> Option<&Arc<ComputedStyle>> {
        self.entries.get(&key).map(|entry| &entry.style)
    }

    pub fn users(&self, key: u64) -> usize {
        self.entries.get(&key).map_or(0, |entry| entry.users)
    }

    /// Remove every baseline nobody holds. Returns how many were removed.
    pub fn purge_unused(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.users > 0);
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!("purged {removed} unused baseline styles");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::StyleOptions;

    fn initial() -> ComputedStyle {
        ComputedStyle::initial(&StyleOptions::default())
    }

    #[test]
    fn hits_share_one_allocation() {
        let mut cache = BaselineCache::new(4);
        let mut builds = 0;
        let first = cache.acquire(7, || {
            builds += 1;
            initial()
        });
        let second = cache.acquire(7, || {
            builds += 1;
            initial()
        });
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(builds, 1);
        assert_eq!(cache.users(7), 2);
    }

    #[test]
    fn released_entries_survive_until_purged() {
        let mut cache = BaselineCache::new(4);
        cache.acquire(1, initial);
        cache.release(1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.purge_unused(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn full_cache_purges_before_inserting() {
        let mut cache = BaselineCache::new(1);
        cache.acquire(1, initial);
        cache.release(1);
        cache.acquire(2, initial);
        assert!(cache.get(1).is_none());
        assert!(cache.get(2).is_some());
    }
}
