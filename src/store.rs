//! Bounded URL storage shared by the slot list and the FIFO queue.
//!
//! Both widgets keep an ordered, duplicate-free list of URLs that never grows past
//! a capacity. The slot list reads it as `capacity` left-packed slots, the queue
//! consumes it from the front.

use crate::constant::{CAPACITY_OPTIONS, DEFAULT_SLOT_CAPACITY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("The URL store is empty")]
    Empty,

    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    #[error("Capacity options must be a non-empty list of positive sizes")]
    InvalidOptions,
}

/// Result of offering a URL to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
    Full,
    Rejected,
}

/// Whether a bulk load keeps repeated lines from the file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    #[default]
    KeepDuplicates,
    Deduplicate,
}

/// The discrete capacities offered by the combo box and the slider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityOptions {
    sizes: Vec<usize>,
}

impl CapacityOptions {
    pub fn new(sizes: &[usize]) -> Result<Self, StoreError> {
        if sizes.is_empty() || sizes.contains(&0) {
            return Err(StoreError::InvalidOptions);
        }
        let mut sizes = sizes.to_vec();
        sizes.sort_unstable();
        sizes.dedup();
        Ok(Self { sizes })
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn largest(&self) -> usize {
        // Non-empty by construction
        self.sizes.last().copied().unwrap_or(1)
    }

    /// Smallest option that holds `required` entries, or the largest option
    pub fn fit(&self, required: usize) -> usize {
        self.sizes
            .iter()
            .copied()
            .find(|&size| size >= required)
            .unwrap_or_else(|| self.largest())
    }

    pub fn position_of(&self, capacity: usize) -> Option<usize> {
        self.sizes.iter().position(|&size| size == capacity)
    }

    pub fn at(&self, position: usize) -> Option<usize> {
        self.sizes.get(position).copied()
    }

    /// Slider position for a capacity that may not be one of the options
    pub fn nearest_position(&self, capacity: usize) -> usize {
        self.sizes
            .iter()
            .position(|&size| size >= capacity)
            .unwrap_or(self.sizes.len().saturating_sub(1))
    }
}

impl Default for CapacityOptions {
    fn default() -> Self {
        Self {
            sizes: CAPACITY_OPTIONS.to_vec(),
        }
    }
}

/// Ordered URL list bounded by a runtime-adjustable capacity
#[derive(Debug, Clone)]
pub struct BoundedUrlStore {
    entries: Vec<String>,
    capacity: usize,
    options: CapacityOptions,
    load_policy: LoadPolicy,
}

impl BoundedUrlStore {
    pub fn new(capacity: usize) -> Result<Self, StoreError> {
        Self::with_options(capacity, CapacityOptions::default())
    }

    pub fn with_options(capacity: usize, options: CapacityOptions) -> Result<Self, StoreError> {
        if capacity == 0 {
            return Err(StoreError::InvalidCapacity(capacity));
        }
        Ok(Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            options,
            load_policy: LoadPolicy::default(),
        })
    }

    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    pub fn load_policy(&self) -> LoadPolicy {
        self.load_policy
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn options(&self) -> &CapacityOptions {
        &self.options
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.iter().any(|entry| entry == url)
    }

    /// Fill ratio in `[0, 1]`
    pub fn fullness(&self) -> f32 {
        (self.entries.len() as f32 / self.capacity as f32).clamp(0.0, 1.0)
    }

    /// Append `url` unless it is blank, already stored, or the store is full
    pub fn add(&mut self, url: impl Into<String>) -> AddOutcome {
        let url = url.into();
        if url.trim().is_empty() {
            return AddOutcome::Rejected;
        }
        if self.contains(&url) {
            return AddOutcome::Duplicate;
        }
        if self.is_full() {
            return AddOutcome::Full;
        }
        self.entries.push(url);
        AddOutcome::Added
    }

    /// Pop the oldest entry
    pub fn remove_front(&mut self) -> Result<String, StoreError> {
        if self.entries.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(self.entries.remove(0))
    }

    /// Clear one slot; later entries move up so slots stay left-packed
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Change the ceiling, dropping the newest entries that no longer fit
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), StoreError> {
        if new_capacity == 0 {
            return Err(StoreError::InvalidCapacity(new_capacity));
        }
        self.capacity = new_capacity;
        self.entries.truncate(new_capacity);
        Ok(())
    }

    /// Replace the contents with `lines`, raising the capacity to the next option
    /// when the lines do not fit.
    ///
    /// Lines are trimmed and blank ones skipped. Whatever still exceeds the final
    /// capacity is dropped from the tail.
    pub fn load_from_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut loaded: Vec<String> = Vec::new();
        for line in lines {
            let url = line.as_ref().trim();
            if url.is_empty() {
                continue;
            }
            if self.load_policy == LoadPolicy::Deduplicate && loaded.iter().any(|u| u == url) {
                continue;
            }
            loaded.push(url.to_string());
        }

        if loaded.len() > self.capacity {
            self.capacity = self.options.fit(loaded.len()).max(self.capacity);
        }
        loaded.truncate(self.capacity);
        self.entries = loaded;
    }

    pub fn serialize_to_lines(&self) -> Vec<String> {
        self.entries.clone()
    }

    /// `capacity` slots: entries first, the rest empty
    pub fn slots(&self) -> Vec<Option<&str>> {
        let mut slots: Vec<Option<&str>> = self.entries.iter().map(|e| Some(e.as_str())).collect();
        slots.resize(self.capacity, None);
        slots
    }
}

impl Default for BoundedUrlStore {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            capacity: DEFAULT_SLOT_CAPACITY,
            options: CapacityOptions::default(),
            load_policy: LoadPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(capacity: usize, urls: &[&str]) -> BoundedUrlStore {
        let mut store = BoundedUrlStore::new(capacity).unwrap();
        for url in urls {
            store.add(*url);
        }
        store
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut store = BoundedUrlStore::new(5).unwrap();
        assert_eq!(store.add("http://a"), AddOutcome::Added);
        assert_eq!(store.add("http://a"), AddOutcome::Duplicate);
        assert_eq!(store.entries(), ["http://a"]);
    }

    #[test]
    fn test_add_respects_capacity() {
        let mut store = BoundedUrlStore::new(2).unwrap();
        for i in 0..10 {
            store.add(format!("https://example.com/{}", i % 4));
            assert!(store.len() <= store.capacity());
        }
        assert_eq!(
            store.entries(),
            ["https://example.com/0", "https://example.com/1"]
        );
        assert!(store.is_full());
        assert_eq!(store.add("https://new.example"), AddOutcome::Full);
    }

    #[test]
    fn test_add_never_duplicates() {
        let mut store = BoundedUrlStore::new(20).unwrap();
        let urls = ["http://a", "http://b", "http://a", "http://c", "http://b"];
        for url in urls.iter().cycle().take(30) {
            store.add(*url);
        }
        let mut sorted = store.serialize_to_lines();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), store.len());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut store = BoundedUrlStore::new(5).unwrap();
        assert_eq!(store.add(""), AddOutcome::Rejected);
        assert_eq!(store.add("   "), AddOutcome::Rejected);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_front() {
        let mut store = store_with(5, &["a", "b", "c"]);
        assert_eq!(store.remove_front().unwrap(), "a");
        assert_eq!(store.entries(), ["b", "c"]);

        let mut empty = BoundedUrlStore::new(5).unwrap();
        assert_eq!(empty.remove_front(), Err(StoreError::Empty));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_at_keeps_slots_packed() {
        let mut store = store_with(5, &["a", "b", "c"]);
        assert_eq!(store.remove_at(1).as_deref(), Some("b"));
        assert_eq!(store.remove_at(7), None);
        assert_eq!(
            store.slots(),
            vec![Some("a"), Some("c"), None, None, None]
        );
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut store = store_with(5, &["a", "b"]);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 5);
    }

    #[test]
    fn test_resize_truncates_tail() {
        let mut store = store_with(10, &["a", "b", "c", "d", "e", "f", "g"]);
        store.resize(5).unwrap();
        assert_eq!(store.entries(), ["a", "b", "c", "d", "e"]);
        assert_eq!(store.capacity(), 5);

        store.resize(20).unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.capacity(), 20);
    }

    #[test]
    fn test_resize_idempotent() {
        let mut once = store_with(10, &["a", "b", "c", "d"]);
        let mut twice = once.clone();
        once.resize(2).unwrap();
        twice.resize(2).unwrap();
        twice.resize(2).unwrap();
        assert_eq!(once.entries(), twice.entries());
        assert_eq!(once.capacity(), twice.capacity());
    }

    #[test]
    fn test_resize_rejects_zero() {
        let mut store = store_with(5, &["a"]);
        assert_eq!(store.resize(0), Err(StoreError::InvalidCapacity(0)));
        assert_eq!(store.capacity(), 5);
        assert_eq!(store.entries(), ["a"]);
        assert!(BoundedUrlStore::new(0).is_err());
    }

    #[test]
    fn test_load_round_trip() {
        let mut store = BoundedUrlStore::new(2).unwrap();
        store.load_from_lines(["x", "y"]);
        assert_eq!(store.serialize_to_lines(), vec!["x", "y"]);
        assert_eq!(store.capacity(), 2);
    }

    #[test]
    fn test_load_raises_capacity_to_next_option() {
        let lines: Vec<String> = (0..7).map(|i| format!("http://site/{}", i)).collect();
        let mut store = BoundedUrlStore::new(5).unwrap();
        store.load_from_lines(&lines);
        assert_eq!(store.capacity(), 10);
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn test_load_overflow_keeps_first_entries() {
        let lines: Vec<String> = (0..25).map(|i| format!("http://site/{}", i)).collect();
        let mut store = BoundedUrlStore::new(5).unwrap();
        store.load_from_lines(&lines);
        assert_eq!(store.capacity(), 20);
        assert_eq!(store.len(), 20);
        assert_eq!(store.entries()[0], "http://site/0");
        assert_eq!(store.entries()[19], "http://site/19");
    }

    #[test]
    fn test_load_never_lowers_capacity() {
        let mut store = BoundedUrlStore::new(10).unwrap();
        store.load_from_lines(["a", "b", "c"]);
        assert_eq!(store.capacity(), 10);
        assert_eq!(store.slots().len(), 10);
    }

    #[test]
    fn test_load_trims_and_skips_blank_lines() {
        let mut store = BoundedUrlStore::new(5).unwrap();
        store.load_from_lines(["  http://a  ", "", "   ", "http://b\r"]);
        assert_eq!(store.entries(), ["http://a", "http://b"]);
    }

    #[test]
    fn test_load_policy() {
        let lines = ["http://a", "http://b", "http://a"];

        let mut keep = BoundedUrlStore::new(5).unwrap();
        keep.load_from_lines(lines);
        assert_eq!(keep.len(), 3);

        let mut dedup = BoundedUrlStore::new(5)
            .unwrap()
            .with_load_policy(LoadPolicy::Deduplicate);
        dedup.load_from_lines(lines);
        assert_eq!(dedup.entries(), ["http://a", "http://b"]);
    }

    #[test]
    fn test_load_replaces_previous_contents() {
        let mut store = store_with(5, &["old"]);
        store.load_from_lines(Vec::<String>::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_fullness() {
        let mut store = BoundedUrlStore::new(4).unwrap();
        assert_eq!(store.fullness(), 0.0);
        store.add("a");
        assert_eq!(store.fullness(), 0.25);
        store.add("b");
        store.add("c");
        store.add("d");
        assert_eq!(store.fullness(), 1.0);
    }

    #[test]
    fn test_capacity_options() {
        let options = CapacityOptions::default();
        assert_eq!(options.sizes(), [2, 5, 10, 20]);
        assert_eq!(options.fit(1), 2);
        assert_eq!(options.fit(5), 5);
        assert_eq!(options.fit(7), 10);
        assert_eq!(options.fit(21), 20);
        assert_eq!(options.position_of(10), Some(2));
        assert_eq!(options.position_of(3), None);
        assert_eq!(options.at(1), Some(5));
        assert_eq!(options.at(4), None);
        assert_eq!(options.nearest_position(3), 1);
        assert_eq!(options.nearest_position(100), 3);
    }

    #[test]
    fn test_capacity_options_validation() {
        assert_eq!(CapacityOptions::new(&[]), Err(StoreError::InvalidOptions));
        assert_eq!(CapacityOptions::new(&[0, 5]), Err(StoreError::InvalidOptions));
        let options = CapacityOptions::new(&[10, 3, 10]).unwrap();
        assert_eq!(options.sizes(), [3, 10]);
    }
}
