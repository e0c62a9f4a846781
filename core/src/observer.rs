//! One-shot viewport observation.
//!
//! Each registered key is reported the first time its visible ratio meets its
//! threshold, and never again.

use std::collections::HashMap;
use std::hash::Hash;

use folio_types::{ElementSpan, Threshold, Viewport, VisibilitySet};

#[derive(Debug, Clone)]
pub struct VisibilityObserver<K> {
    thresholds: HashMap<K, Threshold>,
    seen: VisibilitySet<K>,
}

impl<K> Default for VisibilityObserver<K> {
    fn default() -> Self {
        Self {
            thresholds: HashMap::new(),
            seen: VisibilitySet::default(),
        }
    }
}

impl<K: Copy + Eq + Hash> VisibilityObserver<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`. Re-registering keeps the first threshold.
    pub fn observe(&mut self, key: K, threshold: Threshold) {
        self.thresholds.entry(key).or_insert(threshold);
    }

    #[must_use]
    pub fn is_seen(&self, key: &K) -> bool {
        self.seen.is_seen(key)
    }

    /// Feed the current layout. Returns keys seen for the first time, in input order.
    ///
    /// Keys that were never registered are ignored, as are keys already seen.
    pub fn report<I>(&mut self, geometry: I, viewport: Viewport) -> Vec<K>
    where
        I: IntoIterator<Item = (K, ElementSpan)>,
    {
        let mut newly_seen = Vec::new();
        for (key, span) in geometry {
            let Some(threshold) = self.thresholds.get(&key) else {
                continue;
            };
            if self.seen.is_seen(&key) {
                continue;
            }
            if threshold.is_met(span.visible_ratio(viewport)) && self.seen.mark_seen(key) {
                newly_seen.push(key);
            }
        }
        newly_seen
    }
}
