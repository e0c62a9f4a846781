//! Viewport intersection math and the write-once "seen" registry.

use std::collections::HashSet;
use std::hash::Hash;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("visibility threshold must be within 0.0..=1.0 (got {0})")]
pub struct ThresholdError(pub f32);

/// Fraction of an element that must be inside the viewport before it counts as seen.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f32);

impl Threshold {
    /// Headings and project cards.
    pub const MOST: Threshold = Threshold(0.75);
    /// Large section bodies (icon grid, contact block).
    pub const QUARTER: Threshold = Threshold(0.25);
    /// Any overlap at all.
    pub const ANY: Threshold = Threshold(0.0);

    pub fn new(ratio: f32) -> Result<Self, ThresholdError> {
        if (0.0..=1.0).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(ThresholdError(ratio))
        }
    }

    /// Whether `ratio` satisfies this threshold.
    ///
    /// A zero ratio never qualifies, even for [`Threshold::ANY`]: the element
    /// has to intersect the viewport.
    #[must_use]
    pub fn is_met(self, ratio: f32) -> bool {
        ratio > 0.0 && ratio >= self.0
    }
}

/// The visible window of the document, in document rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub top: u32,
    pub height: u16,
}

impl Viewport {
    #[must_use]
    pub const fn new(top: u32, height: u16) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub const fn bottom(self) -> u32 {
        self.top + self.height as u32
    }
}

/// Vertical extent of a laid-out element, in document rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementSpan {
    pub top: u32,
    pub height: u16,
}

impl ElementSpan {
    #[must_use]
    pub const fn new(top: u32, height: u16) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub const fn bottom(self) -> u32 {
        self.top + self.height as u32
    }

    /// Portion of this element inside `viewport`, in `0.0..=1.0`.
    ///
    /// Measured against the smaller of the element and the viewport, so an
    /// element taller than the screen reaches 1.0 once it fills the screen.
    #[must_use]
    pub fn visible_ratio(self, viewport: Viewport) -> f32 {
        if self.height == 0 || viewport.height == 0 {
            return 0.0;
        }

        let start = self.top.max(viewport.top);
        let end = self.bottom().min(viewport.bottom());
        if end <= start {
            return 0.0;
        }

        let overlap = (end - start) as f32;
        let basis = f32::from(self.height.min(viewport.height));
        (overlap / basis).clamp(0.0, 1.0)
    }
}

/// Keys that have been seen at least once.
///
/// Grows monotonically: there is no way to unmark a key.
#[derive(Debug, Clone)]
pub struct VisibilitySet<K> {
    seen: HashSet<K>,
}

impl<K> Default for VisibilitySet<K> {
    fn default() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> VisibilitySet<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` as seen. Returns `true` only on the first call for a key.
    pub fn mark_seen(&mut self, key: K) -> bool {
        self.seen.insert(key)
    }

    #[must_use]
    pub fn is_seen(&self, key: &K) -> bool {
        self.seen.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
