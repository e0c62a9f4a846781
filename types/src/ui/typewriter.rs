//! Character-by-character text reveal.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

/// Reveals `text` one grapheme per `per_char` after an initial delay.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    boundaries: Vec<usize>,
    per_char: Duration,
    start_delay: Duration,
    elapsed: Duration,
}

impl Typewriter {
    /// Default typing cadence.
    pub const PER_CHAR: Duration = Duration::from_millis(7);

    #[must_use]
    pub fn new(text: impl Into<String>, per_char: Duration, start_delay: Duration) -> Self {
        let text = text.into();
        let boundaries = text
            .grapheme_indices(true)
            .map(|(idx, g)| idx + g.len())
            .collect();
        Self {
            text,
            boundaries,
            per_char,
            start_delay,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Jump to the fully typed state.
    pub fn finish(&mut self) {
        let typing = self.per_char.saturating_mul(self.boundaries.len() as u32);
        self.elapsed = self.start_delay.saturating_add(typing);
    }

    fn typed_count(&self) -> usize {
        let Some(typing) = self.elapsed.checked_sub(self.start_delay) else {
            return 0;
        };
        if self.per_char.is_zero() {
            return self.boundaries.len();
        }
        let count = typing.as_nanos() / self.per_char.as_nanos();
        usize::try_from(count)
            .unwrap_or(usize::MAX)
            .min(self.boundaries.len())
    }

    /// The portion typed so far.
    #[must_use]
    pub fn visible(&self) -> &str {
        match self.typed_count() {
            0 => "",
            n => &self.text[..self.boundaries[n - 1]],
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.start_delay && self.typed_count() == self.boundaries.len()
    }
}
