//! Entrance effects for page elements.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};
use crate::Entrance;

/// A one-shot entrance: fade plus travel in the direction of its [`Entrance`].
#[derive(Debug, Clone)]
pub struct RevealEffect {
    entrance: Entrance,
    timer: EffectTimer,
}

impl RevealEffect {
    /// Standard entrance length.
    pub const DURATION: Duration = Duration::from_secs(1);

    #[must_use]
    pub fn new(entrance: Entrance) -> Self {
        Self::delayed(entrance, Duration::ZERO)
    }

    #[must_use]
    pub fn delayed(entrance: Entrance, delay: Duration) -> Self {
        Self {
            entrance,
            timer: EffectTimer::new(Self::DURATION, delay),
        }
    }

    /// An effect that is already complete (reduced motion).
    #[must_use]
    pub fn settled(entrance: Entrance) -> Self {
        let mut effect = Self::new(entrance);
        effect.timer.finish();
        effect
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn entrance(&self) -> Entrance {
        self.entrance
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}
