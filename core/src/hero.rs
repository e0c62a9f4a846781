//! Startup entrances for the header and "about me" block.
//!
//! These are time-based, not observer-gated: the hero is on screen at launch.

use std::time::Duration;

use folio_types::Entrance;
use folio_types::ui::{RevealEffect, Typewriter};

const HEADLINE_DELAY: Duration = Duration::from_secs(1);
const PORTRAIT_DELAY: Duration = Duration::from_secs(1);
const TAGLINE_DELAY: Duration = Duration::from_secs(2);
const BUTTON_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct HeroTimeline {
    name: RevealEffect,
    headline: RevealEffect,
    portrait: RevealEffect,
    tagline: Typewriter,
    button: RevealEffect,
}

impl HeroTimeline {
    #[must_use]
    pub fn new(tagline: &str, reduced_motion: bool) -> Self {
        if reduced_motion {
            let mut tagline = Typewriter::new(tagline, Duration::ZERO, Duration::ZERO);
            tagline.finish();
            return Self {
                name: RevealEffect::settled(Entrance::FloatUp),
                headline: RevealEffect::settled(Entrance::FloatUp),
                portrait: RevealEffect::settled(Entrance::FromRight),
                tagline,
                button: RevealEffect::settled(Entrance::FloatUp),
            };
        }

        Self {
            name: RevealEffect::new(Entrance::FloatUp),
            headline: RevealEffect::delayed(Entrance::FloatUp, HEADLINE_DELAY),
            portrait: RevealEffect::delayed(Entrance::FromRight, PORTRAIT_DELAY),
            tagline: Typewriter::new(tagline, Typewriter::PER_CHAR, TAGLINE_DELAY),
            button: RevealEffect::delayed(Entrance::FloatUp, BUTTON_DELAY),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.name.advance(delta);
        self.headline.advance(delta);
        self.portrait.advance(delta);
        self.tagline.advance(delta);
        self.button.advance(delta);
    }

    #[must_use]
    pub fn name(&self) -> &RevealEffect {
        &self.name
    }

    #[must_use]
    pub fn headline(&self) -> &RevealEffect {
        &self.headline
    }

    #[must_use]
    pub fn portrait(&self) -> &RevealEffect {
        &self.portrait
    }

    #[must_use]
    pub fn tagline(&self) -> &Typewriter {
        &self.tagline
    }

    #[must_use]
    pub fn button(&self) -> &RevealEffect {
        &self.button
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.name.is_finished()
            && self.headline.is_finished()
            && self.portrait.is_finished()
            && self.tagline.is_finished()
            && self.button.is_finished()
    }
}
