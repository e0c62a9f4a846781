//! The experience section: title, typed intro, buttons, history panel.
//!
//! Completion of each animation is what advances the [`RevealSequencer`];
//! nothing here is driven by wall-clock delays.

use std::time::Duration;

use folio_types::ui::{RevealEffect, Typewriter};
use folio_types::{
    Entrance, ExperiencePanel, ExperienceTab, RevealSequencer, RevealStage, SequenceEvent,
    SequenceFlags,
};

#[derive(Debug, Clone)]
pub struct ExperienceSection {
    sequencer: RevealSequencer,
    intro: String,
    title: Option<RevealEffect>,
    typewriter: Option<Typewriter>,
    buttons: Option<RevealEffect>,
    panel: Option<RevealEffect>,
    reduced_motion: bool,
}

impl ExperienceSection {
    #[must_use]
    pub fn new(intro: impl Into<String>, reduced_motion: bool) -> Self {
        Self {
            sequencer: RevealSequencer::new(),
            intro: intro.into(),
            title: None,
            typewriter: None,
            buttons: None,
            panel: None,
            reduced_motion,
        }
    }

    fn effect(&self, entrance: Entrance) -> RevealEffect {
        if self.reduced_motion {
            RevealEffect::settled(entrance)
        } else {
            RevealEffect::new(entrance)
        }
    }

    /// The section title crossed its visibility threshold.
    pub fn title_in_view(&mut self) {
        if self.sequencer.handle(SequenceEvent::TitleInView).is_some() {
            tracing::debug!("Experience title revealed");
            self.title = Some(self.effect(Entrance::FloatUp));
            // A settled title moves straight on to typing; the buttons still
            // wait for the next advance.
            self.advance(Duration::ZERO);
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        if let Some(title) = self.title.as_mut() {
            title.advance(delta);
        }
        if self.sequencer.stage() == RevealStage::Title
            && self.title.as_ref().is_some_and(RevealEffect::is_finished)
            && self
                .sequencer
                .handle(SequenceEvent::TitleAnimationDone)
                .is_some()
        {
            let mut typewriter =
                Typewriter::new(self.intro.clone(), Typewriter::PER_CHAR, Duration::ZERO);
            if self.reduced_motion {
                typewriter.finish();
            }
            self.typewriter = Some(typewriter);
            // Typing starts on the next frame.
            return;
        }

        if let Some(typewriter) = self.typewriter.as_mut() {
            typewriter.advance(delta);
        }
        if self.sequencer.stage() == RevealStage::Typing
            && self.typewriter.as_ref().is_some_and(Typewriter::is_finished)
            && self.sequencer.handle(SequenceEvent::TypingDone).is_some()
        {
            tracing::debug!("Experience buttons revealed");
            self.buttons = Some(self.effect(Entrance::FloatUp));
            return;
        }

        if let Some(buttons) = self.buttons.as_mut() {
            buttons.advance(delta);
        }
        if let Some(panel) = self.panel.as_mut() {
            panel.advance(delta);
        }
    }

    /// Show `tab`'s history, replacing the current panel.
    ///
    /// Returns `false` while the buttons are not yet visible.
    pub fn select(&mut self, tab: ExperienceTab) -> bool {
        let previous = self.sequencer.panel();
        if !self.sequencer.select(tab) {
            return false;
        }
        if previous != self.sequencer.panel() {
            self.panel = Some(self.effect(Entrance::FloatUp));
        }
        true
    }

    #[must_use]
    pub fn stage(&self) -> RevealStage {
        self.sequencer.stage()
    }

    #[must_use]
    pub fn flags(&self) -> SequenceFlags {
        self.sequencer.flags()
    }

    #[must_use]
    pub fn panel(&self) -> ExperiencePanel {
        self.sequencer.panel()
    }

    #[must_use]
    pub fn title(&self) -> Option<&RevealEffect> {
        self.title.as_ref()
    }

    #[must_use]
    pub fn typewriter(&self) -> Option<&Typewriter> {
        self.typewriter.as_ref()
    }

    #[must_use]
    pub fn buttons(&self) -> Option<&RevealEffect> {
        self.buttons.as_ref()
    }

    #[must_use]
    pub fn panel_effect(&self) -> Option<&RevealEffect> {
        self.panel.as_ref()
    }
}
