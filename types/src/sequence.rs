//! Forward-only reveal sequencing for the experience section.
//!
//! Each stage is gated on the completion of the one before it:
//!
//! ```text
//! Dormant --TitleInView--> Title --TitleAnimationDone--> Typing
//!         --TypingDone--> Buttons --select(tab)--> Description
//! ```
//!
//! Events that do not match the current stage are ignored. There is no reset.

/// Current stage of a [`RevealSequencer`]. Ordered: later stages compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum RevealStage {
    /// Nothing shown; waiting for the title to scroll into view.
    #[default]
    Dormant,
    /// Title entrance animation is playing.
    Title,
    /// Tagline is being typed out.
    Typing,
    /// Work/Education buttons are visible; waiting for a choice.
    Buttons,
    /// A history panel has been chosen at least once.
    Description,
}

/// Completion signals that drive a [`RevealSequencer`] forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceEvent {
    TitleInView,
    TitleAnimationDone,
    TypingDone,
}

/// Snapshot of the one-way flags derived from the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequenceFlags {
    pub start_typing: bool,
    pub buttons_visible: bool,
    pub description_visible: bool,
}

/// Which history block a button selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceTab {
    Work,
    Education,
}

impl ExperienceTab {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ExperienceTab::Work => "Work History",
            ExperienceTab::Education => "Education History",
        }
    }
}

/// The block currently displayed under the experience buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperiencePanel {
    #[default]
    Empty,
    WorkHistory,
    EducationHistory,
}

impl ExperiencePanel {
    #[must_use]
    pub const fn tab(self) -> Option<ExperienceTab> {
        match self {
            ExperiencePanel::Empty => None,
            ExperiencePanel::WorkHistory => Some(ExperienceTab::Work),
            ExperiencePanel::EducationHistory => Some(ExperienceTab::Education),
        }
    }
}

impl From<ExperienceTab> for ExperiencePanel {
    fn from(tab: ExperienceTab) -> Self {
        match tab {
            ExperienceTab::Work => ExperiencePanel::WorkHistory,
            ExperienceTab::Education => ExperiencePanel::EducationHistory,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevealSequencer {
    stage: RevealStage,
    panel: ExperiencePanel,
}

impl RevealSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stage(&self) -> RevealStage {
        self.stage
    }

    #[must_use]
    pub fn panel(&self) -> ExperiencePanel {
        self.panel
    }

    #[must_use]
    pub fn flags(&self) -> SequenceFlags {
        SequenceFlags {
            start_typing: self.stage >= RevealStage::Typing,
            buttons_visible: self.stage >= RevealStage::Buttons,
            description_visible: self.stage >= RevealStage::Description,
        }
    }

    /// Apply a completion signal. Returns the new stage if it advanced.
    pub fn handle(&mut self, event: SequenceEvent) -> Option<RevealStage> {
        let next = match (self.stage, event) {
            (RevealStage::Dormant, SequenceEvent::TitleInView) => RevealStage::Title,
            (RevealStage::Title, SequenceEvent::TitleAnimationDone) => RevealStage::Typing,
            (RevealStage::Typing, SequenceEvent::TypingDone) => RevealStage::Buttons,
            _ => return None,
        };
        self.stage = next;
        Some(next)
    }

    /// Show the history block for `tab`, replacing whatever was shown.
    ///
    /// Ignored (returns `false`) until the buttons are visible.
    pub fn select(&mut self, tab: ExperienceTab) -> bool {
        if self.stage < RevealStage::Buttons {
            return false;
        }
        self.stage = RevealStage::Description;
        self.panel = tab.into();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{ExperiencePanel, ExperienceTab, RevealSequencer, RevealStage, SequenceEvent};

    fn at_buttons() -> RevealSequencer {
        let mut seq = RevealSequencer::new();
        seq.handle(SequenceEvent::TitleInView);
        seq.handle(SequenceEvent::TitleAnimationDone);
        seq.handle(SequenceEvent::TypingDone);
        seq
    }

    #[test]
    fn advances_in_order() {
        let mut seq = RevealSequencer::new();
        assert_eq!(seq.handle(SequenceEvent::TitleInView), Some(RevealStage::Title));
        assert_eq!(
            seq.handle(SequenceEvent::TitleAnimationDone),
            Some(RevealStage::Typing)
        );
        assert!(seq.flags().start_typing);
        assert!(!seq.flags().buttons_visible);
        assert_eq!(seq.handle(SequenceEvent::TypingDone), Some(RevealStage::Buttons));
        assert!(seq.flags().buttons_visible);
        assert!(!seq.flags().description_visible);
    }

    #[test]
    fn out_of_order_events_are_ignored() {
        let mut seq = RevealSequencer::new();
        assert_eq!(seq.handle(SequenceEvent::TypingDone), None);
        assert_eq!(seq.handle(SequenceEvent::TitleAnimationDone), None);
        assert_eq!(seq.stage(), RevealStage::Dormant);
        assert_eq!(seq.flags(), Default::default());
    }

    #[test]
    fn stages_are_never_reentered() {
        let mut seq = at_buttons();
        assert_eq!(seq.handle(SequenceEvent::TitleInView), None);
        assert_eq!(seq.handle(SequenceEvent::TypingDone), None);
        assert_eq!(seq.stage(), RevealStage::Buttons);
    }

    #[test]
    fn select_before_buttons_is_rejected() {
        let mut seq = RevealSequencer::new();
        seq.handle(SequenceEvent::TitleInView);
        assert!(!seq.select(ExperienceTab::Work));
        assert_eq!(seq.panel(), ExperiencePanel::Empty);
    }

    #[test]
    fn selection_replaces_panel() {
        let mut seq = at_buttons();
        assert!(seq.select(ExperienceTab::Education));
        assert_eq!(seq.panel(), ExperiencePanel::EducationHistory);
        assert!(seq.select(ExperienceTab::Work));
        assert_eq!(seq.panel(), ExperiencePanel::WorkHistory);
        assert_eq!(seq.panel().tab(), Some(ExperienceTab::Work));
        assert!(seq.flags().description_visible);
    }
}
