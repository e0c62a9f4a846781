//! Core domain types for Folio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod profile;
mod sequence;
pub mod ui;
mod visibility;

pub use profile::{ContactLink, HistoryEntry, Profile};
pub use sequence::{
    ExperiencePanel, ExperienceTab, RevealSequencer, RevealStage, SequenceEvent, SequenceFlags,
};
pub use visibility::{ElementSpan, Threshold, ThresholdError, Viewport, VisibilitySet};

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Projects
// ============================================================================

/// Opaque, session-stable identity of a project.
///
/// Used as the observation key for the project's card, so two projects
/// must never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A project card's content, as returned by a project source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
}

impl Project {
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            url: url.into(),
        }
    }
}

// ============================================================================
// Entrances
// ============================================================================

/// Direction an element travels while it fades in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entrance {
    /// Rises from slightly below its resting row.
    FloatUp,
    /// Slides in from the right edge.
    FromRight,
    /// Slides in from the left edge.
    FromLeft,
}

impl Entrance {
    /// Entrance for the project card at `index` in fetch order.
    ///
    /// Even indices come from the right, odd indices from the left.
    #[must_use]
    pub const fn for_card(index: usize) -> Self {
        if index % 2 == 0 {
            Entrance::FromRight
        } else {
            Entrance::FromLeft
        }
    }

    /// Whether the resting position hugs the right side of the list.
    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self, Entrance::FromRight)
    }
}
