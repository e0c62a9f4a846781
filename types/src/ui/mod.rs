//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the core (state ownership) and tui (rendering/input).

mod animation;
mod color;
mod reveal;
mod scroll;
mod typewriter;

pub use animation::AnimPhase;
pub use color::{ColorParseError, DEFAULT_ACCENT, Rgb};
pub use reveal::RevealEffect;
pub use scroll::ScrollState;
pub use typewriter::Typewriter;

/// Presentation preferences loaded from `[app]` and `[theme]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Skip entrance motion: effects complete the moment they start.
    pub reduced_motion: bool,
    pub accent: Rgb,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            ascii_only: false,
            high_contrast: false,
            reduced_motion: false,
            accent: DEFAULT_ACCENT,
        }
    }
}
