//! Color theme and glyphs for the Folio page.
//!
//! A near-black page with a single configurable accent, plus a high-contrast
//! override that sticks to the 16 named terminal colors.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use folio_types::ui::{Rgb, UiOptions};

mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(10, 10, 12);
    pub const BG_PANEL: Color = Color::Rgb(24, 24, 28);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(38, 38, 46);
    pub const BG_BORDER: Color = Color::Rgb(70, 70, 84);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(236, 236, 236);
    pub const TEXT_SECONDARY: Color = Color::Rgb(190, 190, 196);
    pub const TEXT_MUTED: Color = Color::Rgb(120, 120, 128);

    pub const RED: Color = Color::Rgb(255, 93, 98);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard(accent: Rgb) -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            accent: to_color(accent),
            error: colors::RED,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            accent: Color::LightGreen,
            error: Color::LightRed,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard(options.accent)
    }
}

pub(crate) fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// ASCII/Unicode glyphs for bullets, borders and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub link: &'static str,
    pub selected: &'static str,
    pub separator: &'static str,
    pub copyright: &'static str,
    pub border: BorderType,
    pub spinner_frames: &'static [&'static str],
}

/// Milliseconds each spinner frame stays on screen.
pub(crate) const SPINNER_FRAME_MS: u128 = 80;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bullet: "*",
            link: "->",
            selected: ">",
            separator: "|",
            copyright: "(c)",
            border: BorderType::Plain,
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            bullet: "•",
            link: "↗",
            selected: "▸",
            separator: "│",
            copyright: "©",
            border: BorderType::Rounded,
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common page elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}
