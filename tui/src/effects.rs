//! Entrance effects: offset and fade applied while compositing a block.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use folio_types::Entrance;
use folio_types::ui::{AnimPhase, RevealEffect, Rgb};

/// Rows a float-up entrance starts below its resting place.
const FLOAT_ROWS: f32 = 3.0;
/// Columns a slide-in entrance starts away from its resting place.
const SLIDE_COLS: f32 = 12.0;

/// Where and how strongly a block is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub dx: i32,
    pub dy: i32,
    /// 0.0 is invisible, 1.0 is fully drawn.
    pub opacity: f32,
}

impl Motion {
    pub const HIDDEN: Motion = Motion {
        dx: 0,
        dy: 0,
        opacity: 0.0,
    };

    pub const RESTING: Motion = Motion {
        dx: 0,
        dy: 0,
        opacity: 1.0,
    };

    #[must_use]
    pub fn is_hidden(self) -> bool {
        self.opacity <= 0.0
    }
}

/// Motion for an entrance; `None` means the element has not been seen yet.
#[must_use]
pub fn entrance_motion(effect: Option<&RevealEffect>) -> Motion {
    let Some(effect) = effect else {
        return Motion::HIDDEN;
    };
    match effect.phase() {
        AnimPhase::Pending => Motion::HIDDEN,
        AnimPhase::Completed => Motion::RESTING,
        AnimPhase::Running { progress } => {
            let t = ease_out_cubic(progress);
            let remaining = 1.0 - t;
            let (dx, dy) = match effect.entrance() {
                Entrance::FloatUp => (0.0, remaining * FLOAT_ROWS),
                Entrance::FromRight => (remaining * SLIDE_COLS, 0.0),
                Entrance::FromLeft => (-remaining * SLIDE_COLS, 0.0),
            };
            Motion {
                dx: dx.round() as i32,
                dy: dy.round() as i32,
                opacity: t,
            }
        }
    }
}

/// Copy `src` into `dst` with its top-left at (`x`, `y`), shifted by `motion`
/// and faded toward `background`. Cells falling outside `clip` are dropped.
pub fn composite(
    src: &Buffer,
    dst: &mut Buffer,
    x: i32,
    y: i32,
    motion: Motion,
    background: Color,
    clip: Rect,
) {
    if motion.is_hidden() {
        return;
    }
    let area = src.area;
    for row in 0..area.height {
        let ty = y + motion.dy + i32::from(row);
        let Ok(ty) = u16::try_from(ty) else {
            continue;
        };
        if ty < clip.top() || ty >= clip.bottom() {
            continue;
        }
        for col in 0..area.width {
            let tx = x + motion.dx + i32::from(col);
            let Ok(tx) = u16::try_from(tx) else {
                continue;
            };
            if tx < clip.left() || tx >= clip.right() {
                continue;
            }
            let Some(cell) = src.cell((area.x + col, area.y + row)) else {
                continue;
            };
            if cell.symbol() == " " && cell.bg == Color::Reset {
                continue;
            }
            let Some(target) = dst.cell_mut((tx, ty)) else {
                continue;
            };
            target.set_symbol(cell.symbol());
            target.modifier = cell.modifier;
            if cell.fg != Color::Reset {
                target.fg = fade(cell.fg, background, motion.opacity);
            }
            if cell.bg != Color::Reset {
                target.bg = fade(cell.bg, background, motion.opacity);
            }
        }
    }
}

/// Blend `color` toward `background`. Named colors cannot blend, so they snap
/// at the halfway point.
#[must_use]
pub fn fade(color: Color, background: Color, opacity: f32) -> Color {
    if opacity >= 1.0 {
        return color;
    }
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mixed = Rgb(br, bg, bb).mix(Rgb(r, g, b), opacity);
            Color::Rgb(mixed.0, mixed.1, mixed.2)
        }
        _ if opacity < 0.5 => background,
        _ => color,
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use folio_types::Entrance;
    use folio_types::ui::RevealEffect;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;

    use super::{Motion, composite, entrance_motion, fade};

    #[test]
    fn unseen_elements_are_hidden() {
        assert!(entrance_motion(None).is_hidden());
    }

    #[test]
    fn delayed_effect_is_hidden_until_it_starts() {
        let effect = RevealEffect::delayed(Entrance::FloatUp, Duration::from_secs(1));
        assert!(entrance_motion(Some(&effect)).is_hidden());
    }

    #[test]
    fn float_up_starts_below_and_settles() {
        let mut effect = RevealEffect::new(Entrance::FloatUp);
        effect.advance(Duration::from_millis(100));
        let early = entrance_motion(Some(&effect));
        assert!(early.dy > 0);
        assert_eq!(early.dx, 0);

        effect.advance(Duration::from_secs(1));
        assert_eq!(entrance_motion(Some(&effect)), Motion::RESTING);
    }

    #[test]
    fn slides_come_from_opposite_sides() {
        let mut right = RevealEffect::new(Entrance::FromRight);
        let mut left = RevealEffect::new(Entrance::FromLeft);
        right.advance(Duration::from_millis(100));
        left.advance(Duration::from_millis(100));
        assert!(entrance_motion(Some(&right)).dx > 0);
        assert!(entrance_motion(Some(&left)).dx < 0);
    }

    #[test]
    fn fade_blends_rgb_and_snaps_named() {
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(fade(Color::Rgb(200, 100, 0), bg, 0.5), Color::Rgb(100, 50, 0));
        assert_eq!(fade(Color::Rgb(200, 100, 0), bg, 1.0), Color::Rgb(200, 100, 0));
        assert_eq!(fade(Color::White, Color::Black, 0.2), Color::Black);
        assert_eq!(fade(Color::White, Color::Black, 0.8), Color::White);
    }

    #[test]
    fn composite_offsets_and_clips() {
        let mut src = Buffer::empty(Rect::new(0, 0, 3, 1));
        src.set_string(0, 0, "abc", ratatui::style::Style::default());
        let clip = Rect::new(0, 0, 4, 2);
        let mut dst = Buffer::empty(clip);
        let motion = Motion {
            dx: 2,
            dy: 1,
            opacity: 1.0,
        };
        composite(&src, &mut dst, 0, 0, motion, Color::Black, clip);

        assert_eq!(dst[(2, 1)].symbol(), "a");
        assert_eq!(dst[(3, 1)].symbol(), "b");
        assert_eq!(dst[(0, 0)].symbol(), " ");
    }

    #[test]
    fn hidden_motion_draws_nothing() {
        let mut src = Buffer::empty(Rect::new(0, 0, 1, 1));
        src.set_string(0, 0, "x", ratatui::style::Style::default());
        let clip = Rect::new(0, 0, 1, 1);
        let mut dst = Buffer::empty(clip);
        composite(&src, &mut dst, 0, 0, Motion::HIDDEN, Color::Black, clip);
        assert_eq!(dst[(0, 0)].symbol(), " ");
    }
}
