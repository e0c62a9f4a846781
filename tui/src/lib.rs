//! TUI rendering for Folio using ratatui.
//!
//! Each frame lays out the whole page, reports element geometry to the
//! [`App`] (which starts any entrances that just became visible), then draws
//! the visible window.

mod document;
mod effects;
mod input;
mod theme;

pub use document::{Document, footer_text};
pub use effects::{Motion, entrance_motion};
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use unicode_width::UnicodeWidthStr;

use folio_core::{App, FeedStatus};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(
        Style::default()
            .bg(palette.bg_dark)
            .fg(palette.text_primary),
    );
    frame.render_widget(bg_block, frame.area());

    let [page_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let document = Document::build(app, &palette, &glyphs, page_area.width);
    app.observe(&document.elements(), document.height(), page_area.height);

    let offset = app.scroll().offset();
    document.render(app, &palette, offset, page_area, frame.buffer_mut());
    draw_scrollbar(frame, app, page_area, &palette);
    draw_status_bar(frame, app, status_area, &palette, &glyphs);
}

fn draw_scrollbar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let scroll = app.scroll();
    if scroll.max_offset() == 0 {
        return;
    }
    let mut state = ScrollbarState::new(scroll.max_offset() as usize)
        .position(scroll.offset() as usize)
        .viewport_content_length(area.height as usize);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .track_style(Style::default().fg(palette.bg_highlight))
        .thumb_style(Style::default().fg(palette.text_muted));
    frame.render_stateful_widget(scrollbar, area, &mut state);
}

pub(crate) fn draw_status_bar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let (status_text, status_style) = if let Some(msg) = app.status_message() {
        (msg.to_string(), Style::default().fg(palette.accent))
    } else {
        match app.feed_status() {
            FeedStatus::Idle | FeedStatus::Loading => {
                let tick = (app.uptime().as_millis() / theme::SPINNER_FRAME_MS) as usize;
                (
                    format!("{} Fetching projects", spinner_frame(tick, app.ui_options())),
                    styles::muted(palette),
                )
            }
            FeedStatus::Failed => (
                match app.feed_failure() {
                    Some(reason) => format!("Projects unavailable: {reason}"),
                    None => "Projects unavailable".to_string(),
                },
                Style::default().fg(palette.error),
            ),
            FeedStatus::Ready => (
                format!("{} projects", app.projects().len()),
                styles::muted(palette),
            ),
        }
    };

    let hints = [
        ("q", "quit"),
        ("j/k", "scroll"),
        ("Enter", "view work"),
        ("w/e", "experience"),
        ("Tab", "focus"),
        ("y", "copy link"),
    ];
    let mut spans = vec![Span::raw(" ")];
    for (index, (key, action)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.separator),
                styles::key_hint(palette),
            ));
        }
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }

    let hints_width: usize = spans.iter().map(|span| span.content.width()).sum();
    let status_width = status_text.width() + 1;
    let available = usize::from(area.width);

    // Drop the hints before the status when space runs out.
    let mut line = if hints_width + status_width + 2 <= available {
        let pad = available - hints_width - status_width;
        spans.push(Span::raw(" ".repeat(pad)));
        Line::from(spans)
    } else {
        Line::from(Span::raw(" "))
    };
    line.spans.push(Span::styled(status_text, status_style));

    frame.render_widget(Paragraph::new(line), area);
}
