//! The page as a vertical stack of blocks.
//!
//! Layout is recomputed every frame from the app state and the terminal
//! width. Every block keeps its final position whether or not it has entered
//! yet, so the geometry reported to the observer is stable while effects play.

use chrono::Datelike;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use folio_core::{App, ElementKey, FeedStatus, Section};
use folio_types::{ElementSpan, Entrance, ExperiencePanel, ExperienceTab, Profile, Project};

use crate::effects::{Motion, composite, entrance_motion};
use crate::theme::{Glyphs, Palette, SPINNER_FRAME_MS, spinner_frame, styles};

const MARGIN_X: u16 = 2;
const SECTION_GAP: u16 = 2;
const CARD_GAP: u16 = 1;
/// Columns cards are inset on the side opposite their entrance.
const CARD_STAGGER: u16 = 2;
const GRID_GUTTER: usize = 3;
const PORTRAIT_WIDTH: u16 = 10;
const PORTRAIT_HEIGHT: u16 = 5;
/// Narrower pages drop the portrait.
const PORTRAIT_MIN_PAGE_WIDTH: u16 = 48;
/// Rows a block can sit below its slot while floating up.
const FLOAT_SLACK: u32 = 4;

/// Which effect drives a block's entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Always,
    HeroName,
    HeroHeadline,
    HeroPortrait,
    HeroButton,
    Element(ElementKey),
    ExperienceTitle,
    ExperienceButtons,
    ExperiencePanel,
}

struct Piece {
    anchor: Anchor,
    observed: Option<ElementKey>,
    top: u32,
    x: u16,
    width: u16,
    height: u16,
    body: Paragraph<'static>,
}

/// One frame's worth of page layout.
pub struct Document {
    pieces: Vec<Piece>,
    height: u32,
}

struct Builder {
    pieces: Vec<Piece>,
    cursor: u32,
    page_width: u16,
}

impl Builder {
    fn new(page_width: u16) -> Self {
        Self {
            pieces: Vec::new(),
            cursor: 0,
            page_width,
        }
    }

    fn content_width(&self) -> u16 {
        self.page_width.saturating_sub(MARGIN_X * 2).max(1)
    }

    fn gap(&mut self, rows: u16) {
        self.cursor += u32::from(rows);
    }

    fn push(&mut self, anchor: Anchor, observed: Option<ElementKey>, body: Paragraph<'static>) {
        let width = self.content_width();
        let height = measure(&body, width);
        self.place(anchor, observed, MARGIN_X, width, height, body);
    }

    /// Push a block whose height is taken from `full`; used for text that is
    /// still being typed so the layout does not jump as it grows.
    fn push_typed(&mut self, anchor: Anchor, full: &Paragraph<'_>, shown: Paragraph<'static>) {
        let width = self.content_width();
        let height = measure(full, width);
        self.place(anchor, None, MARGIN_X, width, height, shown);
    }

    fn place(
        &mut self,
        anchor: Anchor,
        observed: Option<ElementKey>,
        x: u16,
        width: u16,
        height: u16,
        body: Paragraph<'static>,
    ) {
        self.pieces.push(Piece {
            anchor,
            observed,
            top: self.cursor,
            x,
            width,
            height,
            body,
        });
        self.cursor += u32::from(height);
    }
}

fn measure(paragraph: &Paragraph<'_>, width: u16) -> u16 {
    u16::try_from(paragraph.line_count(width)).unwrap_or(u16::MAX)
}

impl Document {
    #[must_use]
    pub fn build(app: &App, palette: &Palette, glyphs: &Glyphs, width: u16) -> Self {
        let mut page = Builder::new(width);
        let profile = app.profile();

        build_hero(&mut page, app, palette);
        page.gap(SECTION_GAP);
        build_tech(&mut page, profile, palette, glyphs);
        page.gap(SECTION_GAP);
        build_projects(&mut page, app, palette, glyphs);
        page.gap(SECTION_GAP);
        build_experience(&mut page, app, palette, glyphs);
        page.gap(SECTION_GAP);
        build_contact(&mut page, profile, palette, glyphs);
        page.gap(SECTION_GAP);

        let year = chrono::Local::now().year();
        let footer = Paragraph::new(Line::from(Span::styled(
            footer_text(&profile.name, year, glyphs),
            styles::muted(palette),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        page.push(Anchor::Always, None, footer);
        page.gap(1);

        Self {
            height: page.cursor,
            pieces: page.pieces,
        }
    }

    /// Total height in rows.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Geometry of every observed element, in page order.
    #[must_use]
    pub fn elements(&self) -> Vec<(ElementKey, ElementSpan)> {
        self.pieces
            .iter()
            .filter_map(|piece| {
                piece
                    .observed
                    .map(|key| (key, ElementSpan::new(piece.top, piece.height)))
            })
            .collect()
    }

    /// Draw the rows `offset..offset + area.height` into `buf` at `area`.
    pub fn render(&self, app: &App, palette: &Palette, offset: u32, area: Rect, buf: &mut Buffer) {
        let window_end = offset + u32::from(area.height);
        for piece in &self.pieces {
            let bottom = piece.top + u32::from(piece.height);
            if bottom + FLOAT_SLACK <= offset || piece.top >= window_end {
                continue;
            }
            let motion = anchor_motion(app, piece.anchor);
            if motion.is_hidden() || piece.width == 0 || piece.height == 0 {
                continue;
            }

            let mut scratch = Buffer::empty(Rect::new(0, 0, piece.width, piece.height));
            Widget::render(&piece.body, scratch.area, &mut scratch);

            let x = i32::from(area.x) + i32::from(piece.x);
            let y = i64::from(area.y) + i64::from(piece.top) - i64::from(offset);
            let Ok(y) = i32::try_from(y) else {
                continue;
            };
            composite(&scratch, buf, x, y, motion, palette.bg_dark, area);
        }
    }
}

fn anchor_motion(app: &App, anchor: Anchor) -> Motion {
    match anchor {
        Anchor::Always => Motion::RESTING,
        Anchor::HeroName => entrance_motion(Some(app.hero().name())),
        Anchor::HeroHeadline => entrance_motion(Some(app.hero().headline())),
        Anchor::HeroPortrait => entrance_motion(Some(app.hero().portrait())),
        Anchor::HeroButton => entrance_motion(Some(app.hero().button())),
        Anchor::Element(key) => entrance_motion(app.reveal(key)),
        Anchor::ExperienceTitle => entrance_motion(app.experience().title()),
        Anchor::ExperienceButtons => entrance_motion(app.experience().buttons()),
        Anchor::ExperiencePanel => entrance_motion(app.experience().panel_effect()),
    }
}

fn heading(text: &str, palette: &Palette) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        styles::heading(palette).add_modifier(Modifier::UNDERLINED),
    )))
    .wrap(Wrap { trim: true })
}

// ============================================================================
// Hero
// ============================================================================

fn build_hero(page: &mut Builder, app: &App, palette: &Palette) {
    let profile = app.profile();
    let hero = app.hero();
    page.gap(1);

    let hero_top = page.cursor;
    let with_portrait = page.page_width >= PORTRAIT_MIN_PAGE_WIDTH;
    let text_width = if with_portrait {
        page.content_width().saturating_sub(PORTRAIT_WIDTH + 2).max(1)
    } else {
        page.content_width()
    };

    if with_portrait {
        let portrait = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(initials(&profile.name), styles::heading(palette))),
            Line::default(),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
        page.pieces.push(Piece {
            anchor: Anchor::HeroPortrait,
            observed: None,
            top: hero_top,
            x: page.page_width - MARGIN_X - PORTRAIT_WIDTH,
            width: PORTRAIT_WIDTH,
            height: PORTRAIT_HEIGHT,
            body: portrait,
        });
    }

    let name = Paragraph::new(Line::from(Span::styled(
        profile.name.clone(),
        styles::heading(palette),
    )))
    .wrap(Wrap { trim: true });
    let height = measure(&name, text_width);
    page.place(Anchor::HeroName, None, MARGIN_X, text_width, height, name);

    let headline = Paragraph::new(Line::from(Span::styled(
        profile.headline.clone(),
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true });
    let height = measure(&headline, text_width);
    page.place(Anchor::HeroHeadline, None, MARGIN_X, text_width, height, headline);

    page.gap(1);
    let tagline = hero.tagline();
    let full = Paragraph::new(tagline.text()).wrap(Wrap { trim: true });
    let shown = Paragraph::new(Span::styled(
        tagline.visible().to_string(),
        styles::body(palette),
    ))
    .wrap(Wrap { trim: true });
    // Measured against the text column so it clears the portrait.
    let height = measure(&full, text_width);
    page.place(Anchor::Always, None, MARGIN_X, text_width, height, shown);

    page.gap(1);
    let button = Paragraph::new(Line::from(vec![
        Span::styled(format!("[ {} ]", profile.view_work_label), styles::button(palette)),
        Span::styled("  Enter", styles::key_hint(palette)),
    ]));
    page.push(Anchor::HeroButton, None, button);

    if with_portrait {
        page.cursor = page.cursor.max(hero_top + u32::from(PORTRAIT_HEIGHT));
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(3)
        .collect()
}

// ============================================================================
// Tech stack
// ============================================================================

fn build_tech(page: &mut Builder, profile: &Profile, palette: &Palette, glyphs: &Glyphs) {
    let title = ElementKey::Section(Section::TechTitle);
    page.push(Anchor::Element(title), Some(title), heading("Tech Stack", palette));
    page.gap(1);

    let grid = ElementKey::Section(Section::TechGrid);
    let lines = tech_grid_lines(&profile.tech_stack, page.content_width(), palette, glyphs);
    page.push(Anchor::Element(grid), Some(grid), Paragraph::new(lines));
}

/// Lay the stack out in equal-width columns, as many as fit.
fn tech_grid_lines(
    items: &[String],
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    if items.is_empty() {
        return Vec::new();
    }
    let bullet_width = glyphs.bullet.width() + 1;
    let cell_width = items
        .iter()
        .map(|item| item.width() + bullet_width)
        .max()
        .unwrap_or(1)
        + GRID_GUTTER;
    let columns = (usize::from(width) / cell_width).max(1);

    items
        .chunks(columns)
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for item in row {
                spans.push(Span::styled(
                    format!("{} ", glyphs.bullet),
                    Style::default().fg(palette.accent),
                ));
                let pad = cell_width.saturating_sub(item.width() + bullet_width);
                spans.push(Span::styled(
                    format!("{item}{}", " ".repeat(pad)),
                    styles::body(palette),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

// ============================================================================
// Projects
// ============================================================================

fn build_projects(page: &mut Builder, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let title = ElementKey::Section(Section::ProjectsTitle);
    page.push(Anchor::Element(title), Some(title), heading("My Projects", palette));
    page.gap(1);

    match app.feed_status() {
        FeedStatus::Idle | FeedStatus::Loading => {
            let tick = (app.uptime().as_millis() / SPINNER_FRAME_MS) as usize;
            let line = Line::from(Span::styled(
                format!("{} Loading projects...", spinner_frame(tick, app.ui_options())),
                styles::muted(palette),
            ));
            page.push(Anchor::Always, None, Paragraph::new(line));
        }
        FeedStatus::Failed => {
            let line = Line::from(Span::styled("Projects unavailable", styles::muted(palette)));
            page.push(Anchor::Always, None, Paragraph::new(line));
        }
        FeedStatus::Ready => {
            let focused = app.focused_index();
            for (index, project) in app.projects().iter().enumerate() {
                if index > 0 {
                    page.gap(CARD_GAP);
                }
                let key = ElementKey::Project(project.id);
                let card = project_card(project, focused == Some(index), palette, glyphs);
                let width = page.content_width().saturating_sub(CARD_STAGGER).max(1);
                let x = if Entrance::for_card(index).is_right() {
                    MARGIN_X + CARD_STAGGER
                } else {
                    MARGIN_X
                };
                let height = measure(&card, width);
                page.place(Anchor::Element(key), Some(key), x, width, height, card);
            }
        }
    }
}

fn project_card(
    project: &Project,
    focused: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Paragraph<'static> {
    let border = if focused {
        palette.accent
    } else {
        palette.bg_border
    };
    let background = if focused {
        palette.bg_highlight
    } else {
        palette.bg_panel
    };
    let marker = if focused {
        format!("{} ", glyphs.selected)
    } else {
        String::new()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(glyphs.border)
        .border_style(Style::default().fg(border))
        .title(Line::from(Span::styled(
            format!(" {marker}{} ", project.name),
            styles::heading(palette),
        )))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(background));

    let description = if project.description.trim().is_empty() {
        Line::from(Span::styled("No description", styles::muted(palette)))
    } else {
        Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(palette.text_primary),
        ))
    };
    let link = Line::from(vec![
        Span::styled(format!("{} ", glyphs.link), Style::default().fg(palette.accent)),
        Span::styled(project.url.clone(), styles::muted(palette)),
    ]);

    Paragraph::new(vec![description, Line::default(), link])
        .block(block)
        .wrap(Wrap { trim: true })
}

// ============================================================================
// Experience
// ============================================================================

fn build_experience(page: &mut Builder, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let experience = app.experience();
    let title = ElementKey::Section(Section::ExperienceTitle);
    page.push(Anchor::ExperienceTitle, Some(title), heading("Experience", palette));
    page.gap(1);

    let intro = Paragraph::new(app.profile().experience_intro.as_str()).wrap(Wrap { trim: true });
    let typed = experience
        .typewriter()
        .map(|typewriter| typewriter.visible().to_string())
        .unwrap_or_default();
    let shown =
        Paragraph::new(Span::styled(typed, styles::body(palette))).wrap(Wrap { trim: true });
    page.push_typed(Anchor::Always, &intro, shown);
    page.gap(1);

    let active = experience.panel().tab();
    let mut buttons = Vec::new();
    for (tab, key) in [(ExperienceTab::Work, "w"), (ExperienceTab::Education, "e")] {
        let style = if active == Some(tab) {
            styles::button_active(palette)
        } else {
            styles::button(palette)
        };
        buttons.push(Span::styled(format!("[ {} ]", tab_button_label(tab)), style));
        buttons.push(Span::styled(format!(" {key}   "), styles::key_hint(palette)));
    }
    page.push(
        Anchor::ExperienceButtons,
        None,
        Paragraph::new(Line::from(buttons)),
    );
    page.gap(1);

    match experience.panel() {
        ExperiencePanel::Empty => {
            let hint = Line::from(Span::styled(
                "Pick Work or Education to see the details.",
                styles::muted(palette),
            ));
            page.push(Anchor::ExperienceButtons, None, Paragraph::new(hint));
        }
        panel => {
            let Some(tab) = panel.tab() else {
                return;
            };
            let lines = history_lines(app.profile(), tab, palette, glyphs);
            page.push(
                Anchor::ExperiencePanel,
                None,
                Paragraph::new(lines).wrap(Wrap { trim: true }),
            );
        }
    }
}

fn tab_button_label(tab: ExperienceTab) -> &'static str {
    match tab {
        ExperienceTab::Work => "Work",
        ExperienceTab::Education => "Education",
    }
}

fn history_lines(
    profile: &Profile,
    tab: ExperienceTab,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        tab.label(),
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    ))];

    let entries = profile.history(tab);
    if entries.is_empty() {
        lines.push(Line::from(Span::styled("Nothing here yet.", styles::muted(palette))));
        return lines;
    }

    for entry in entries {
        lines.push(Line::default());
        let mut header = vec![
            Span::styled(format!("{} ", glyphs.bullet), Style::default().fg(palette.accent)),
            Span::styled(
                entry.title.clone(),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {} ", glyphs.separator), styles::muted(palette)),
            Span::styled(entry.organization.clone(), Style::default().fg(palette.accent)),
        ];
        if !entry.period.is_empty() {
            header.push(Span::styled(format!("  {}", entry.period), styles::muted(palette)));
        }
        lines.push(Line::from(header));
        if !entry.summary.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", entry.summary),
                styles::body(palette),
            )));
        }
    }
    lines
}

// ============================================================================
// Contact and footer
// ============================================================================

fn build_contact(page: &mut Builder, profile: &Profile, palette: &Palette, glyphs: &Glyphs) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Contact",
            styles::heading(palette).add_modifier(Modifier::UNDERLINED),
        )),
        Line::default(),
    ];
    if !profile.contact_blurb.is_empty() {
        lines.push(Line::from(Span::styled(
            profile.contact_blurb.clone(),
            styles::body(palette),
        )));
        lines.push(Line::default());
    }
    for link in &profile.contact {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.bullet), Style::default().fg(palette.accent)),
            Span::styled(
                format!("{}: ", link.label),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(link.target.clone(), styles::muted(palette)),
        ]));
    }

    let key = ElementKey::Section(Section::Contact);
    page.push(
        Anchor::Element(key),
        Some(key),
        Paragraph::new(lines).wrap(Wrap { trim: true }),
    );
}

#[must_use]
pub fn footer_text(name: &str, year: i32, glyphs: &Glyphs) -> String {
    format!("{} {year} {name}'s Portfolio | Built with Rust", glyphs.copyright)
}
