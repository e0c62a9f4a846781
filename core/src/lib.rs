//! Page state machine for Folio.
//!
//! [`App`] owns everything the page shows and how far along each entrance is.
//! The TUI drives it once per frame:
//!
//! ```text
//! tick() -> layout -> observe(layout) -> render
//! ```
//!
//! `observe` is the intersection-observer seam: the TUI reports where each
//! element landed and the app starts the entrances of anything newly seen.

mod element;
mod experience;
mod feed;
mod hero;
mod observer;

pub use element::{ElementKey, Section};
pub use experience::ExperienceSection;
pub use feed::{FeedStatus, ProjectFeed};
pub use hero::HeroTimeline;
pub use observer::VisibilityObserver;

pub use folio_providers::{ProjectSource, SourceError};
pub use folio_types;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use folio_types::ui::{RevealEffect, ScrollState, UiOptions};
use folio_types::{ElementSpan, Entrance, ExperienceTab, Profile, Project};

const STATUS_TTL: Duration = Duration::from_secs(3);

pub struct App {
    profile: Profile,
    options: UiOptions,
    scroll: ScrollState,
    observer: VisibilityObserver<ElementKey>,
    /// Entrances started by the observer, keyed by element.
    reveals: HashMap<ElementKey, RevealEffect>,
    /// Element positions from the most recent layout pass.
    geometry: HashMap<ElementKey, ElementSpan>,
    hero: HeroTimeline,
    experience: ExperienceSection,
    feed: ProjectFeed,
    focused: Option<usize>,
    status_message: Option<(String, Duration)>,
    last_frame: Instant,
    /// Animation time accumulated by `advance`.
    uptime: Duration,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(profile: Profile, options: UiOptions) -> Self {
        let mut observer = VisibilityObserver::new();
        for section in Section::ALL {
            observer.observe(ElementKey::Section(section), section.threshold());
        }

        let hero = HeroTimeline::new(&profile.tagline, options.reduced_motion);
        let experience =
            ExperienceSection::new(profile.experience_intro.clone(), options.reduced_motion);

        Self {
            profile,
            options,
            scroll: ScrollState::default(),
            observer,
            reveals: HashMap::new(),
            geometry: HashMap::new(),
            hero,
            experience,
            feed: ProjectFeed::new(),
            focused: None,
            status_message: None,
            last_frame: Instant::now(),
            uptime: Duration::ZERO,
            should_quit: false,
        }
    }

    /// Kick off the one-time project fetch. Must be called inside a tokio runtime.
    pub fn start_fetch<S: ProjectSource>(&mut self, source: S) -> bool {
        self.feed.start(source)
    }

    /// Settle the project list with a fetch outcome.
    pub fn receive_projects(&mut self, outcome: Result<Vec<Project>, SourceError>) {
        if self.feed.resolve(outcome) {
            self.register_projects();
        }
    }

    fn register_projects(&mut self) {
        for project in self.feed.projects() {
            let key = ElementKey::Project(project.id);
            self.observer.observe(key, key.threshold());
        }
    }

    /// Per-frame housekeeping: poll the fetch and advance animations by wall time.
    pub fn tick(&mut self) {
        if self.feed.poll() {
            self.register_projects();
        }
        let elapsed = self.frame_elapsed();
        self.advance(elapsed);
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    /// Advance every running effect by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.uptime = self.uptime.saturating_add(delta);
        self.hero.advance(delta);
        self.experience.advance(delta);
        for effect in self.reveals.values_mut() {
            effect.advance(delta);
        }
        if let Some((_, remaining)) = self.status_message.as_mut() {
            *remaining = remaining.saturating_sub(delta);
            if remaining.is_zero() {
                self.status_message = None;
            }
        }
    }

    /// Report the current layout.
    ///
    /// Updates scroll bounds, then starts the entrance of every observed
    /// element that crossed its threshold for the first time.
    pub fn observe(
        &mut self,
        layout: &[(ElementKey, ElementSpan)],
        content_height: u32,
        viewport_height: u16,
    ) {
        self.scroll.set_bounds(content_height, viewport_height);
        self.geometry.clear();
        self.geometry.extend(layout.iter().copied());

        let viewport = self.scroll.viewport();
        for key in self.observer.report(layout.iter().copied(), viewport) {
            self.on_seen(key);
        }
    }

    fn on_seen(&mut self, key: ElementKey) {
        tracing::debug!(?key, "Element entered viewport");
        let entrance = match key {
            ElementKey::Section(Section::ExperienceTitle) => {
                self.experience.title_in_view();
                return;
            }
            ElementKey::Section(_) => Entrance::FloatUp,
            ElementKey::Project(id) => {
                let Some(index) = self.feed.projects().iter().position(|p| p.id == id) else {
                    return;
                };
                Entrance::for_card(index)
            }
        };
        let effect = if self.options.reduced_motion {
            RevealEffect::settled(entrance)
        } else {
            RevealEffect::new(entrance)
        };
        self.reveals.insert(key, effect);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll.scroll_by(delta);
    }

    pub fn page_down(&mut self) {
        self.scroll.page_down();
    }

    pub fn page_up(&mut self) {
        self.scroll.page_up();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.to_top();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.to_bottom();
    }

    /// Jump to the projects heading (the hero's "View My Work" button).
    pub fn view_work(&mut self) {
        if let Some(span) = self
            .geometry
            .get(&ElementKey::Section(Section::ProjectsTitle))
            .copied()
        {
            self.scroll.scroll_to(span.top);
        }
    }

    pub fn select_experience(&mut self, tab: ExperienceTab) -> bool {
        self.experience.select(tab)
    }

    pub fn focus_next(&mut self) {
        let count = self.feed.projects().len();
        if count == 0 {
            return;
        }
        self.focused = Some(self.focused.map_or(0, |i| (i + 1) % count));
        self.scroll_focused_into_view();
    }

    pub fn focus_prev(&mut self) {
        let count = self.feed.projects().len();
        if count == 0 {
            return;
        }
        self.focused = Some(self.focused.map_or(count - 1, |i| (i + count - 1) % count));
        self.scroll_focused_into_view();
    }

    fn scroll_focused_into_view(&mut self) {
        let Some(project) = self.focused_project() else {
            return;
        };
        let Some(span) = self.geometry.get(&ElementKey::Project(project.id)).copied() else {
            return;
        };
        let viewport = self.scroll.viewport();
        if span.top < viewport.top {
            self.scroll.scroll_to(span.top);
        } else if span.bottom() > viewport.bottom() {
            self.scroll
                .scroll_to(span.bottom().saturating_sub(u32::from(viewport.height)));
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), STATUS_TTL));
    }

    // ========================================================================
    // Read access for rendering
    // ========================================================================

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        self.feed.projects()
    }

    #[must_use]
    pub fn feed_status(&self) -> FeedStatus {
        self.feed.status()
    }

    /// Why the project fetch failed, once it has.
    #[must_use]
    pub fn feed_failure(&self) -> Option<&str> {
        self.feed.failure()
    }

    #[must_use]
    pub fn hero(&self) -> &HeroTimeline {
        &self.hero
    }

    #[must_use]
    pub fn experience(&self) -> &ExperienceSection {
        &self.experience
    }

    /// The entrance of an observed element, once it has been seen.
    #[must_use]
    pub fn reveal(&self, key: ElementKey) -> Option<&RevealEffect> {
        self.reveals.get(&key)
    }

    #[must_use]
    pub fn is_seen(&self, key: ElementKey) -> bool {
        self.observer.is_seen(&key)
    }

    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    #[must_use]
    pub fn focused_project(&self) -> Option<&Project> {
        self.focused.and_then(|i| self.feed.projects().get(i))
    }

    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.uptime
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_ref().map(|(msg, _)| msg.as_str())
    }
}
