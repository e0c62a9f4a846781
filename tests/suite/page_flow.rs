//! Scroll-driven entrances and the experience reveal sequence

use std::time::Duration;

use folio_core::{ElementKey, Section};
use folio_types::ui::AnimPhase;
use folio_types::{Entrance, ExperiencePanel, ExperienceTab, ProjectId, RevealStage};

use crate::common::{app, lay_out, project, settled_app};

fn span_of(document: &folio_tui::Document, key: ElementKey) -> folio_types::ElementSpan {
    document
        .elements()
        .into_iter()
        .find_map(|(k, span)| (k == key).then_some(span))
        .unwrap_or_else(|| panic!("{key:?} not laid out"))
}

#[test]
fn nothing_below_the_hero_is_seen_at_launch() {
    let mut app = app();
    lay_out(&mut app, 80, 6);

    for section in Section::ALL {
        assert!(!app.is_seen(section.into()), "{section:?} seen too early");
    }
}

#[test]
fn jumping_to_the_bottom_skips_sections_in_between() {
    let mut app = app();
    lay_out(&mut app, 80, 6);
    app.scroll_to_bottom();
    lay_out(&mut app, 80, 20);

    assert!(app.is_seen(Section::Contact.into()));
    assert!(!app.is_seen(Section::TechTitle.into()));
    assert!(app.reveal(Section::TechTitle.into()).is_none());
}

#[test]
fn view_work_lands_on_projects_heading() {
    let mut app = settled_app();
    // Enough cards below the heading that it can scroll to the top.
    app.receive_projects(Ok((1..=3).map(|id| project(id, "card")).collect()));
    let document = lay_out(&mut app, 80, 24);
    let heading = span_of(&document, Section::ProjectsTitle.into());
    assert!(heading.top <= app.scroll().max_offset());

    app.view_work();
    assert_eq!(app.scroll().offset(), heading.top);

    lay_out(&mut app, 80, 24);
    assert!(app.is_seen(Section::ProjectsTitle.into()));
}

#[test]
fn cards_alternate_sides_and_enter_once() {
    let mut app = app();
    app.receive_projects(Ok(vec![
        project(1, "alpha"),
        project(2, "beta"),
        project(3, "gamma"),
    ]));
    lay_out(&mut app, 80, 200);

    let entrances: Vec<_> = (1..=3)
        .map(|id| {
            app.reveal(ElementKey::Project(ProjectId::new(id)))
                .map(|effect| effect.entrance())
        })
        .collect();
    assert_eq!(
        entrances,
        vec![
            Some(Entrance::FromRight),
            Some(Entrance::FromLeft),
            Some(Entrance::FromRight),
        ]
    );

    app.advance(Duration::from_secs(5));
    lay_out(&mut app, 80, 200);
    for id in 1..=3 {
        let effect = app.reveal(ElementKey::Project(ProjectId::new(id)));
        assert_eq!(effect.map(|e| e.phase()), Some(AnimPhase::Completed));
    }
}

#[test]
fn hero_plays_without_any_scrolling() {
    let mut app = app();
    assert!(!app.hero().is_settled());
    for _ in 0..20 {
        app.advance(Duration::from_secs(1));
    }
    assert!(app.hero().is_settled());
    assert_eq!(app.scroll().offset(), 0);
}

#[test]
fn experience_buttons_wait_for_title_and_typing() {
    let mut app = app();
    assert!(!app.select_experience(ExperienceTab::Work));

    lay_out(&mut app, 80, 200);
    assert_eq!(app.experience().stage(), RevealStage::Title);
    assert!(!app.select_experience(ExperienceTab::Work));

    for _ in 0..4 {
        app.advance(Duration::from_secs(10));
    }
    assert_eq!(app.experience().stage(), RevealStage::Buttons);
    assert_eq!(app.experience().panel(), ExperiencePanel::Empty);

    assert!(app.select_experience(ExperienceTab::Education));
    assert_eq!(app.experience().panel(), ExperiencePanel::EducationHistory);
    assert!(app.select_experience(ExperienceTab::Work));
    assert_eq!(app.experience().panel(), ExperiencePanel::WorkHistory);
}
