//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use folio_core::{App, FeedStatus};
use folio_tui::{Document, glyphs, palette};
use folio_types::ui::UiOptions;
use folio_types::{Profile, Project, ProjectId};

pub const GITHUB_USER: &str = "octocat";

/// Options under which every entrance completes the moment it starts.
pub fn reduced_motion() -> UiOptions {
    UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    }
}

pub fn app() -> App {
    App::new(Profile::default(), UiOptions::default())
}

pub fn settled_app() -> App {
    App::new(Profile::default(), reduced_motion())
}

pub fn project(id: u64, name: &str) -> Project {
    Project::new(
        ProjectId::new(id),
        name,
        format!("{name} description"),
        format!("https://github.com/{GITHUB_USER}/{name}"),
    )
}

/// Lay the page out at `width` x `height` and report it to the app,
/// the way one rendered frame would.
pub fn lay_out(app: &mut App, width: u16, height: u16) -> Document {
    let options = app.ui_options();
    let document = Document::build(app, &palette(options), &glyphs(options), width);
    app.observe(&document.elements(), document.height(), height);
    document
}

/// Tick the app until the project fetch settles.
pub async fn settle_feed(app: &mut App) -> FeedStatus {
    for _ in 0..500 {
        app.tick();
        let status = app.feed_status();
        if !matches!(status, FeedStatus::Idle | FeedStatus::Loading) {
            return status;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("project fetch did not settle");
}

/// Start a mock server that simulates the GitHub REST API
pub async fn start_github_mock() -> MockServer {
    MockServer::start().await
}

/// Mount a repository listing for [`GITHUB_USER`].
pub async fn mount_repos(server: &MockServer, names: &[&str]) {
    let repos: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            json!({
                "id": index as u64 + 1,
                "name": name,
                "description": format!("{name} description"),
                "html_url": format!("https://github.com/{GITHUB_USER}/{name}"),
                "fork": false
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path(format!("/users/{GITHUB_USER}/repos")))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount an error response for the repository listing.
pub async fn mount_repos_error(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{GITHUB_USER}/repos")))
        .respond_with(ResponseTemplate::new(status).set_body_string("rate limited"))
        .expect(1)
        .mount(server)
        .await;
}
