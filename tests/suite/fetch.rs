//! The one-time project fetch, end to end against a mock GitHub API

use folio_core::{ElementKey, FeedStatus};
use folio_providers::{GitHubSource, StaticSource};
use folio_types::{Entrance, ProjectId};

use crate::common::{
    GITHUB_USER, lay_out, mount_repos, mount_repos_error, project, settle_feed, settled_app,
    start_github_mock,
};

fn source_for(server: &wiremock::MockServer) -> GitHubSource {
    GitHubSource::new(GITHUB_USER).with_endpoint(server.uri(), reqwest::Client::new())
}

#[tokio::test]
async fn fetched_repositories_become_cards_in_order() {
    let server = start_github_mock().await;
    mount_repos(&server, &["alpha", "beta", "gamma"]).await;

    let mut app = settled_app();
    assert!(app.start_fetch(source_for(&server)));
    assert_eq!(app.feed_status(), FeedStatus::Loading);
    assert_eq!(settle_feed(&mut app).await, FeedStatus::Ready);

    let names: Vec<_> = app.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["alpha", "beta", "gamma"]);

    lay_out(&mut app, 80, 200);
    let entrances: Vec<_> = app
        .projects()
        .iter()
        .map(|p| app.reveal(ElementKey::Project(p.id)).map(|e| e.entrance()))
        .collect();
    assert_eq!(
        entrances,
        [
            Some(Entrance::FromRight),
            Some(Entrance::FromLeft),
            Some(Entrance::FromRight),
        ]
    );
}

#[tokio::test]
async fn failed_fetch_leaves_the_list_empty() {
    let server = start_github_mock().await;
    mount_repos_error(&server, 500).await;

    let mut app = settled_app();
    app.start_fetch(source_for(&server));
    assert_eq!(settle_feed(&mut app).await, FeedStatus::Failed);
    assert!(app.projects().is_empty());

    let document = lay_out(&mut app, 80, 200);
    assert!(
        document
            .elements()
            .iter()
            .all(|(key, _)| !matches!(key, ElementKey::Project(_)))
    );
}

#[tokio::test]
async fn fetch_starts_only_once() {
    let mut app = settled_app();
    assert!(app.start_fetch(StaticSource::new(vec![project(1, "alpha")])));
    assert!(!app.start_fetch(StaticSource::new(vec![project(2, "beta")])));

    assert_eq!(settle_feed(&mut app).await, FeedStatus::Ready);
    assert_eq!(app.projects().len(), 1);
    assert_eq!(app.projects()[0].id, ProjectId::new(1));
}

#[tokio::test]
async fn late_results_do_not_replace_a_settled_list() {
    let mut app = settled_app();
    app.start_fetch(StaticSource::new(vec![project(1, "alpha")]));
    settle_feed(&mut app).await;

    app.receive_projects(Ok(Vec::new()));
    assert_eq!(app.projects().len(), 1);
}
