//! Config file loading into a running page

use std::fs;

use folio_config::{ConfigError, FolioConfig, Rgb};
use folio_core::{App, FeedStatus};
use folio_providers::AnySource;

use crate::common::settle_feed;

const CONFIG: &str = r##"
[app]
reduced_motion = true

[theme]
accent = "#ff8800"

[profile]
name = "Ada Lovelace"
tech_stack = ["Rust", "SQL"]

[[projects]]
name = "engine"
description = "Analytical"
url = "https://example.com/engine"

[[projects]]
name = "notes"
url = "https://example.com/notes"
"##;

#[tokio::test]
async fn config_file_drives_profile_options_and_projects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, CONFIG).unwrap();

    let config = FolioConfig::load_from(&path).unwrap();
    let options = config.ui_options();
    assert!(options.reduced_motion);
    assert_eq!(options.accent, Rgb(0xff, 0x88, 0x00));

    let mut app = App::new(config.profile(), options);
    assert_eq!(app.profile().name, "Ada Lovelace");
    assert_eq!(app.profile().tech_stack, ["Rust", "SQL"]);
    // Fields the file leaves out keep their defaults.
    assert!(!app.profile().tagline.is_empty());

    app.start_fetch(AnySource::from_config(&config));
    assert_eq!(settle_feed(&mut app).await, FeedStatus::Ready);
    let names: Vec<_> = app.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["engine", "notes"]);
    assert_eq!(app.projects()[1].description, "");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = FolioConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.path(), &path);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app\nreduced_motion = ").unwrap();

    let err = FolioConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn bad_accent_falls_back_to_default() {
    let config: FolioConfig = toml::from_str("[theme]\naccent = \"chartreuse\"").unwrap();
    assert_eq!(config.ui_options().accent, folio_config::DEFAULT_ACCENT);
}
