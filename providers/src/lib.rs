//! Project list sources.
//!
//! # Architecture
//!
//! A [`ProjectSource`] is a single no-argument async call returning the
//! projects in display order. The page treats it as an opaque boundary:
//!
//! - [`github`] - public repositories of a GitHub user (REST API)
//! - [`fixed`] - a list written in the config file
//!
//! [`AnySource`] dispatches between the two based on the loaded config.
//!
//! # Error Handling
//!
//! Sources return [`SourceError`]. The page decides what a failure looks like;
//! sources never retry.

pub mod fixed;
pub mod github;

use std::future::Future;
use std::sync::OnceLock;
use std::time::Duration;

use thiserror::Error;

use folio_config::FolioConfig;
use folio_types::Project;

pub use fixed::StaticSource;
pub use github::GitHubSource;

/// Canonical GitHub REST API base URL.
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

const CONNECT_TIMEOUT_SECS: u64 = 30;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

pub(crate) const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid source url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
    #[error("could not decode project list from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Something that can produce the project list once.
pub trait ProjectSource: Send + Sync + 'static {
    /// Short human-readable description for logs.
    fn describe(&self) -> String;

    fn fetch(&self) -> impl Future<Output = Result<Vec<Project>, SourceError>> + Send;
}

/// Source selected from configuration.
#[derive(Debug, Clone)]
pub enum AnySource {
    GitHub(GitHubSource),
    Static(StaticSource),
}

impl AnySource {
    /// `[github]` wins over `[[projects]]`; with neither, the list is empty.
    #[must_use]
    pub fn from_config(config: &FolioConfig) -> Self {
        match config.github.as_ref() {
            Some(github) if !github.user.trim().is_empty() => {
                AnySource::GitHub(GitHubSource::from_config(github))
            }
            _ => AnySource::Static(StaticSource::from_entries(&config.projects)),
        }
    }
}

impl ProjectSource for AnySource {
    fn describe(&self) -> String {
        match self {
            AnySource::GitHub(source) => source.describe(),
            AnySource::Static(source) => source.describe(),
        }
    }

    async fn fetch(&self) -> Result<Vec<Project>, SourceError> {
        match self {
            AnySource::GitHub(source) => source.fetch().await,
            AnySource::Static(source) => source.fetch().await,
        }
    }
}

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        base_client_builder().build().unwrap_or_else(|e| {
            tracing::error!("Failed to build HTTP client: {e}. Falling back to defaults.");
            reqwest::Client::new()
        })
    })
}

fn base_client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)))
        .https_only(true)
        .user_agent(USER_AGENT)
}

pub(crate) fn truncate_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY_BYTES {
        return body;
    }
    let mut cut = MAX_ERROR_BODY_BYTES;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...(truncated)", &body[..cut])
}
