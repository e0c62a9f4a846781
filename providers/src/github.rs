//! Public repositories of a GitHub user.
//!
//! `GET {base}/users/{user}/repos?sort=updated&per_page={n}`

use serde::Deserialize;
use url::Url;

use folio_config::GitHubConfig;
use folio_types::{Project, ProjectId};

use crate::{GITHUB_API_BASE_URL, ProjectSource, SourceError, http_client, truncate_body};

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

#[derive(Debug, Deserialize)]
struct RepoRecord {
    id: u64,
    name: String,
    description: Option<String>,
    html_url: String,
    #[serde(default)]
    fork: bool,
}

impl From<RepoRecord> for Project {
    fn from(repo: RepoRecord) -> Self {
        Project::new(
            ProjectId::new(repo.id),
            repo.name,
            repo.description.unwrap_or_default(),
            repo.html_url,
        )
    }
}

#[derive(Debug, Clone)]
pub struct GitHubSource {
    api_base: String,
    user: String,
    token: Option<String>,
    per_page: u8,
    include_forks: bool,
    client: Option<reqwest::Client>,
}

impl GitHubSource {
    #[must_use]
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            api_base: GITHUB_API_BASE_URL.to_string(),
            user: user.into(),
            token: None,
            per_page: 30,
            include_forks: false,
            client: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &GitHubConfig) -> Self {
        let mut source = Self::new(config.user.trim())
            .with_per_page(config.max_repos())
            .with_forks(config.include_forks);
        source.token = config.resolved_token();
        if let Some(base) = config.api_base.as_deref() {
            source.api_base = base.trim_end_matches('/').to_string();
        }
        source
    }

    /// Point at a different API root with a caller-supplied client.
    ///
    /// The shared client is HTTPS-only; plain-HTTP roots need their own.
    #[must_use]
    pub fn with_endpoint(mut self, api_base: impl Into<String>, client: reqwest::Client) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self.client = Some(client);
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page.clamp(1, 100);
        self
    }

    #[must_use]
    pub fn with_forks(mut self, include_forks: bool) -> Self {
        self.include_forks = include_forks;
        self
    }

    fn repos_url(&self) -> Result<Url, SourceError> {
        let mut url = Url::parse(&format!("{}/", self.api_base))?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["users", self.user.as_str(), "repos"]);
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &self.per_page.to_string());
        Ok(url)
    }

    fn client(&self) -> &reqwest::Client {
        match &self.client {
            Some(client) => client,
            None => http_client(),
        }
    }
}

impl ProjectSource for GitHubSource {
    fn describe(&self) -> String {
        format!("github user {}", self.user)
    }

    async fn fetch(&self) -> Result<Vec<Project>, SourceError> {
        let url = self.repos_url()?;
        let url_text = url.to_string();

        let mut request = self
            .client()
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION);
        if let Some(token) = self.token.as_deref() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|source| SourceError::Request {
            url: url_text.clone(),
            source,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| SourceError::Request {
            url: url_text.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(SourceError::Status {
                url: url_text,
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }

        let repos: Vec<RepoRecord> =
            serde_json::from_str(&body).map_err(|source| SourceError::Decode {
                url: url_text,
                source,
            })?;

        let total = repos.len();
        let projects: Vec<Project> = repos
            .into_iter()
            .filter(|repo| self.include_forks || !repo.fork)
            .map(Project::from)
            .collect();
        tracing::debug!(
            user = %self.user,
            total,
            kept = projects.len(),
            "Fetched GitHub repositories"
        );
        Ok(projects)
    }
}
