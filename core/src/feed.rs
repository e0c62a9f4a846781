//! The one-time project fetch.

use futures_util::future::FutureExt;
use tokio::task::JoinHandle;

use folio_providers::{ProjectSource, SourceError};
use folio_types::Project;

/// Observable status of the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    /// No fetch has been started.
    Idle,
    Loading,
    Ready,
    /// The fetch failed; the list is empty.
    Failed,
}

#[derive(Debug, Default)]
enum FeedState {
    #[default]
    Idle,
    Loading(JoinHandle<Result<Vec<Project>, SourceError>>),
    Ready(Vec<Project>),
    Failed(String),
}

/// Fire-and-forget project fetch: started once, never retried or cancelled.
#[derive(Debug, Default)]
pub struct ProjectFeed {
    state: FeedState,
}

impl ProjectFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the fetch on the current tokio runtime.
    ///
    /// Returns `false` (and does nothing) if a fetch was already started.
    pub fn start<S: ProjectSource>(&mut self, source: S) -> bool {
        if !matches!(self.state, FeedState::Idle) {
            return false;
        }
        tracing::info!(source = %source.describe(), "Fetching projects");
        let handle = tokio::spawn(async move { source.fetch().await });
        self.state = FeedState::Loading(handle);
        true
    }

    /// Settle the feed directly with a fetch outcome.
    ///
    /// Ignored once the feed is already settled.
    pub fn resolve(&mut self, outcome: Result<Vec<Project>, SourceError>) -> bool {
        if matches!(self.state, FeedState::Ready(_) | FeedState::Failed(_)) {
            return false;
        }
        self.state = match outcome {
            Ok(projects) => {
                tracing::info!(count = projects.len(), "Projects loaded");
                FeedState::Ready(projects)
            }
            Err(err) => {
                tracing::warn!("Project fetch failed: {err}");
                FeedState::Failed(err.to_string())
            }
        };
        true
    }

    /// Check the background task without blocking. Returns `true` when the feed
    /// settled during this call.
    pub fn poll(&mut self) -> bool {
        let FeedState::Loading(handle) = &mut self.state else {
            return false;
        };
        if !handle.is_finished() {
            return false;
        }

        let FeedState::Loading(mut handle) = std::mem::take(&mut self.state) else {
            return false;
        };
        match (&mut handle).now_or_never() {
            Some(Ok(outcome)) => self.resolve(outcome),
            Some(Err(join_err)) => {
                tracing::warn!("Project fetch task failed: {join_err}");
                self.state = FeedState::Failed(join_err.to_string());
                true
            }
            None => {
                // is_finished() said otherwise; put it back and try next frame.
                self.state = FeedState::Loading(handle);
                false
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> FeedStatus {
        match self.state {
            FeedState::Idle => FeedStatus::Idle,
            FeedState::Loading(_) => FeedStatus::Loading,
            FeedState::Ready(_) => FeedStatus::Ready,
            FeedState::Failed(_) => FeedStatus::Failed,
        }
    }

    /// Projects in source order. Empty unless the fetch succeeded.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        match &self.state {
            FeedState::Ready(projects) => projects,
            _ => &[],
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            FeedState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
