//! Projects listed directly in the config file.

use folio_config::ProjectEntry;
use folio_types::{Project, ProjectId};

use crate::{ProjectSource, SourceError};

/// A fixed list, returned as-is. Ids are 1-based positions.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    projects: Vec<Project>,
}

impl StaticSource {
    #[must_use]
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    #[must_use]
    pub fn from_entries(entries: &[ProjectEntry]) -> Self {
        let projects = entries
            .iter()
            .zip(1_u64..)
            .map(|(entry, id)| {
                Project::new(
                    ProjectId::new(id),
                    entry.name.clone(),
                    entry.description.clone(),
                    entry.url.clone(),
                )
            })
            .collect();
        Self { projects }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectSource for StaticSource {
    fn describe(&self) -> String {
        format!("static list ({} projects)", self.projects.len())
    }

    async fn fetch(&self) -> Result<Vec<Project>, SourceError> {
        Ok(self.projects.clone())
    }
}
