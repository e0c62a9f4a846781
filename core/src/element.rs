//! Identities of observable page elements.

use folio_types::{ProjectId, Threshold};

/// Fixed page blocks whose entrance is gated on visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    TechTitle,
    TechGrid,
    ProjectsTitle,
    ExperienceTitle,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::TechTitle,
        Section::TechGrid,
        Section::ProjectsTitle,
        Section::ExperienceTitle,
        Section::Contact,
    ];

    #[must_use]
    pub const fn threshold(self) -> Threshold {
        match self {
            Section::TechTitle | Section::ExperienceTitle => Threshold::MOST,
            Section::TechGrid | Section::ProjectsTitle | Section::Contact => Threshold::QUARTER,
        }
    }
}

/// Key under which an element is observed and animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKey {
    Section(Section),
    Project(ProjectId),
}

impl ElementKey {
    #[must_use]
    pub const fn threshold(self) -> Threshold {
        match self {
            ElementKey::Section(section) => section.threshold(),
            ElementKey::Project(_) => Threshold::MOST,
        }
    }
}

impl From<Section> for ElementKey {
    fn from(section: Section) -> Self {
        ElementKey::Section(section)
    }
}

impl From<ProjectId> for ElementKey {
    fn from(id: ProjectId) -> Self {
        ElementKey::Project(id)
    }
}
