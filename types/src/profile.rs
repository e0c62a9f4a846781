//! Page content: everything the page says about its owner.

use serde::Deserialize;

/// One row of the work or education history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub summary: String,
}

impl HistoryEntry {
    pub fn new(
        title: impl Into<String>,
        organization: impl Into<String>,
        period: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            organization: organization.into(),
            period: period.into(),
            summary: summary.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub target: String,
}

/// Text content of the page.
///
/// Deserializes field-by-field over [`Profile::default`], so a config file
/// only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub view_work_label: String,
    pub tech_stack: Vec<String>,
    pub work_history: Vec<HistoryEntry>,
    pub education_history: Vec<HistoryEntry>,
    pub experience_intro: String,
    pub contact_blurb: String,
    pub contact: Vec<ContactLink>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Jay Patel".to_string(),
            headline: "Driven Problem Solver".to_string(),
            tagline: "I am a software engineer who likes to build cool web experiences!"
                .to_string(),
            view_work_label: "View My Work".to_string(),
            tech_stack: [
                "JavaScript",
                "TypeScript",
                "React",
                "Node.js",
                "Python",
                "Java",
                "HTML",
                "CSS",
                "Git",
                "Docker",
                "SQL",
                "Rust",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            work_history: vec![HistoryEntry::new(
                "Software Engineer",
                "Independent",
                "2022 - Present",
                "Building web experiences end to end, from UI to deployment.",
            )],
            education_history: vec![HistoryEntry::new(
                "B.S. Computer Science",
                "University",
                "2018 - 2022",
                "Coursework in algorithms, systems and human-computer interaction.",
            )],
            experience_intro: "Where I have worked and what I have studied.".to_string(),
            contact_blurb: "Want to build something together? Reach out.".to_string(),
            contact: vec![ContactLink {
                label: "GitHub".to_string(),
                target: "https://github.com".to_string(),
            }],
        }
    }
}

impl Profile {
    /// Entries shown for the given panel selection.
    #[must_use]
    pub fn history(&self, tab: crate::ExperienceTab) -> &[HistoryEntry] {
        match tab {
            crate::ExperienceTab::Work => &self.work_history,
            crate::ExperienceTab::Education => &self.education_history,
        }
    }
}
