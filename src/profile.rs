//! The résumé content a page is composed from.
//!
//! Profiles are plain JSON so they can be written by hand or exported from elsewhere. Section ids
//! are checked as the file is read; beyond that the content is taken as given.

use crate::error::Result;
use crate::section::SectionId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// One person's page.
pub struct Profile {
    /// Display name shown in the hero and header.
    pub name: String,
    /// One-line role or tagline.
    #[serde(default)]
    pub headline: String,
    /// Text-art avatar file, relative to the working directory.
    #[serde(default)]
    pub avatar: Option<PathBuf>,
    /// Page sections, top to bottom.
    pub sections: Vec<ProfileSection>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Content of one section.
pub struct ProfileSection {
    /// Which region this is.
    pub id: SectionId,
    /// Heading override; defaults to the section's label.
    #[serde(default)]
    pub title: Option<String>,
    /// Content blocks, each revealed on its own.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl ProfileSection {
    #[must_use]
    /// Heading to display.
    pub fn heading(&self) -> &str {
        self.title.as_deref().unwrap_or(self.id.label())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
/// A card of content: a job, a skill group, a project, a contact link.
pub struct Block {
    /// Main line, e.g. a job title.
    #[serde(default)]
    pub heading: String,
    /// Secondary line, e.g. an employer.
    #[serde(default)]
    pub subheading: Option<String>,
    /// Date range or similar.
    #[serde(default)]
    pub period: Option<String>,
    /// Paragraphs.
    #[serde(default)]
    pub body: Vec<String>,
    /// Short labels such as technologies.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Grouping used to filter projects, e.g. "Open source".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Profile {
    /// Parses a profile from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names an unknown section.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a profile file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    #[must_use]
    /// Section ids in page order.
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id).collect()
    }

    #[must_use]
    /// Distinct project categories in the order they first appear.
    pub fn project_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        let blocks = self
            .sections
            .iter()
            .filter(|s| s.id == SectionId::Projects)
            .flat_map(|s| &s.blocks);
        for category in blocks.filter_map(|b| b.category.as_ref()) {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }
        categories
    }

    #[must_use]
    /// A page with only a name and an empty first section, shown while the real one is broken.
    pub fn blank(name: &str) -> Self {
        Self {
            name: name.to_string(),
            headline: String::new(),
            avatar: None,
            sections: vec![ProfileSection {
                id: SectionId::Hero,
                title: None,
                blocks: Vec::new(),
            }],
        }
    }

    #[must_use]
    /// Built-in demo page used when no profile is given.
    pub fn sample() -> Self {
        let section = |id: SectionId, blocks: Vec<Block>| ProfileSection {
            id,
            title: None,
            blocks,
        };

        Self {
            name: "Alex Morgan".to_string(),
            headline: "Product engineer. Builds calm software for busy people.".to_string(),
            avatar: None,
            sections: vec![
                section(
                    SectionId::Hero,
                    vec![card(
                        "Hello",
                        None,
                        None,
                        &[
                            "Ten years of shipping web and systems software, from payment \
                             pipelines to design systems.",
                            "Currently looking for a small team with a hard problem.",
                        ],
                        &[],
                    )],
                ),
                section(
                    SectionId::Experience,
                    vec![
                        card(
                            "Staff Engineer",
                            Some("Northwind Logistics"),
                            Some("2021 - present"),
                            &[
                                "Led the rewrite of the routing service, cutting p99 latency \
                                 from 900ms to 120ms.",
                                "Mentored six engineers through their first on-call rotations.",
                            ],
                            &["Rust", "PostgreSQL", "Kafka"],
                        ),
                        card(
                            "Senior Engineer",
                            Some("Blue Finch Studio"),
                            Some("2017 - 2021"),
                            &[
                                "Owned the component library used by twelve product teams.",
                                "Introduced visual regression testing to the release process.",
                            ],
                            &["TypeScript", "React"],
                        ),
                        card(
                            "Engineer",
                            Some("Harbor Analytics"),
                            Some("2014 - 2017"),
                            &["Built ingestion jobs for point-of-sale data from 3,000 stores."],
                            &["Python", "Airflow"],
                        ),
                    ],
                ),
                section(
                    SectionId::Skills,
                    vec![
                        card("Languages", None, None, &[], &["Rust", "TypeScript", "Python"]),
                        card("Infrastructure", None, None, &[], &["Kubernetes", "Terraform"]),
                        card("Practice", None, None, &[], &["System design", "Mentoring"]),
                    ],
                ),
                section(
                    SectionId::Projects,
                    vec![
                        project(
                            "Open source",
                            card(
                                "tideline",
                                Some("Maintainer"),
                                None,
                                &["A tide-table CLI with offline harmonic predictions."],
                                &["Rust"],
                            ),
                        ),
                        project(
                            "Side project",
                            card(
                                "plainmail",
                                Some("Author"),
                                None,
                                &["Self-hosted newsletter sender with zero tracking pixels."],
                                &["Go", "SQLite"],
                            ),
                        ),
                        project(
                            "Open source",
                            card(
                                "quarry",
                                Some("Contributor"),
                                None,
                                &["Query planner fixes for an embedded analytics engine."],
                                &["Rust", "SQL"],
                            ),
                        ),
                    ],
                ),
                section(
                    SectionId::Contact,
                    vec![
                        card("Email", None, None, &["alex@example.com"], &[]),
                        card("GitHub", None, None, &["github.com/alexmorgan"], &[]),
                    ],
                ),
            ],
        }
    }
}

fn card(
    heading: &str,
    subheading: Option<&str>,
    period: Option<&str>,
    body: &[&str],
    tags: &[&str],
) -> Block {
    Block {
        heading: heading.to_string(),
        subheading: subheading.map(str::to_string),
        period: period.map(str::to_string),
        body: body.iter().map(|s| (*s).to_string()).collect(),
        tags: tags.iter().map(|s| (*s).to_string()).collect(),
        category: None,
    }
}

fn project(category: &str, block: Block) -> Block {
    Block {
        category: Some(category.to_string()),
        ..block
    }
}

#[cfg(test)]
#[path = "tests/profile.rs"]
mod tests;
