//! Narrowing the projects section by category and search term.
//!
//! Filtering happens before composition. The filter produces a copy of the profile whose
//! projects section keeps only the matching blocks, and the page is composed from that copy, so
//! section positions and reveal state always describe what is on screen.

use crate::profile::{Block, Profile};
use crate::section::SectionId;

/// Shown in place of the projects when nothing matches.
pub const NO_MATCHES: &str = "No matching projects";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Category and free-text criteria for the projects section.
pub struct ProjectFilter {
    category: Option<String>,
    search: String,
}

impl ProjectFilter {
    #[must_use]
    /// Filter that lets every project through.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Selected category, `None` for all.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    /// Current search term as typed.
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    /// Whether any project can be filtered out.
    pub fn is_active(&self) -> bool {
        self.category.is_some() || !self.search.trim().is_empty()
    }

    /// Selects a category, or all with `None`.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    /// Replaces the search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Appends to the search term.
    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
    }

    /// Drops the last character of the search term.
    pub fn pop_search(&mut self) {
        self.search.pop();
    }

    /// Back to all projects.
    pub fn clear(&mut self) {
        self.category = None;
        self.search.clear();
    }

    /// Steps through all, then each of `available` in order, then back to all.
    ///
    /// A selected category that is no longer available resets to all.
    pub fn cycle_category(&mut self, available: &[String]) -> Option<&str> {
        let next = match &self.category {
            None => available.first(),
            Some(current) => available
                .iter()
                .position(|c| c == current)
                .and_then(|i| available.get(i + 1)),
        };
        self.category = next.cloned();
        self.category.as_deref()
    }

    #[must_use]
    /// Whether a project passes both the category and the search term.
    ///
    /// The search is case-insensitive and looks at the heading, subheading, body and tags.
    pub fn matches(&self, block: &Block) -> bool {
        if let Some(category) = &self.category {
            if block.category.as_ref() != Some(category) {
                return false;
            }
        }
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        std::iter::once(&block.heading)
            .chain(&block.subheading)
            .chain(&block.body)
            .chain(&block.tags)
            .any(|field| field.to_lowercase().contains(&term))
    }

    #[must_use]
    /// Copy of the profile with non-matching projects removed.
    ///
    /// An emptied projects section gets a single placeholder block so it keeps its place on
    /// the page and in the navigation.
    pub fn apply(&self, profile: &Profile) -> Profile {
        let mut filtered = profile.clone();
        if !self.is_active() {
            return filtered;
        }
        for section in &mut filtered.sections {
            if section.id != SectionId::Projects {
                continue;
            }
            section.blocks.retain(|block| self.matches(block));
            if section.blocks.is_empty() {
                section.blocks.push(Block {
                    heading: NO_MATCHES.to_string(),
                    ..Block::default()
                });
            }
        }
        filtered
    }

    #[must_use]
    /// Short description for the status bar, e.g. `Open source "cli"`.
    pub fn label(&self) -> String {
        let category = self.category.as_deref().unwrap_or("all");
        let term = self.search.trim();
        if term.is_empty() {
            category.to_string()
        } else {
            format!("{category} \"{term}\"")
        }
    }
}

#[cfg(test)]
#[path = "tests/filter.rs"]
mod tests;
