//! Section identifiers and the registry that fixes their page order.
//!
//! A section is one named, scrollable region of the page. The set of regions is closed: a page
//! can only be composed from identifiers this module knows, so a typo in a profile is rejected
//! when the profile is read rather than silently ignored every time the user navigates.
//! The registry is built once per page and never changes afterwards.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// One scrollable region of the page.
pub enum SectionId {
    /// Name, headline and avatar.
    Hero,
    /// Longer biography.
    About,
    /// Work history.
    Experience,
    /// Skill groups.
    Skills,
    /// Services offered.
    Services,
    /// Awards and highlights.
    Achievements,
    /// Selected work samples.
    Portfolio,
    /// Side projects.
    Projects,
    /// Schooling and certificates.
    Education,
    /// Ways to get in touch.
    Contact,
}

impl SectionId {
    /// Every known section, in the order the site lays them out by default.
    pub const ALL: [Self; 10] = [
        Self::Hero,
        Self::About,
        Self::Experience,
        Self::Skills,
        Self::Services,
        Self::Achievements,
        Self::Portfolio,
        Self::Projects,
        Self::Education,
        Self::Contact,
    ];

    #[must_use]
    /// The token used in profile files and anchors.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Services => "services",
            Self::Achievements => "achievements",
            Self::Portfolio => "portfolio",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    /// Human-readable label for navigation items.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hero => "Intro",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Services => "Services",
            Self::Achievements => "Achievements",
            Self::Portfolio => "Portfolio",
            Self::Projects => "Projects",
            Self::Education => "Education",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();
        match token.as_str() {
            "intro" => return Ok(Self::Hero),
            "work" => return Ok(Self::Experience),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == token)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

impl TryFrom<String> for SectionId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        id.as_str().to_string()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// Opaque reference to a registered section, valid for the registry that issued it.
pub struct SectionHandle(usize);

impl SectionHandle {
    #[must_use]
    /// Position of the section in page order.
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Ordered, immutable list of the sections on one page, top to bottom.
pub struct SectionRegistry {
    order: Vec<SectionId>,
}

impl SectionRegistry {
    /// Fixes the page order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRegistry`] for an empty list and [`Error::DuplicateSection`] when an
    /// identifier appears twice.
    pub fn new(ids: impl IntoIterator<Item = SectionId>) -> Result<Self> {
        let mut order = Vec::new();
        for id in ids {
            if order.contains(&id) {
                return Err(Error::DuplicateSection(id.as_str()));
            }
            order.push(id);
        }
        if order.is_empty() {
            return Err(Error::EmptyRegistry);
        }
        Ok(Self { order })
    }

    /// Sections in page order.
    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.order.iter().copied()
    }

    #[must_use]
    /// Number of registered sections.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    /// Always false for a constructed registry; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    /// Page-order index of a section, if registered.
    pub fn position(&self, id: SectionId) -> Option<usize> {
        self.order.iter().position(|&s| s == id)
    }

    #[must_use]
    /// Whether the section is part of this page.
    pub fn contains(&self, id: SectionId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    /// Resolves an identifier to a handle once, at composition time.
    pub fn handle(&self, id: SectionId) -> Option<SectionHandle> {
        self.position(id).map(SectionHandle)
    }

    #[must_use]
    /// Section behind a handle.
    pub fn get(&self, handle: SectionHandle) -> Option<SectionId> {
        self.order.get(handle.0).copied()
    }

    #[must_use]
    /// Section at a page-order index.
    pub fn at(&self, index: usize) -> Option<SectionId> {
        self.order.get(index).copied()
    }

    #[must_use]
    /// Topmost section.
    pub fn first(&self) -> SectionId {
        self.order[0]
    }

    #[must_use]
    /// Section below `id`, if any.
    pub fn next(&self, id: SectionId) -> Option<SectionId> {
        self.position(id).and_then(|i| self.at(i + 1))
    }

    #[must_use]
    /// Section above `id`, if any.
    pub fn prev(&self, id: SectionId) -> Option<SectionId> {
        self.position(id)
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.at(i))
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
