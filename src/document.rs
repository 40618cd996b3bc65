//! The addressing contract between the page and everything that scrolls it.
//!
//! Each section resolves to at most one extent. A section the document cannot resolve is
//! treated as absent, never as an error.

use crate::geometry::Extent;
use crate::section::SectionId;
use std::collections::HashMap;

/// Anything that can report where a section currently sits.
pub trait Document {
    /// Current extent of the section, or `None` when it is not rendered.
    fn extent(&self, id: SectionId) -> Option<Extent>;
    /// Total document height.
    fn height(&self) -> f64;
}

#[derive(Clone, Debug, Default)]
/// Section positions produced by page composition.
pub struct PageLayout {
    extents: HashMap<SectionId, Extent>,
    height: f64,
}

impl PageLayout {
    #[must_use]
    /// Empty layout of the given height.
    pub fn new(height: f64) -> Self {
        Self {
            extents: HashMap::new(),
            height,
        }
    }

    /// Places a section, replacing any previous position.
    pub fn insert(&mut self, id: SectionId, extent: Extent) {
        self.height = self.height.max(extent.bottom());
        self.extents.insert(id, extent);
    }

    /// Drops a section from the layout, as when it unmounts.
    pub fn remove(&mut self, id: SectionId) -> Option<Extent> {
        self.extents.remove(&id)
    }
}

impl Document for PageLayout {
    fn extent(&self, id: SectionId) -> Option<Extent> {
        self.extents.get(&id).copied()
    }

    fn height(&self) -> f64 {
        self.height
    }
}
