//! Picks the one section that best represents what the user is looking at.
//!
//! Several sections can be partly visible at once. On every layout or scroll change the tracker
//! measures each registered section against the margin-adjusted viewport band, keeps those at or
//! above the visibility threshold, and takes the one with the largest ratio. Equal ratios go to
//! the section that comes first on the page.
//!
//! When nothing qualifies the previous answer stands: the highlight never falls back to
//! "nothing" once something has been active, which keeps the navigation from flickering while
//! the user scrolls through the gap between two sections.

use crate::active::{ActiveSection, Subscription};
use crate::document::Document;
use crate::geometry::{coverage, intersect, EdgeMargin, Viewport};
use crate::section::{SectionId, SectionRegistry};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
/// What an intersection ratio is a fraction of.
pub enum RatioBasis {
    /// Fraction of the section inside the band, as `IntersectionObserver` reports it.
    #[default]
    Target,
    /// Fraction of the band the section covers. Suits sections taller than the band.
    Band,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Tunables for the tracker.
pub struct TrackerOptions {
    /// Minimum intersection ratio for a section to qualify.
    pub visibility_threshold: f64,
    /// Viewport shrink applied before intersecting.
    pub edge_margin: EdgeMargin,
    /// How ratios are measured.
    pub basis: RatioBasis,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.3,
            edge_margin: EdgeMargin::default(),
            basis: RatioBasis::Target,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// One section's measurement from one observation pass.
pub struct VisibilityReading {
    /// Measured section.
    pub section: SectionId,
    /// Measured fraction, per the tracker's [`RatioBasis`].
    pub intersection_ratio: f64,
    /// Whether any part of the section is inside the band.
    pub is_intersecting: bool,
}

#[must_use]
/// The qualifying reading with the largest ratio; ties go to the earliest reading.
///
/// Readings are expected in page order, which is what [`VisibilityTracker::observe`] produces.
pub fn select(readings: &[VisibilityReading], threshold: f64) -> Option<SectionId> {
    let mut best: Option<&VisibilityReading> = None;
    for reading in readings {
        if !reading.is_intersecting || reading.intersection_ratio < threshold {
            continue;
        }
        // Strict comparison keeps the earlier section on a tie.
        if best.is_none_or(|b| reading.intersection_ratio > b.intersection_ratio) {
            best = Some(reading);
        }
    }
    best.map(|r| r.section)
}

/// Observes the registered sections and owns the active-section state.
pub struct VisibilityTracker {
    registry: SectionRegistry,
    options: TrackerOptions,
    active: ActiveSection,
    connected: bool,
}

impl VisibilityTracker {
    #[must_use]
    /// Starts watching every section in the registry.
    pub fn new(registry: SectionRegistry, options: TrackerOptions) -> Self {
        let options = TrackerOptions {
            visibility_threshold: options.visibility_threshold.clamp(0.0, 1.0),
            ..options
        };
        Self {
            registry,
            options,
            active: ActiveSection::new(),
            connected: true,
        }
    }

    #[must_use]
    /// Watched sections.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    #[must_use]
    /// Effective options after clamping.
    pub fn options(&self) -> TrackerOptions {
        self.options
    }

    #[must_use]
    /// Read access to the active-section state.
    pub fn active_section(&self) -> &ActiveSection {
        &self.active
    }

    #[must_use]
    /// The active section, if one has been observed.
    pub fn active(&self) -> Option<SectionId> {
        self.active.get()
    }

    /// Registers a change listener on the active-section state.
    pub fn subscribe(&self, listener: impl FnMut(SectionId) + 'static) -> Subscription {
        self.active.subscribe(listener)
    }

    /// Recomputes every section's visibility and updates the active section.
    ///
    /// Sections the document cannot resolve are skipped. Returns the readings of this pass in
    /// page order; empty once the tracker is disconnected.
    pub fn observe(&mut self, doc: &impl Document, viewport: &Viewport) -> Vec<VisibilityReading> {
        if !self.connected {
            return Vec::new();
        }
        let band = self.options.edge_margin.band(viewport);
        let readings: Vec<VisibilityReading> = self
            .registry
            .iter()
            .filter_map(|section| {
                let extent = doc.extent(section)?;
                let (target_ratio, is_intersecting) = intersect(extent, band);
                let intersection_ratio = match self.options.basis {
                    RatioBasis::Target => target_ratio,
                    RatioBasis::Band if is_intersecting => coverage(extent, band),
                    RatioBasis::Band => 0.0,
                };
                Some(VisibilityReading {
                    section,
                    intersection_ratio,
                    is_intersecting,
                })
            })
            .collect();

        if let Some(section) = select(&readings, self.options.visibility_threshold) {
            if self.active.set(section) {
                tracing::debug!(%section, scroll_y = viewport.scroll_y, "active section changed");
            }
        }
        readings
    }

    /// Stops observing; later `observe` calls do nothing.
    pub fn disconnect(&mut self) {
        if self.connected {
            tracing::debug!("visibility tracker disconnected");
        }
        self.connected = false;
    }

    #[must_use]
    /// Whether the tracker still reacts to observations.
    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
