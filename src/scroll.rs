//! Moving the viewport on request, and the scroll-derived signals the chrome reads.
//!
//! Navigation asks for a section; the commander resolves it against the document, subtracts
//! the fixed header so the section's top is not hidden behind it, and animates there over the
//! following frames. Unknown or unrendered sections are ignored.
//!
//! The back-to-top flag, progress fraction and scroll direction are recomputed from scroll
//! events through a [`Throttle`], so bursts of events cost one recomputation per frame. The
//! direction drives the header: it slides away while reading downwards and comes back as soon
//! as the reader scrolls up or returns near the top.

use crate::document::Document;
use crate::geometry::Viewport;
use crate::section::SectionId;
use crate::throttle::{Throttle, FRAME};
use std::time::{Duration, Instant};

/// Distance at which a smooth scroll snaps onto its target.
const SNAP_DISTANCE: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Tunables for the commander.
pub struct ScrollOptions {
    /// Height of the fixed header subtracted from every section target.
    pub header_height: f64,
    /// Scroll offset beyond which [`ScrollCommander::is_past_threshold`] is true.
    pub past_threshold: f64,
    /// Minimum spacing between recomputations of the derived signals.
    pub throttle: Duration,
    /// Fraction of the remaining distance covered per animation frame.
    pub smooth_speed: f64,
    /// Minimum movement between samples before a change of direction is reported.
    pub direction_hysteresis: f64,
    /// Scroll offset beyond which the page counts as scrolled, for header styling.
    pub scrolled_after: f64,
    /// Scroll offset beyond which scrolling down hides the header.
    pub hide_header_after: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            header_height: 80.0,
            past_threshold: 300.0,
            throttle: FRAME,
            smooth_speed: 0.25,
            direction_hysteresis: 10.0,
            scrolled_after: 50.0,
            hide_header_after: 100.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Vertical offset a navigation request scrolls to.
pub struct ScrollTarget(f64);

impl ScrollTarget {
    #[must_use]
    /// Target for a section whose top edge is at `element_top`.
    pub fn for_element(element_top: f64, header_height: f64) -> Self {
        Self(element_top - header_height)
    }

    #[must_use]
    /// The raw offset; the viewport clamps it into range when applied.
    pub fn offset(self) -> f64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Last settled scroll direction.
pub enum ScrollDirection {
    /// Towards the top of the page.
    Up,
    /// Towards the bottom of the page.
    Down,
}

#[derive(Debug)]
/// Turns navigation requests into animated scrolls and tracks scroll-derived flags.
pub struct ScrollCommander {
    options: ScrollOptions,
    target: Option<f64>,
    throttle: Throttle,
    past_threshold: bool,
    progress: f64,
    direction: Option<ScrollDirection>,
    last_sample_y: f64,
    scrolled: bool,
    header_visible: bool,
}

impl ScrollCommander {
    #[must_use]
    /// Idle commander with nothing sampled yet.
    pub fn new(options: ScrollOptions) -> Self {
        Self {
            throttle: Throttle::new(options.throttle),
            options: ScrollOptions {
                smooth_speed: options.smooth_speed.clamp(0.05, 1.0),
                ..options
            },
            target: None,
            past_threshold: false,
            progress: 0.0,
            direction: None,
            last_sample_y: 0.0,
            scrolled: false,
            header_visible: true,
        }
    }

    #[must_use]
    /// Effective options.
    pub fn options(&self) -> ScrollOptions {
        self.options
    }

    /// Starts a smooth scroll to the section, below the fixed header.
    ///
    /// Returns the computed target, or `None` without scrolling when the document does not
    /// contain the section.
    pub fn scroll_to_section(&mut self, doc: &impl Document, id: SectionId) -> Option<ScrollTarget> {
        let Some(extent) = doc.extent(id) else {
            tracing::debug!(section = %id, "scroll request for missing section ignored");
            return None;
        };
        let target = ScrollTarget::for_element(extent.top, self.options.header_height);
        tracing::debug!(section = %id, target = target.offset(), "scrolling to section");
        self.target = Some(target.offset());
        Some(target)
    }

    /// Starts a smooth scroll to the document origin.
    pub fn scroll_to_top(&mut self) {
        self.target = Some(0.0);
    }

    /// Drops a running animation, leaving the viewport where it is.
    pub fn cancel(&mut self) {
        self.target = None;
    }

    #[must_use]
    /// Whether a smooth scroll is in progress.
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Advances the smooth scroll by one frame. Returns whether the viewport moved.
    ///
    /// Covers a fixed fraction of the remaining distance each frame (ease-out) and snaps once
    /// close enough. Targets outside the scrollable range settle on the nearest edge.
    pub fn tick(&mut self, viewport: &mut Viewport) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let goal = target.clamp(0.0, viewport.max_scroll());
        let before = viewport.scroll_y;
        let remaining = goal - before;
        if remaining.abs() <= SNAP_DISTANCE {
            viewport.scroll_to(goal);
            self.target = None;
        } else {
            viewport.scroll_to(before + remaining * self.options.smooth_speed);
        }
        (viewport.scroll_y - before).abs() > f64::EPSILON
    }

    /// Feeds a scroll event. Recomputes the derived signals unless throttled.
    ///
    /// Returns true when the signals were recomputed.
    pub fn record_scroll(&mut self, viewport: &Viewport, now: Instant) -> bool {
        if self.throttle.hit(now) {
            self.sample(viewport);
            true
        } else {
            false
        }
    }

    /// Applies a throttled scroll event once its window has passed.
    ///
    /// Call every frame; returns true when the signals were recomputed.
    pub fn poll(&mut self, viewport: &Viewport, now: Instant) -> bool {
        if self.throttle.poll(now) {
            self.sample(viewport);
            true
        } else {
            false
        }
    }

    fn sample(&mut self, viewport: &Viewport) {
        let y = viewport.scroll_y;

        let past = y > self.options.past_threshold;
        if past != self.past_threshold {
            tracing::debug!(scroll_y = y, past, "past-threshold flag toggled");
            self.past_threshold = past;
        }

        let range = viewport.document_height - viewport.height;
        self.progress = if range > 0.0 {
            (y / range).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let moved = y - self.last_sample_y;
        let direction = if moved > 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        if self.direction != Some(direction) && moved.abs() > self.options.direction_hysteresis {
            self.direction = Some(direction);
        }
        self.last_sample_y = y;

        self.scrolled = y > self.options.scrolled_after;
        let hide_after = self.options.hide_header_after;
        let visible = if self.direction == Some(ScrollDirection::Down) && y > hide_after {
            false
        } else if self.direction == Some(ScrollDirection::Up) || y < hide_after {
            true
        } else {
            self.header_visible
        };
        if visible != self.header_visible {
            tracing::debug!(scroll_y = y, visible, "header visibility changed");
            self.header_visible = visible;
        }
    }

    #[must_use]
    /// True once the last sampled offset exceeds the configured threshold.
    pub fn is_past_threshold(&self) -> bool {
        self.past_threshold
    }

    #[must_use]
    /// How far through the scrollable range the last sample was, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    /// Last settled direction, `None` before the first significant movement.
    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    #[must_use]
    /// Whether the page has moved far enough to style the header as detached from the top.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    /// Whether the header should be shown: hidden while scrolling down past
    /// [`ScrollOptions::hide_header_after`], shown again on the way up.
    pub fn is_header_visible(&self) -> bool {
        self.header_visible
    }
}

impl Default for ScrollCommander {
    fn default() -> Self {
        Self::new(ScrollOptions::default())
    }
}

#[cfg(test)]
#[path = "tests/scroll.rs"]
mod tests;
