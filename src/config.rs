//! Configuration to acknowledge viewer preferences as well as set defaults.
//!
//! Specifically, we try to find a folio.toml (or the file given with `--config`), and if present
//! we load settings from there. The defaults are in terminal rows, which is the unit the page is
//! laid out in.

use crate::error::{Error, Result};
use crate::geometry::EdgeMargin;
use crate::reveal::RevealPolicy;
use crate::scroll::ScrollOptions;
use crate::tracker::{RatioBasis, TrackerOptions};
use facet::Facet;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

#[derive(Facet, Clone, Debug)]
/// Viewer preferences loaded from folio.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 3.0)]
    /// Rows covered by the fixed header; section jumps land just below it.
    pub header_height: f64,
    #[facet(default = 0.3)]
    /// Minimum ratio for a section to become active.
    pub visibility_threshold: f64,
    #[facet(default = 0.2)]
    /// Fraction of the viewport ignored at the top when picking the active section.
    pub margin_top: f64,
    #[facet(default = 0.7)]
    /// Fraction of the viewport ignored at the bottom when picking the active section.
    pub margin_bottom: f64,
    #[facet(default = true)]
    /// Measure ratios against the viewport band instead of the section height.
    pub band_relative: bool,
    #[facet(default = 15.0)]
    /// Rows scrolled before the back-to-top hint appears.
    pub past_threshold: f64,
    #[facet(default = 16)]
    /// Minimum milliseconds between scroll-signal recomputations.
    pub throttle_ms: u64,
    #[facet(default = 0.25)]
    /// Fraction of the remaining distance a smooth scroll covers per frame.
    pub smooth_speed: f64,
    #[facet(default = 0.5)]
    /// Rows moved between samples before the scroll direction is allowed to flip.
    pub direction_hysteresis: f64,
    #[facet(default = 1.0)]
    /// Rows scrolled before the header is drawn detached from the page top.
    pub scrolled_after: f64,
    #[facet(default = 5.0)]
    /// Rows scrolled before reading downwards hides the header.
    pub hide_header_after: f64,
    #[facet(default = 1.0)]
    /// Rows shaved off the bottom of the viewport before a block counts as visible.
    pub reveal_margin: f64,
    #[facet(default = 2000)]
    /// Milliseconds before a block is revealed regardless of visibility in compact layouts.
    pub reveal_fallback_ms: u64,
    #[facet(default = 100)]
    /// Maximum line width for page text.
    pub wrap_width: usize,
}

impl Config {
    /// Load configuration from `path`, or from folio.toml if present.
    ///
    /// A missing default file yields the defaults; a file given explicitly must exist and parse.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file cannot be read, or any file found cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let contents = match path {
            Some(path) => fs::read_to_string(path)?,
            None => fs::read_to_string(DEFAULT_CONFIG_FILE).unwrap_or_default(),
        };
        Self::from_toml(&contents)
    }

    /// Parse configuration text; absent keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the text is not valid configuration.
    pub fn from_toml(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }

    #[must_use]
    /// Options for the visibility tracker.
    pub fn tracker_options(&self) -> TrackerOptions {
        TrackerOptions {
            visibility_threshold: self.visibility_threshold,
            edge_margin: EdgeMargin {
                top: self.margin_top,
                bottom: self.margin_bottom,
            },
            basis: if self.band_relative {
                RatioBasis::Band
            } else {
                RatioBasis::Target
            },
        }
    }

    #[must_use]
    /// Options for the scroll commander.
    pub fn scroll_options(&self) -> ScrollOptions {
        ScrollOptions {
            header_height: self.header_height,
            past_threshold: self.past_threshold,
            throttle: Duration::from_millis(self.throttle_ms),
            smooth_speed: self.smooth_speed,
            direction_hysteresis: self.direction_hysteresis,
            scrolled_after: self.scrolled_after,
            hide_header_after: self.hide_header_after,
        }
    }

    #[must_use]
    /// Reveal policy for the given layout, scaled to rows.
    pub fn reveal_policy(&self, compact: bool) -> RevealPolicy {
        if compact {
            RevealPolicy {
                bottom_margin: self.reveal_margin,
                fallback_after: Some(Duration::from_millis(self.reveal_fallback_ms)),
                ..RevealPolicy::mobile()
            }
        } else {
            RevealPolicy {
                bottom_margin: self.reveal_margin,
                ..RevealPolicy::desktop()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
