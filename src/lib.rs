//! folio: a one-page résumé viewer built around a scroll-spy engine.
//!
//! The engine is independent of the terminal: a [`section::SectionRegistry`] fixes the page's
//! regions, a [`tracker::VisibilityTracker`] decides which one the user is looking at and
//! publishes it through [`active::ActiveSection`], a [`scroll::ScrollCommander`] moves the
//! viewport on request, and a [`reveal::RevealAnimator`] flips content blocks visible once.
//! The remaining modules compose a profile into a page and drive it from a terminal.

pub mod active;
pub mod app_state;
pub mod boundary;
pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod page;
pub mod profile;
pub mod responsive;
pub mod reveal;
pub mod scroll;
pub mod section;
pub mod throttle;
pub mod tracker;
pub mod ui;

pub use error::{Error, Result};
