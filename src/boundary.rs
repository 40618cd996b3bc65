//! Containment for failures while producing the page.
//!
//! A failure inside the boundary replaces the page with a generic error panel instead of
//! tearing down the terminal. The error is logged locally and kept for display. The panel
//! offers a retry, which clears the error and renders again, and a reload, which the host
//! implements by composing the page from scratch.

use std::fmt::Display;

#[derive(Debug, Default)]
/// Remembers the first failure until the user retries.
pub struct ErrorBoundary {
    error: Option<String>,
}

impl ErrorBoundary {
    #[must_use]
    /// Boundary in the healthy state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `render` unless the boundary has tripped, trapping its error.
    ///
    /// Returns the rendered value, or `None` when the error panel should be shown instead.
    pub fn render<T, E: Display>(&mut self, render: impl FnOnce() -> Result<T, E>) -> Option<T> {
        if self.error.is_some() {
            return None;
        }
        match render() {
            Ok(value) => Some(value),
            Err(e) => {
                self.trip(&e);
                None
            }
        }
    }

    /// Records a failure raised outside [`ErrorBoundary::render`].
    pub fn trip(&mut self, error: &impl Display) {
        tracing::error!(error = %error, "error boundary caught a failure");
        self.error = Some(error.to_string());
    }

    #[must_use]
    /// Whether the error panel is showing.
    pub fn is_tripped(&self) -> bool {
        self.error.is_some()
    }

    #[must_use]
    /// Message of the trapped failure.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clears the failure so the next render runs again.
    pub fn retry(&mut self) {
        if self.error.take().is_some() {
            tracing::info!("error boundary reset");
        }
    }
}

#[cfg(test)]
#[path = "tests/boundary.rs"]
mod tests;
