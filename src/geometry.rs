//! Document-space geometry: extents, the viewport, and margin-adjusted intersection.
//!
//! All values are in abstract units. The terminal host uses rows; nothing here cares.

#[derive(Clone, Copy, Debug, PartialEq)]
/// A vertical region of the document.
pub struct Extent {
    /// Distance from the document origin to the region's top edge.
    pub top: f64,
    /// Height of the region.
    pub height: f64,
}

impl Extent {
    #[must_use]
    /// Creates an extent; negative heights collapse to zero.
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    #[must_use]
    /// Bottom edge in document coordinates.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// The visible window onto the document.
pub struct Viewport {
    /// Current vertical scroll offset.
    pub scroll_y: f64,
    /// Visible height.
    pub height: f64,
    /// Full height of the scrollable document.
    pub document_height: f64,
}

impl Viewport {
    #[must_use]
    /// Viewport at the top of a document.
    pub fn new(height: f64, document_height: f64) -> Self {
        Self {
            scroll_y: 0.0,
            height,
            document_height,
        }
    }

    #[must_use]
    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.height).max(0.0)
    }

    /// Moves the viewport, clamping the way a browser clamps `scrollTo`.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
    }

    /// Moves the viewport by a delta.
    pub fn scroll_by(&mut self, dy: f64) {
        self.scroll_to(self.scroll_y + dy);
    }

    #[must_use]
    /// Visible region in document coordinates.
    pub fn visible(&self) -> Extent {
        Extent::new(self.scroll_y, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Fractions of the viewport excluded from the top and bottom before intersecting.
pub struct EdgeMargin {
    /// Fraction of viewport height removed from the top edge.
    pub top: f64,
    /// Fraction of viewport height removed from the bottom edge.
    pub bottom: f64,
}

impl Default for EdgeMargin {
    fn default() -> Self {
        Self {
            top: 0.2,
            bottom: 0.7,
        }
    }
}

impl EdgeMargin {
    #[must_use]
    /// The margin-adjusted band of the viewport in document coordinates.
    ///
    /// Margins that overlap leave a zero-height band at the top margin's edge.
    pub fn band(&self, viewport: &Viewport) -> Extent {
        let top = viewport.scroll_y + viewport.height * self.top.clamp(0.0, 1.0);
        let bottom = viewport.scroll_y + viewport.height * (1.0 - self.bottom.clamp(0.0, 1.0));
        Extent::new(top, bottom - top)
    }
}

#[must_use]
/// Fraction of `target` inside `band`, and whether they intersect at all.
///
/// Follows `IntersectionObserver`: the ratio is relative to the target, not the band. A
/// zero-height target intersects (with ratio 1) when its top lies within the band.
pub fn intersect(target: Extent, band: Extent) -> (f64, bool) {
    if target.height <= 0.0 {
        let inside = target.top >= band.top && target.top <= band.bottom();
        return (if inside { 1.0 } else { 0.0 }, inside);
    }
    let overlap = target.bottom().min(band.bottom()) - target.top.max(band.top);
    if overlap <= 0.0 {
        return (0.0, false);
    }
    ((overlap / target.height).clamp(0.0, 1.0), true)
}

#[must_use]
/// Fraction of `band` covered by `target`, in `[0, 1]`.
///
/// Useful when targets are much taller than the band: a section filling the band scores 1 no
/// matter how long it is.
pub fn coverage(target: Extent, band: Extent) -> f64 {
    if band.height <= 0.0 {
        return if target.top <= band.top && band.top <= target.bottom() {
            1.0
        } else {
            0.0
        };
    }
    let overlap = target.bottom().min(band.bottom()) - target.top.max(band.top);
    (overlap / band.height).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "tests/geometry.rs"]
mod tests;
