//! Breakpoint and device-class detection from the viewport size.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Width thresholds, each the minimum width of its class.
pub struct Breakpoints {
    /// Small.
    pub sm: u32,
    /// Medium; below this is mobile.
    pub md: u32,
    /// Large; below this (and at least `md`) is tablet.
    pub lg: u32,
    /// Extra large.
    pub xl: u32,
    /// Extra-extra large.
    pub xxl: u32,
}

impl Breakpoints {
    #[must_use]
    /// Pixel breakpoints of the web layout.
    pub const fn web() -> Self {
        Self {
            sm: 640,
            md: 768,
            lg: 1024,
            xl: 1280,
            xxl: 1536,
        }
    }

    #[must_use]
    /// Column breakpoints for terminals.
    pub const fn terminal() -> Self {
        Self {
            sm: 60,
            md: 80,
            lg: 120,
            xl: 160,
            xxl: 200,
        }
    }

    #[must_use]
    /// Device class for a width.
    pub fn device(&self, width: u32) -> DeviceType {
        if width < self.md {
            DeviceType::Mobile
        } else if width < self.lg {
            DeviceType::Tablet
        } else {
            DeviceType::Desktop
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::terminal()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Coarse device class driving layout and reveal policy.
pub enum DeviceType {
    /// Narrow; single column, collapsible menu.
    Mobile,
    /// Medium width.
    Tablet,
    /// Wide.
    Desktop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Aspect of the viewport.
pub enum Orientation {
    /// Taller than wide.
    Portrait,
    /// Wider than tall.
    Landscape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Snapshot of the responsive state for one viewport size.
pub struct Responsive {
    /// Viewport width.
    pub width: u32,
    /// Viewport height.
    pub height: u32,
    /// Device class.
    pub device: DeviceType,
    /// Orientation.
    pub orientation: Orientation,
}

impl Responsive {
    #[must_use]
    /// Classifies a viewport size.
    pub fn from_size(width: u32, height: u32, breakpoints: &Breakpoints) -> Self {
        let orientation = if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        Self {
            width,
            height,
            device: breakpoints.device(width),
            orientation,
        }
    }

    #[must_use]
    /// Whether the mobile layout applies.
    pub fn is_mobile(&self) -> bool {
        self.device == DeviceType::Mobile
    }
}

#[cfg(test)]
#[path = "tests/responsive.rs"]
mod tests;
