//! Responsive breakpoint shared by every widget and generated stylesheet.

use serde::{Deserialize, Serialize};

/// Widest viewport, in CSS pixels, that is still laid out as "narrow".
pub const NARROW_MAX_WIDTH_PX: u32 = 768;

/// Width assumed when the client did not report one.
pub const DEFAULT_VIEWPORT_WIDTH_PX: u32 = 1280;

/// Horizontal space available to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub const fn new(width: u32) -> Self {
        Self { width }
    }

    pub const fn is_narrow(self) -> bool {
        self.width <= NARROW_MAX_WIDTH_PX
    }

    pub const fn layout(self) -> Layout {
        if self.is_narrow() {
            Layout::Stacked
        } else {
            Layout::Inline
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH_PX)
    }
}

/// Arrangement of sibling controls inside a widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Controls share one row.
    Inline,
    /// Controls are placed one under another.
    Stacked,
}
