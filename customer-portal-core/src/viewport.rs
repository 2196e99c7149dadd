//! Viewport classification
//!
//! Widths are expressed in abstract layout units. Terminal front-ends convert
//! cell columns with [`Viewport::from_terminal_columns`].

use serde::{Deserialize, Serialize};

/// Reference breakpoint below which the viewport is narrow
pub const DEFAULT_NARROW_BREAKPOINT: u32 = 768;

/// Layout units covered by one terminal cell
pub const UNITS_PER_TERMINAL_COLUMN: u32 = 8;

/// Width threshold separating narrow from wide layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoint(pub u32);

impl Default for Breakpoint {
    fn default() -> Self {
        Self(DEFAULT_NARROW_BREAKPOINT)
    }
}

/// Layout class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Single column, detail shown in an overlay
    Narrow,
    /// Split list / detail panes
    Wide,
}

/// Point-in-time viewport size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in layout units
    pub width: u32,
    pub breakpoint: Breakpoint,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, breakpoint: Breakpoint) -> Self {
        Self { width, breakpoint }
    }

    #[must_use]
    pub fn from_terminal_columns(columns: u16, breakpoint: Breakpoint) -> Self {
        Self::new(u32::from(columns) * UNITS_PER_TERMINAL_COLUMN, breakpoint)
    }

    #[must_use]
    pub fn class(&self) -> ViewportClass {
        if self.width < self.breakpoint.0 {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.class() == ViewportClass::Narrow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        let bp = Breakpoint::default();
        assert!(Viewport::new(767, bp).is_narrow());
        assert_eq!(Viewport::new(768, bp).class(), ViewportClass::Wide);
    }

    #[test]
    fn terminal_columns_scale_to_layout_units() {
        let bp = Breakpoint::default();
        assert!(Viewport::from_terminal_columns(95, bp).is_narrow());
        assert!(!Viewport::from_terminal_columns(96, bp).is_narrow());
        assert_eq!(Viewport::from_terminal_columns(120, bp).width, 960);
    }
}
