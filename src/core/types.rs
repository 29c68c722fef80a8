use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Pixel size of the axis drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// Horizontal space reserved on both sides of the drawable band.
///
/// The left side hosts navigation chrome, so it is usually wider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMargins {
    pub left: f64,
    pub right: f64,
}

impl Default for AxisMargins {
    fn default() -> Self {
        Self {
            left: 60.0,
            right: 20.0,
        }
    }
}

impl AxisMargins {
    #[must_use]
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Drawable width between the margins, floored at one pixel.
    #[must_use]
    pub fn usable_width(self, viewport: Viewport) -> f64 {
        (viewport.width_px() - self.left - self.right).max(1.0)
    }

    #[must_use]
    pub fn fits(self, viewport: Viewport) -> bool {
        viewport.width_px() - self.left - self.right >= 1.0
    }

    pub fn validate(self) -> AxisResult<Self> {
        if !self.left.is_finite() || !self.right.is_finite() || self.left < 0.0 || self.right < 0.0
        {
            return Err(AxisError::InvalidConfig(
                "axis margins must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}
