use serde::{Deserialize, Serialize};

/// RGBA color with channels in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// True when every channel is finite and inside `0..=1`.
    #[must_use]
    pub fn is_normalized(self) -> bool {
        [self.red, self.green, self.blue, self.alpha]
            .into_iter()
            .all(|channel| (0.0..=1.0).contains(&channel))
    }
}

/// Full-height season background between `x` and `x + width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandRect {
    pub x: f64,
    pub width: f64,
    pub color: Color,
}

impl BandRect {
    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }
}

/// Vertical stroke at `x` from `top` down to `bottom`; tick marks and the
/// hover guide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalRule {
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
    pub stroke_width: f64,
    pub color: Color,
}

/// Which point of the label sits on its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    Start,
    Middle,
    End,
}

/// Tick label or hover tooltip, with `y` at the top of the text box.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub anchor: LabelAnchor,
}
