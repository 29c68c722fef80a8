use crate::core::Viewport;
use crate::error::{AxisError, AxisResult};
use crate::render::{BandRect, Color, Label, VerticalRule};

/// Slack for band edges computed through the projector.
const EDGE_TOLERANCE_PX: f64 = 1e-6;

/// Everything one axis draw pass paints, in back-to-front order:
/// season bands, then tick and hover rules, then labels.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFrame {
    pub viewport: Viewport,
    pub bands: Vec<BandRect>,
    pub rules: Vec<VerticalRule>,
    pub labels: Vec<Label>,
}

impl AxisFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bands: Vec::new(),
            rules: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Checks that every band, rule and label lands on the axis surface.
    pub fn validate(&self) -> AxisResult<()> {
        if !self.viewport.is_valid() {
            return Err(AxisError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        let width = self.viewport.width_px();
        let height = self.viewport.height_px();
        let on_axis = |x: f64| x.is_finite() && (0.0..=width).contains(&x);

        for band in &self.bands {
            if !band.x.is_finite()
                || !band.width.is_finite()
                || band.width <= 0.0
                || band.x < -EDGE_TOLERANCE_PX
                || band.right() > width + EDGE_TOLERANCE_PX
            {
                return Err(AxisError::InvalidData(format!(
                    "season band [{}, {}] does not fit the {width}px axis",
                    band.x,
                    band.right()
                )));
            }
            check_color(band.color, "season band")?;
        }

        for rule in &self.rules {
            if !on_axis(rule.x) {
                return Err(AxisError::InvalidData(format!(
                    "tick rule at x={} is off the {width}px axis",
                    rule.x
                )));
            }
            if !(0.0..=height).contains(&rule.top)
                || !(rule.top..=height).contains(&rule.bottom)
                || !rule.stroke_width.is_finite()
                || rule.stroke_width <= 0.0
            {
                return Err(AxisError::InvalidData(format!(
                    "tick rule at x={} has invalid extent {}..{}",
                    rule.x, rule.top, rule.bottom
                )));
            }
            check_color(rule.color, "tick rule")?;
        }

        for label in &self.labels {
            if label.text.is_empty() {
                return Err(AxisError::InvalidData(format!(
                    "empty axis label at x={}",
                    label.x
                )));
            }
            if !on_axis(label.x)
                || !label.y.is_finite()
                || !label.font_size_px.is_finite()
                || label.font_size_px <= 0.0
            {
                return Err(AxisError::InvalidData(format!(
                    "axis label `{}` has invalid placement",
                    label.text
                )));
            }
            check_color(label.color, "axis label")?;
        }
        Ok(())
    }
}

fn check_color(color: Color, what: &str) -> AxisResult<()> {
    if color.is_normalized() {
        Ok(())
    } else {
        Err(AxisError::InvalidData(format!(
            "{what} color channels must lie in [0, 1]"
        )))
    }
}
