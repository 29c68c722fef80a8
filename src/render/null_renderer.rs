use crate::error::AxisResult;
use crate::render::{AxisFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// Frames are still validated, so geometry that falls off the axis fails.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_band_count: usize,
    pub last_rule_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &AxisFrame) -> AxisResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_band_count = frame.bands.len();
        self.last_rule_count = frame.rules.len();
        self.last_label_count = frame.labels.len();
        Ok(())
    }
}
