mod frame;
mod null_renderer;
mod primitives;

pub use frame::AxisFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{BandRect, Color, Label, LabelAnchor, VerticalRule};

use crate::error::AxisResult;

/// Contract implemented by any drawing surface hosting the axis.
///
/// Backends receive a fully materialized `AxisFrame`, so drawing code stays
/// isolated from tick policy and pointer handling.
pub trait Renderer {
    fn render(&mut self, frame: &AxisFrame) -> AxisResult<()>;
}
