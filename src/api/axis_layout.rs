use serde::{Deserialize, Serialize};

use crate::core::{TimeRange, Viewport};
use crate::interaction::HoverState;

use super::{Band, Tick};

/// Memoized output of one tick + band generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub span_days: f64,
    pub ticks: Vec<Tick>,
    pub bands: Vec<Band>,
}

/// Serializable engine state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub viewport: Viewport,
    pub range: TimeRange,
    pub hover: HoverState,
    pub layout: AxisLayout,
}
