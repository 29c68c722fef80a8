use chrono::{DateTime, Utc};

use crate::core::{Projector, TimeRange, Viewport};

use super::AxisEngineConfig;

/// Resolves an axis-local pixel to a date with the default margins.
#[must_use]
pub fn pixel_to_date(range: TimeRange, viewport: Viewport, pixel_x: f64) -> DateTime<Utc> {
    pixel_to_date_with_config(&AxisEngineConfig::default(), range, viewport, pixel_x)
}

#[must_use]
pub fn pixel_to_date_with_config(
    config: &AxisEngineConfig,
    range: TimeRange,
    viewport: Viewport,
    pixel_x: f64,
) -> DateTime<Utc> {
    Projector::new(range, viewport, config.margins).to_instant(pixel_x)
}
