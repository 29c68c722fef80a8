use chrono::{DateTime, Utc};

use crate::core::primitives::{datetime_to_unix_millis, unix_millis_to_datetime};
use crate::core::{AxisMargins, TimeRange, Viewport};

/// Linear map between instants and horizontal pixel positions.
///
/// All tick, band and pointer math goes through this pair of functions so
/// the forward and inverse projections stay consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    range: TimeRange,
    min_ms: f64,
    span_ms: f64,
    left: f64,
    usable_width: f64,
}

impl Projector {
    #[must_use]
    pub fn new(range: TimeRange, viewport: Viewport, margins: AxisMargins) -> Self {
        Self {
            range,
            min_ms: range.min_millis(),
            span_ms: range.span_millis(),
            left: margins.left,
            usable_width: margins.usable_width(viewport),
        }
    }

    #[must_use]
    pub fn range(&self) -> TimeRange {
        self.range
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn usable_width(&self) -> f64 {
        self.usable_width
    }

    /// Right edge of the drawable band.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.usable_width
    }

    #[must_use]
    pub fn to_pixel(&self, time: DateTime<Utc>) -> f64 {
        self.millis_to_pixel(datetime_to_unix_millis(time))
    }

    #[must_use]
    pub fn millis_to_pixel(&self, millis: f64) -> f64 {
        self.left + ((millis - self.min_ms) / self.span_ms) * self.usable_width
    }

    /// Inverse of [`Projector::millis_to_pixel`], clamped to the visible range.
    ///
    /// A NaN pixel propagates as NaN.
    #[must_use]
    pub fn to_millis(&self, x: f64) -> f64 {
        let ratio = (x - self.left) / self.usable_width;
        self.min_ms + ratio.clamp(0.0, 1.0) * self.span_ms
    }

    /// Resolves a pixel to an instant; pixels outside the band resolve to the
    /// nearest range boundary and non-finite pixels to `min_date`.
    #[must_use]
    pub fn to_instant(&self, x: f64) -> DateTime<Utc> {
        let millis = if x.is_finite() {
            self.to_millis(x)
        } else {
            self.min_ms
        };
        unix_millis_to_datetime(millis)
            .map(|time| time.clamp(self.range.min_date(), self.range.max_date()))
            .unwrap_or_else(|| self.range.min_date())
    }
}
