use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::primitives::{MS_PER_DAY, datetime_to_unix_millis};
use crate::error::{AxisError, AxisResult};

/// Visible time interval of the axis.
///
/// `max_date` is always strictly after `min_date`; degenerate ranges are
/// rejected by [`TimeRange::new`] or widened by [`TimeRange::normalized`].
/// Deserialization goes through [`TimeRange::new`] as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimeRangeWire")]
pub struct TimeRange {
    min_date: DateTime<Utc>,
    max_date: DateTime<Utc>,
    is_zoomed: bool,
}

/// Unvalidated wire shape of [`TimeRange`].
#[derive(Deserialize)]
struct TimeRangeWire {
    min_date: DateTime<Utc>,
    max_date: DateTime<Utc>,
    #[serde(default)]
    is_zoomed: bool,
}

impl TryFrom<TimeRangeWire> for TimeRange {
    type Error = AxisError;

    fn try_from(wire: TimeRangeWire) -> AxisResult<Self> {
        Ok(Self::new(wire.min_date, wire.max_date)?.with_zoomed(wire.is_zoomed))
    }
}

impl TimeRange {
    pub fn new(min_date: DateTime<Utc>, max_date: DateTime<Utc>) -> AxisResult<Self> {
        if max_date <= min_date {
            return Err(AxisError::InvalidTimeRange {
                min_ms: min_date.timestamp_millis(),
                max_ms: max_date.timestamp_millis(),
            });
        }
        Ok(Self {
            min_date,
            max_date,
            is_zoomed: false,
        })
    }

    /// Builds a range from possibly swapped or equal bounds.
    ///
    /// Equal bounds are widened symmetrically to `min_span`.
    pub fn normalized(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        min_span: Duration,
    ) -> AxisResult<Self> {
        if min_span <= Duration::zero() {
            return Err(AxisError::InvalidData(
                "minimum span must be positive".to_owned(),
            ));
        }

        if start == end {
            let half = min_span / 2;
            warn!(
                at = %start,
                min_span_ms = min_span.num_milliseconds(),
                "widening degenerate time range"
            );
            let min_date = start.checked_sub_signed(half).ok_or_else(out_of_range)?;
            let max_date = end
                .checked_add_signed(min_span - half)
                .ok_or_else(out_of_range)?;
            return Self::new(min_date, max_date);
        }

        Self::new(start.min(end), start.max(end))
    }

    /// Fits a range around event instants, padded on both sides by
    /// `padding_ratio` of the raw span.
    ///
    /// A single distinct instant yields a one-day window centred on it.
    pub fn fit_instants(instants: &[DateTime<Utc>], padding_ratio: f64) -> AxisResult<Self> {
        if !padding_ratio.is_finite() || padding_ratio < 0.0 {
            return Err(AxisError::InvalidData(
                "padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        let (Some(min), Some(max)) = (instants.iter().min(), instants.iter().max()) else {
            return Err(AxisError::InvalidData(
                "time range cannot be fitted to empty data".to_owned(),
            ));
        };

        let fitted = Self::normalized(*min, *max, Duration::days(1))?;
        let span_ms = fitted.span_millis();
        let pad = Duration::milliseconds((span_ms * padding_ratio).round() as i64);
        let min_date = fitted
            .min_date
            .checked_sub_signed(pad)
            .ok_or_else(out_of_range)?;
        let max_date = fitted
            .max_date
            .checked_add_signed(pad)
            .ok_or_else(out_of_range)?;
        Self::new(min_date, max_date)
    }

    #[must_use]
    pub fn with_zoomed(mut self, is_zoomed: bool) -> Self {
        self.is_zoomed = is_zoomed;
        self
    }

    #[must_use]
    pub fn min_date(self) -> DateTime<Utc> {
        self.min_date
    }

    #[must_use]
    pub fn max_date(self) -> DateTime<Utc> {
        self.max_date
    }

    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.is_zoomed
    }

    #[must_use]
    pub fn date_range(self) -> Duration {
        self.max_date - self.min_date
    }

    #[must_use]
    pub fn min_millis(self) -> f64 {
        datetime_to_unix_millis(self.min_date)
    }

    #[must_use]
    pub fn span_millis(self) -> f64 {
        datetime_to_unix_millis(self.max_date) - datetime_to_unix_millis(self.min_date)
    }

    #[must_use]
    pub fn span_days(self) -> f64 {
        self.span_millis() / MS_PER_DAY
    }

    #[must_use]
    pub fn contains(self, time: DateTime<Utc>) -> bool {
        self.min_date <= time && time <= self.max_date
    }
}

fn out_of_range() -> AxisError {
    AxisError::InvalidData("time range bounds are out of representable range".to_owned())
}
