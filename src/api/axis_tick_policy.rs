use chrono::{Datelike, Days, Months, NaiveDateTime, TimeDelta, Timelike};

use super::{BaseTick, BaseTickScale, Tick, TickLevel, TickSpacingPolicy, TickType};

/// Month ticks are generated below twelve years of span.
pub const MONTH_MAX_SPAN_DAYS: f64 = 365.0 * 12.0;
pub const DAY_MAX_SPAN_DAYS: f64 = 90.0;
/// Inclusive: a one-day span still gets hour ticks.
pub const HOUR_MAX_SPAN_DAYS: f64 = 1.0;
pub const MINUTE_MAX_SPAN_DAYS: f64 = 2.0 / 24.0;
/// Day ticks carry a weekday at or below this span and become secondary.
pub const DAY_WEEKDAY_MAX_SPAN_DAYS: f64 = 14.0;
pub const DAY_MONTH_LABEL_MAX_SPAN_DAYS: f64 = 45.0;

/// True when the span is short enough for hour ticks.
///
/// Tooltips share this predicate so hover precision matches the ticks shown.
#[must_use]
pub fn shows_time_of_day(span_days: f64) -> bool {
    span_days > 0.0 && span_days <= HOUR_MAX_SPAN_DAYS
}

/// Scales already covered by the caller's base ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseScales {
    pub year: bool,
    pub month: bool,
    pub day: bool,
    pub hour: bool,
}

impl BaseScales {
    #[must_use]
    pub fn from_ticks(base_ticks: &[BaseTick]) -> Self {
        let mut scales = Self::default();
        for tick in base_ticks {
            match tick.scale {
                BaseTickScale::Year => scales.year = true,
                BaseTickScale::Month => scales.month = true,
                BaseTickScale::Day => scales.day = true,
                BaseTickScale::Hour => scales.hour = true,
            }
        }
        scales
    }

    /// Month ticks are the only scale present, so they act as primary.
    #[must_use]
    pub fn month_only(self) -> bool {
        self.month && !self.year && !self.day && !self.hour
    }
}

/// One finer resolution the generator may add on top of the base ticks.
///
/// Each variant owns its activation window, step rule, level, spacing rule
/// and calendar walk; [`TICK_RESOLUTIONS`] is the evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickResolution {
    Month,
    Day,
    Hour,
    Minute,
}

pub const TICK_RESOLUTIONS: [TickResolution; 4] = [
    TickResolution::Month,
    TickResolution::Day,
    TickResolution::Hour,
    TickResolution::Minute,
];

impl TickResolution {
    #[must_use]
    pub fn tick_type(self) -> TickType {
        match self {
            Self::Month => TickType::Month,
            Self::Day => TickType::Day,
            Self::Hour => TickType::Hour,
            Self::Minute => TickType::Minute,
        }
    }

    #[must_use]
    pub fn activates(self, span_days: f64, base: BaseScales) -> bool {
        match self {
            Self::Month => span_days > 0.0 && span_days < MONTH_MAX_SPAN_DAYS && !base.month,
            // Zero spans are rejected here rather than relying on the walk ending.
            Self::Day => span_days > 0.0 && span_days < DAY_MAX_SPAN_DAYS && !base.day,
            Self::Hour => shows_time_of_day(span_days) && !base.hour,
            Self::Minute => span_days > 0.0 && span_days < MINUTE_MAX_SPAN_DAYS,
        }
    }

    /// Calendar units between consecutive candidates.
    #[must_use]
    pub fn step(self, span_days: f64) -> u32 {
        match self {
            Self::Month => {
                let approx_months = (span_days / 30.0).floor().max(0.0);
                ((approx_months / 16.0).ceil() as u32).max(1)
            }
            Self::Day => ((span_days / 20.0).floor().max(0.0) as u32).max(1),
            Self::Hour => {
                let span_hours = span_days * 24.0;
                if span_hours < 6.0 {
                    1
                } else if span_hours < 12.0 {
                    2
                } else if span_hours < 24.0 {
                    6
                } else {
                    12
                }
            }
            Self::Minute => {
                let span_minutes = span_days * 24.0 * 60.0;
                if span_minutes < 30.0 {
                    5
                } else if span_minutes < 60.0 {
                    10
                } else if span_minutes < 120.0 {
                    15
                } else {
                    30
                }
            }
        }
    }

    #[must_use]
    pub fn level(self, span_days: f64) -> TickLevel {
        match self {
            Self::Month => TickLevel::Secondary,
            Self::Day if span_days <= DAY_WEEKDAY_MAX_SPAN_DAYS => TickLevel::Secondary,
            Self::Day => TickLevel::Tertiary,
            Self::Hour | Self::Minute => TickLevel::Quaternary,
        }
    }

    /// Minimum distance a candidate at `candidate_level` must keep from
    /// `accepted`, or `None` when the pair is not checked.
    #[must_use]
    pub fn min_spacing_against(
        self,
        candidate_level: TickLevel,
        accepted: &Tick,
        spacing: &TickSpacingPolicy,
    ) -> Option<f64> {
        match self {
            Self::Month => {
                (accepted.level == TickLevel::Primary).then_some(spacing.month_vs_primary_px)
            }
            Self::Day if accepted.level == candidate_level => Some(spacing.day_same_level_px),
            Self::Day => Some(spacing.day_other_level_px),
            Self::Hour => Some(spacing.hour_px),
            Self::Minute => Some(spacing.minute_px),
        }
    }

    /// Normalized walk start at or before `min_local`: the beginning of the
    /// month, day or hour, or the minute floored to a multiple of `step`.
    #[must_use]
    pub fn first_candidate(self, min_local: NaiveDateTime, step: u32) -> Option<NaiveDateTime> {
        let date = min_local.date();
        let step = step.max(1);
        match self {
            Self::Month => date.with_day0(0)?.and_hms_opt(0, 0, 0),
            Self::Day => date.and_hms_opt(0, 0, 0),
            Self::Hour => date.and_hms_opt(min_local.hour(), 0, 0),
            Self::Minute => {
                let minute = min_local.minute();
                date.and_hms_opt(min_local.hour(), minute - minute % step, 0)
            }
        }
    }

    #[must_use]
    pub fn advance(self, cursor: NaiveDateTime, step: u32) -> Option<NaiveDateTime> {
        let step = step.max(1);
        match self {
            Self::Month => cursor.checked_add_months(Months::new(step)),
            Self::Day => cursor.checked_add_days(Days::new(u64::from(step))),
            Self::Hour => cursor.checked_add_signed(TimeDelta::hours(i64::from(step))),
            Self::Minute => cursor.checked_add_signed(TimeDelta::minutes(i64::from(step))),
        }
    }
}
