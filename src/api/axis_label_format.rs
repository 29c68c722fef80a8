use chrono::{DateTime, Datelike, FixedOffset, Utc};

use super::axis_tick_policy::{
    DAY_MONTH_LABEL_MAX_SPAN_DAYS, DAY_WEEKDAY_MAX_SPAN_DAYS, TickResolution, shows_time_of_day,
};
use super::AxisTimeZone;

/// Label for a generated tick, evaluated in the axis time zone.
pub(super) fn format_tick_label(
    resolution: TickResolution,
    local: DateTime<FixedOffset>,
    span_days: f64,
) -> String {
    let pattern = match resolution {
        // January carries the year so month-only axes stay anchored.
        TickResolution::Month if local.month() == 1 => "%b %Y",
        TickResolution::Month => "%b",
        TickResolution::Day if span_days <= DAY_WEEKDAY_MAX_SPAN_DAYS => "%a %b %-d",
        TickResolution::Day if span_days <= DAY_MONTH_LABEL_MAX_SPAN_DAYS => "%b %-d",
        TickResolution::Day => "%-d",
        TickResolution::Hour => "%H:00",
        TickResolution::Minute => "%H:%M",
    };
    local.format(pattern).to_string()
}

pub(super) fn format_year_label(local: DateTime<FixedOffset>) -> String {
    local.format("%Y").to_string()
}

pub(super) fn format_month_label(local: DateTime<FixedOffset>) -> String {
    local.format("%b %Y").to_string()
}

/// Hover tooltip text: date-only for spans longer than a day, date and
/// time-of-day once hour ticks are shown.
#[must_use]
pub fn tooltip_text(date: DateTime<Utc>, span_days: f64, time_zone: AxisTimeZone) -> String {
    let local = date.with_timezone(&time_zone.fixed_offset());
    let pattern = if shows_time_of_day(span_days) {
        "%a, %b %-d, %Y %H:%M"
    } else {
        "%a, %b %-d, %Y"
    };
    local.format(pattern).to_string()
}
