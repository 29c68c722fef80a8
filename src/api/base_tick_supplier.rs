use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Utc};
use tracing::trace;

use crate::core::{Projector, TimeRange, Viewport};

use super::axis_label_format::{format_month_label, format_year_label};
use super::{AxisEngineConfig, BaseTick, BaseTickScale};

const NICE_YEAR_STEPS: [i32; 12] = [1, 2, 5, 10, 20, 25, 50, 100, 200, 250, 500, 1000];
const NICE_MONTH_STEPS: [u32; 5] = [1, 2, 3, 6, 12];
/// Year base ticks are used from two years of span upwards.
const YEAR_BASE_MIN_SPAN_DAYS: f64 = 365.0 * 2.0;
const BASE_LABEL_TARGET_PX: f64 = 100.0;

/// Reference coarse tick supplier.
///
/// Emits year ticks at a "nice" step for long spans and month ticks for
/// shorter ones, sized to roughly one label per 100px. Hosts with their own
/// scale chooser can ignore this and pass their ticks directly.
#[must_use]
pub fn nice_base_ticks(
    range: TimeRange,
    viewport: Viewport,
    config: &AxisEngineConfig,
) -> Vec<BaseTick> {
    let projector = Projector::new(range, viewport, config.margins);
    let target = (projector.usable_width() / BASE_LABEL_TARGET_PX).floor().max(1.0);
    let span_days = range.span_days();

    let ticks = if span_days >= YEAR_BASE_MIN_SPAN_DAYS {
        let approx_years = span_days / 365.25;
        let step = NICE_YEAR_STEPS
            .iter()
            .copied()
            .find(|step| approx_years / f64::from(*step) <= target)
            .unwrap_or(NICE_YEAR_STEPS[NICE_YEAR_STEPS.len() - 1]);
        year_ticks(&projector, config, step)
    } else {
        let approx_months = span_days / 30.44;
        let step = NICE_MONTH_STEPS
            .iter()
            .copied()
            .find(|step| approx_months / f64::from(*step) <= target)
            .unwrap_or(NICE_MONTH_STEPS[NICE_MONTH_STEPS.len() - 1]);
        month_ticks(&projector, config, step)
    };

    trace!(count = ticks.len(), span_days, "nice base ticks");
    ticks
}

fn year_ticks(projector: &Projector, config: &AxisEngineConfig, step: i32) -> Vec<BaseTick> {
    let range = projector.range();
    let offset = config.time_zone.fixed_offset();
    let min_year = range.min_date().with_timezone(&offset).year();

    let mut ticks = Vec::new();
    let mut year = min_year.div_euclid(step) * step;
    loop {
        let Some(naive) = NaiveDate::from_ymd_opt(year, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
        else {
            break;
        };
        let Some(local) = naive.and_local_timezone(offset).single() else {
            break;
        };
        let t = local.with_timezone(&Utc);
        if t > range.max_date() {
            break;
        }
        if t >= range.min_date() {
            ticks.push(BaseTick::new(
                t,
                format_year_label(local),
                projector.to_pixel(t),
                BaseTickScale::Year,
            ));
        }
        year += step;
    }
    ticks
}

fn month_ticks(projector: &Projector, config: &AxisEngineConfig, step: u32) -> Vec<BaseTick> {
    let range = projector.range();
    let offset = config.time_zone.fixed_offset();
    let min_local = range.min_date().with_timezone(&offset).date_naive();
    let month0 = min_local.month0();
    let start: Option<NaiveDateTime> =
        NaiveDate::from_ymd_opt(min_local.year(), month0 - month0 % step + 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0));

    let mut ticks = Vec::new();
    let mut cursor = start;
    while let Some(naive) = cursor {
        let Some(local) = naive.and_local_timezone(offset).single() else {
            break;
        };
        let t = local.with_timezone(&Utc);
        if t > range.max_date() {
            break;
        }
        if t >= range.min_date() {
            ticks.push(BaseTick::new(
                t,
                format_month_label(local),
                projector.to_pixel(t),
                BaseTickScale::Month,
            ));
        }
        cursor = naive.checked_add_months(Months::new(step));
    }
    ticks
}
