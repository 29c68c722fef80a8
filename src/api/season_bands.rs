use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Projector, TimeRange, Viewport};
use crate::render::Color;

use super::AxisEngineConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }
}

/// Background rectangle for one season, already clipped to the range and
/// the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub x: f64,
    pub width: f64,
    pub color: Color,
    pub season: Season,
}

impl Band {
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.season.label()
    }
}

/// Fixed calendar approximations of equinoxes and solstices:
/// `(season, start month, start day, end month, end day, ends next year)`.
const SEASON_DATES: [(Season, u32, u32, u32, u32, bool); 4] = [
    (Season::Spring, 3, 20, 6, 20, false),
    (Season::Summer, 6, 20, 9, 22, false),
    (Season::Autumn, 9, 22, 12, 21, false),
    (Season::Winter, 12, 21, 3, 20, true),
];

#[must_use]
pub fn generate_season_bands(range: TimeRange, viewport: Viewport) -> Vec<Band> {
    generate_season_bands_with_config(&AxisEngineConfig::default(), range, viewport)
}

/// Emits up to four bands per calendar year overlapping the range.
///
/// Returns nothing when the span exceeds `season_band_max_span_days`.
#[must_use]
pub fn generate_season_bands_with_config(
    config: &AxisEngineConfig,
    range: TimeRange,
    viewport: Viewport,
) -> Vec<Band> {
    if range.span_days() > config.season_band_max_span_days {
        return Vec::new();
    }

    let projector = Projector::new(range, viewport, config.margins);
    let offset = config.time_zone.fixed_offset();
    let first_year = range.min_date().with_timezone(&offset).year();
    let last_year = range.max_date().with_timezone(&offset).year();
    let viewport_width = viewport.width_px();

    let mut bands = Vec::new();
    // Winter of the previous year reaches into the first year's spring.
    for year in (first_year - 1)..=last_year {
        for (season, start, end) in season_intervals(year, offset) {
            let start = start.max(range.min_date());
            let end = end.min(range.max_date());
            if end <= start {
                continue;
            }

            let left = projector.to_pixel(start).clamp(0.0, viewport_width);
            let right = projector.to_pixel(end).clamp(0.0, viewport_width);
            let width = right - left;
            if !width.is_finite() || width <= 0.0 {
                continue;
            }
            bands.push(Band {
                x: left,
                width,
                color: config.season_palette.color(season),
                season,
            });
        }
    }
    bands
}

fn season_intervals(
    year: i32,
    offset: FixedOffset,
) -> SmallVec<[(Season, DateTime<Utc>, DateTime<Utc>); 4]> {
    SEASON_DATES
        .iter()
        .filter_map(|&(season, start_month, start_day, end_month, end_day, wraps)| {
            let end_year = if wraps { year + 1 } else { year };
            let start = local_midnight(year, start_month, start_day, offset)?;
            let end = local_midnight(end_year, end_month, end_day, offset)?;
            Some((season, start, end))
        })
        .collect()
}

fn local_midnight(year: i32, month: u32, day: u32, offset: FixedOffset) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_opt(0, 0, 0)?
        .and_local_timezone(offset)
        .single()
        .map(|local| local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::{Season, season_intervals};
    use chrono::{FixedOffset, TimeZone, Utc};

    #[test]
    fn winter_spans_into_next_year() {
        let offset = FixedOffset::east_opt(0).expect("utc offset");
        let intervals = season_intervals(2023, offset);
        assert_eq!(intervals.len(), 4);

        let (season, start, end) = intervals[3];
        assert_eq!(season, Season::Winter);
        assert_eq!(
            start,
            Utc.with_ymd_and_hms(2023, 12, 21, 0, 0, 0)
                .single()
                .expect("valid time")
        );
        assert_eq!(
            end,
            Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0)
                .single()
                .expect("valid time")
        );
    }

    #[test]
    fn seasons_tile_the_year_without_gaps() {
        let offset = FixedOffset::east_opt(0).expect("utc offset");
        let intervals = season_intervals(2024, offset);
        for pair in intervals.windows(2) {
            assert_eq!(pair[0].2, pair[1].1);
        }
    }
}
