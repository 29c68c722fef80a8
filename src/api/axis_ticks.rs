use chrono::Utc;
use tracing::trace;

use crate::core::{Projector, TimeRange, Viewport};

use super::axis_label_format::format_tick_label;
use super::axis_tick_policy::{BaseScales, TICK_RESOLUTIONS, TickResolution};
use super::{AxisEngineConfig, BaseTick, Tick, TickLevel};

/// Generates the full tick set with the default engine configuration.
#[must_use]
pub fn generate_ticks(range: TimeRange, viewport: Viewport, base_ticks: &[BaseTick]) -> Vec<Tick> {
    generate_ticks_with_config(&AxisEngineConfig::default(), range, viewport, base_ticks)
}

#[must_use]
pub fn generate_ticks_with_config(
    config: &AxisEngineConfig,
    range: TimeRange,
    viewport: Viewport,
    base_ticks: &[BaseTick],
) -> Vec<Tick> {
    let projector = Projector::new(range, viewport, config.margins);
    TickGenerator::new(config, projector).generate(base_ticks)
}

/// Adds month/day/hour/minute ticks on top of caller-supplied base ticks.
///
/// Candidates are accepted in resolution order and each one is checked
/// against every tick accepted so far, so coarser levels always win.
#[derive(Debug, Clone, Copy)]
pub struct TickGenerator<'a> {
    config: &'a AxisEngineConfig,
    projector: Projector,
}

impl<'a> TickGenerator<'a> {
    #[must_use]
    pub fn new(config: &'a AxisEngineConfig, projector: Projector) -> Self {
        Self { config, projector }
    }

    /// Returns base plus generated ticks sorted ascending by `x`.
    #[must_use]
    pub fn generate(&self, base_ticks: &[BaseTick]) -> Vec<Tick> {
        let span_days = self.projector.range().span_days();
        let base = BaseScales::from_ticks(base_ticks);
        let mut ticks = fold_base_ticks(base_ticks, base);

        for resolution in TICK_RESOLUTIONS {
            if resolution.activates(span_days, base) {
                self.append_resolution(resolution, span_days, &mut ticks);
            }
        }

        ticks.sort_by(|left, right| left.x.total_cmp(&right.x));
        ticks
    }

    fn append_resolution(&self, resolution: TickResolution, span_days: f64, ticks: &mut Vec<Tick>) {
        let range = self.projector.range();
        let offset = self.config.time_zone.fixed_offset();
        let step = resolution.step(span_days);
        let level = resolution.level(span_days);
        let min_local = range.min_date().with_timezone(&offset).naive_local();
        let max_local = range.max_date().with_timezone(&offset).naive_local();

        let mut accepted = 0_usize;
        let mut suppressed = 0_usize;
        let mut cursor = resolution.first_candidate(min_local, step);
        while let Some(candidate) = cursor {
            if candidate > max_local {
                break;
            }
            cursor = resolution.advance(candidate, step);
            if candidate < min_local {
                continue;
            }
            let Some(local) = candidate.and_local_timezone(offset).single() else {
                continue;
            };

            let x = self.projector.to_pixel(local.with_timezone(&Utc));
            if !clears_spacing(resolution, level, x, ticks, self.config) {
                suppressed += 1;
                continue;
            }
            ticks.push(Tick {
                t: local.with_timezone(&Utc),
                label: format_tick_label(resolution, local, span_days),
                x,
                level,
                kind: resolution.tick_type(),
            });
            accepted += 1;
        }

        trace!(
            resolution = ?resolution,
            step,
            accepted,
            suppressed,
            "tick resolution generated"
        );
    }
}

/// Collision filter: a candidate survives only if it keeps the resolution's
/// minimum distance from every already accepted tick the rule applies to.
fn clears_spacing(
    resolution: TickResolution,
    level: TickLevel,
    x: f64,
    accepted: &[Tick],
    config: &AxisEngineConfig,
) -> bool {
    accepted.iter().all(|tick| {
        resolution
            .min_spacing_against(level, tick, &config.spacing)
            .is_none_or(|min_spacing| (x - tick.x).abs() >= min_spacing)
    })
}

fn fold_base_ticks(base_ticks: &[BaseTick], base: BaseScales) -> Vec<Tick> {
    let promote_months = base.month_only();
    base_ticks
        .iter()
        .map(|tick| Tick {
            t: tick.t,
            label: tick.label.clone(),
            x: tick.x,
            level: if promote_months {
                TickLevel::Primary
            } else {
                tick.scale.default_level()
            },
            kind: tick.scale.tick_type(),
        })
        .collect()
}
