use crate::core::Viewport;
use crate::render::{AxisFrame, BandRect, Color, Label, LabelAnchor, VerticalRule};

use super::{AxisLayout, TickLevel};

const TICK_COLOR: Color = Color::rgb(0.35, 0.38, 0.42);
const LABEL_COLOR: Color = Color::rgb(0.18, 0.20, 0.24);
const HOVER_COLOR: Color = Color::rgba(0.10, 0.45, 0.85, 0.85);
const LABEL_GAP_PX: f64 = 3.0;
const HOVER_LABEL_FONT_SIZE_PX: f64 = 11.0;

/// `(tick mark length, label font size)` per level.
fn level_metrics(level: TickLevel) -> (f64, f64) {
    match level {
        TickLevel::Primary => (14.0, 13.0),
        TickLevel::Secondary => (10.0, 12.0),
        TickLevel::Tertiary => (7.0, 11.0),
        TickLevel::Quaternary => (5.0, 10.0),
    }
}

/// Materializes bands, ticks, labels and the hover guide into primitives.
///
/// Ticks whose `x` is non-finite or outside the viewport are skipped so the
/// frame always validates.
#[must_use]
pub fn build_axis_frame(
    layout: &AxisLayout,
    viewport: Viewport,
    hover: Option<(f64, String)>,
) -> AxisFrame {
    let mut frame = AxisFrame::new(viewport);
    let width = viewport.width_px();
    let height = viewport.height_px();
    let on_screen = |x: f64| x.is_finite() && (0.0..=width).contains(&x);

    frame.bands.extend(layout.bands.iter().map(|band| BandRect {
        x: band.x,
        width: band.width,
        color: band.color,
    }));

    for tick in layout.ticks.iter().filter(|tick| on_screen(tick.x)) {
        let (mark_length, font_size) = level_metrics(tick.level);
        let bottom = mark_length.min(height);
        frame.rules.push(VerticalRule {
            x: tick.x,
            top: 0.0,
            bottom,
            stroke_width: 1.0,
            color: TICK_COLOR,
        });
        if !tick.label.is_empty() {
            frame.labels.push(Label {
                text: tick.label.clone(),
                x: tick.x,
                y: bottom + LABEL_GAP_PX,
                font_size_px: font_size,
                color: LABEL_COLOR,
                anchor: LabelAnchor::Middle,
            });
        }
    }

    if let Some((x, tooltip)) = hover.filter(|(x, _)| on_screen(*x)) {
        frame.rules.push(VerticalRule {
            x,
            top: 0.0,
            bottom: height,
            stroke_width: 1.0,
            color: HOVER_COLOR,
        });
        if !tooltip.is_empty() {
            // Tooltips open toward the wider side of the axis.
            let anchor = if x > width / 2.0 {
                LabelAnchor::End
            } else {
                LabelAnchor::Start
            };
            frame.labels.push(Label {
                text: tooltip,
                x,
                y: (height - HOVER_LABEL_FONT_SIZE_PX - LABEL_GAP_PX).max(0.0),
                font_size_px: HOVER_LABEL_FONT_SIZE_PX,
                color: HOVER_COLOR,
                anchor,
            });
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::build_axis_frame;
    use crate::api::{AxisLayout, Tick, TickLevel, TickType};
    use crate::core::Viewport;
    use crate::render::LabelAnchor;
    use chrono::{TimeZone, Utc};

    fn tick(x: f64, level: TickLevel) -> Tick {
        Tick {
            t: Utc
                .with_ymd_and_hms(2024, 3, 11, 0, 0, 0)
                .single()
                .expect("valid time"),
            label: "Mar 11".to_owned(),
            x,
            level,
            kind: TickType::Day,
        }
    }

    #[test]
    fn off_axis_ticks_are_skipped_and_frame_validates() {
        let layout = AxisLayout {
            span_days: 1.0,
            ticks: vec![tick(-5.0, TickLevel::Primary), tick(200.0, TickLevel::Tertiary)],
            bands: Vec::new(),
        };
        let frame = build_axis_frame(&layout, Viewport::new(400, 6), None);

        assert_eq!(frame.rules.len(), 1);
        assert_eq!(frame.rules[0].bottom, 6.0);
        assert_eq!(frame.labels[0].anchor, LabelAnchor::Middle);
        frame.validate().expect("frame should validate");
    }

    #[test]
    fn tooltip_opens_toward_the_wider_side() {
        let layout = AxisLayout {
            span_days: 1.0,
            ticks: Vec::new(),
            bands: Vec::new(),
        };
        let viewport = Viewport::new(400, 60);

        let left = build_axis_frame(&layout, viewport, Some((100.0, "tip".to_owned())));
        assert_eq!(left.labels[0].anchor, LabelAnchor::Start);
        let right = build_axis_frame(&layout, viewport, Some((350.0, "tip".to_owned())));
        assert_eq!(right.labels[0].anchor, LabelAnchor::End);
        assert_eq!(right.rules[0].bottom, 60.0);
    }
}
