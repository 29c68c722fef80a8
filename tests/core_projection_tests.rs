use approx::assert_abs_diff_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};
use timeline_axis::AxisError;
use timeline_axis::api::pixel_to_date;
use timeline_axis::core::{AxisMargins, MS_PER_HOUR, Projector, TimeRange, Viewport};

fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid utc time")
}

#[test]
fn projection_round_trip_within_tolerance() {
    let range = TimeRange::new(utc(1900, 1, 1, 0), utc(2024, 1, 1, 0)).expect("valid range");
    let projector = Projector::new(range, Viewport::new(1280, 80), AxisMargins::default());

    let original = utc(1969, 7, 20, 20);
    let px = projector.to_pixel(original);
    let recovered = projector.to_instant(px);

    assert!((recovered - original).num_milliseconds().abs() <= 1);
}

#[test]
fn projection_is_linear_between_margins() {
    let range = TimeRange::new(utc(2024, 1, 1, 0), utc(2024, 1, 1, 10)).expect("valid range");
    let projector = Projector::new(range, Viewport::new(1000, 80), AxisMargins::new(100.0, 100.0));

    assert_abs_diff_eq!(projector.to_pixel(utc(2024, 1, 1, 5)), 500.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        projector.to_millis(180.0) - range.min_millis(),
        MS_PER_HOUR,
        epsilon = 1e-3
    );
}

#[test]
fn pixel_to_date_clamps_outside_drawable_band() {
    let range = TimeRange::new(utc(2024, 1, 1, 0), utc(2024, 2, 1, 0)).expect("valid range");
    let viewport = Viewport::new(800, 80);

    assert_eq!(pixel_to_date(range, viewport, 0.0), range.min_date());
    assert_eq!(pixel_to_date(range, viewport, 10_000.0), range.max_date());
    assert_eq!(pixel_to_date(range, viewport, 60.0), range.min_date());
    assert_eq!(pixel_to_date(range, viewport, 780.0), range.max_date());
}

#[test]
fn zero_and_negative_ranges_are_rejected() {
    let at = utc(2024, 1, 1, 0);
    assert!(matches!(
        TimeRange::new(at, at),
        Err(AxisError::InvalidTimeRange { .. })
    ));
    assert!(TimeRange::new(at, at - Duration::hours(1)).is_err());
}

#[test]
fn normalized_range_widens_degenerate_bounds() {
    let at = utc(2024, 1, 1, 12);
    let range = TimeRange::normalized(at, at, Duration::hours(2)).expect("widened range");
    assert_eq!(range.min_date(), utc(2024, 1, 1, 11));
    assert_eq!(range.max_date(), utc(2024, 1, 1, 13));

    let swapped = TimeRange::normalized(utc(2024, 2, 1, 0), utc(2024, 1, 1, 0), Duration::hours(1))
        .expect("swapped bounds");
    assert_eq!(swapped.min_date(), utc(2024, 1, 1, 0));
}

#[test]
fn fit_instants_pads_event_span() {
    let events = [utc(2024, 1, 11, 0), utc(2024, 1, 1, 0), utc(2024, 1, 6, 0)];
    let range = TimeRange::fit_instants(&events, 0.1).expect("fitted range");
    assert_eq!(range.min_date(), utc(2023, 12, 31, 0));
    assert_eq!(range.max_date(), utc(2024, 1, 12, 0));
    assert!(!range.is_zoomed());
    assert!(range.with_zoomed(true).is_zoomed());

    let single = TimeRange::fit_instants(&[utc(2024, 1, 1, 12)], 0.0).expect("single event");
    assert_abs_diff_eq!(single.span_days(), 1.0, epsilon = 1e-12);
    assert!(TimeRange::fit_instants(&[], 0.1).is_err());
}

#[test]
fn usable_width_floor_keeps_projection_finite() {
    let range = TimeRange::new(utc(2024, 1, 1, 0), utc(2024, 1, 2, 0)).expect("valid range");
    let margins = AxisMargins::default();
    let viewport = Viewport::new(40, 80);

    assert!(!margins.fits(viewport));
    assert_eq!(margins.usable_width(viewport), 1.0);
    let projector = Projector::new(range, viewport, margins);
    assert!(projector.to_pixel(utc(2024, 1, 1, 12)).is_finite());
}

#[test]
fn deserialized_ranges_are_validated() {
    let degenerate = r#"{ "min_date": "2024-03-01T00:00:00Z", "max_date": "2024-03-01T00:00:00Z", "is_zoomed": false }"#;
    let error = serde_json::from_str::<TimeRange>(degenerate).expect_err("zero span must be rejected");
    assert!(error.to_string().contains("invalid time range"));

    let inverted = r#"{ "min_date": "2024-03-02T00:00:00Z", "max_date": "2024-03-01T00:00:00Z" }"#;
    assert!(serde_json::from_str::<TimeRange>(inverted).is_err());

    let zoomed = r#"{ "min_date": "2024-03-01T00:00:00Z", "max_date": "2024-03-02T00:00:00Z", "is_zoomed": true }"#;
    let range: TimeRange = serde_json::from_str(zoomed).expect("valid range");
    assert!(range.is_zoomed());
    assert_eq!(range.max_date(), utc(2024, 3, 2, 0));

    let json = serde_json::to_string(&range).expect("range should serialize");
    assert_eq!(serde_json::from_str::<TimeRange>(&json).expect("round trip"), range);
}
