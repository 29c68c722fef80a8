use chrono::{DateTime, TimeZone, Utc};
use timeline_axis::AxisError;
use timeline_axis::api::{
    AxisEngine, AxisEngineConfig, AxisSnapshot, AxisTimeZone, BaseTick, BaseTickScale,
    BaseTickSource, TickLevel, TickType,
};
use timeline_axis::core::{AxisMargins, TimeRange, Viewport};
use timeline_axis::render::NullRenderer;

fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid utc time")
}

fn one_day_engine() -> AxisEngine<NullRenderer> {
    let range = TimeRange::new(utc(2024, 3, 10, 12), utc(2024, 3, 11, 12)).expect("valid range");
    AxisEngine::new(
        NullRenderer::default(),
        AxisEngineConfig::default(),
        range,
        Viewport::new(1000, 80),
    )
    .expect("engine init")
}

#[test]
fn layout_is_memoized_until_an_input_changes() {
    let mut engine = one_day_engine();
    assert_eq!(engine.layout_generation(), 0);

    let first = engine.layout().clone();
    let _ = engine.layout();
    assert_eq!(engine.layout_generation(), 1);

    engine.set_viewport(Viewport::new(1000, 80));
    engine.set_time_range(engine.time_range());
    let _ = engine.layout();
    assert_eq!(engine.layout_generation(), 1);

    engine.set_viewport(Viewport::new(1400, 80));
    let second = engine.layout().clone();
    assert_eq!(engine.layout_generation(), 2);
    assert_ne!(first, second);
}

#[test]
fn config_change_invalidates_layout() {
    let mut engine = one_day_engine();
    let _ = engine.layout();

    engine
        .set_config(AxisEngineConfig::default())
        .expect("same config");
    let _ = engine.layout();
    assert_eq!(engine.layout_generation(), 1);

    engine
        .set_config(AxisEngineConfig::default().with_margins(AxisMargins::new(40.0, 40.0)))
        .expect("valid config");
    let hours: Vec<f64> = engine
        .layout()
        .ticks
        .iter()
        .filter(|tick| tick.kind == TickType::Hour)
        .map(|tick| tick.x)
        .collect();
    assert_eq!(engine.layout_generation(), 2);
    assert_eq!(hours, vec![40.0, 960.0]);
}

#[test]
fn invalid_config_is_rejected_and_keeps_previous_state() {
    let mut engine = one_day_engine();
    let bad = AxisEngineConfig::default().with_margins(AxisMargins::new(-1.0, 20.0));

    assert!(matches!(
        engine.set_config(bad),
        Err(AxisError::InvalidConfig(_))
    ));
    assert_eq!(engine.config(), AxisEngineConfig::default());
}

#[test]
fn render_hands_a_valid_frame_to_the_renderer() {
    let mut engine = one_day_engine();
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_band_count, 1);
    assert_eq!(renderer.last_rule_count, 3);
    assert_eq!(renderer.last_label_count, 3);

    engine.pointer_move(300.0);
    engine.render().expect("render with hover");
    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_rule_count, 4);
    assert_eq!(renderer.last_label_count, 4);
    assert_eq!(engine.layout_generation(), 1);
}

#[test]
fn supplied_base_ticks_replace_nice_ticks() {
    let mut engine = one_day_engine();
    assert_eq!(engine.base_tick_source(), &BaseTickSource::Nice);

    let base = vec![BaseTick::new(
        utc(2024, 3, 11, 0),
        "2024",
        520.0,
        BaseTickScale::Year,
    )];
    engine.set_base_ticks(base.clone());
    assert_eq!(
        engine.base_tick_source(),
        &BaseTickSource::Supplied(base.clone())
    );

    let ticks = engine.layout().ticks.clone();
    assert!(
        ticks
            .iter()
            .any(|tick| tick.label == "2024" && tick.level == TickLevel::Primary)
    );
    // The base tick at midnight blocks the day candidate on the same spot.
    assert!(ticks.iter().all(|tick| tick.kind != TickType::Day));

    engine.set_base_ticks(base);
    let _ = engine.layout();
    assert_eq!(engine.layout_generation(), 1);

    engine.use_nice_base_ticks();
    let _ = engine.layout();
    assert_eq!(engine.layout_generation(), 2);
}

#[test]
fn snapshot_json_uses_wire_field_names() {
    let mut engine = one_day_engine();
    engine.pointer_move(520.0);

    let json = engine.snapshot_json_pretty().expect("snapshot json");
    assert!(json.contains("\"type\": \"hour\""));
    assert!(json.contains("\"level\": \"quaternary\""));
    assert!(json.contains("\"pixel_x\": 520.0"));

    let restored: AxisSnapshot = serde_json::from_str(&json).expect("snapshot should parse");
    let current = engine.snapshot();
    assert_eq!(restored.range, current.range);
    assert_eq!(restored.hover.pixel_x, Some(520.0));
    assert_eq!(restored.layout.ticks, current.layout.ticks);
}

#[test]
fn config_json_roundtrip_and_partial_documents() {
    let config = AxisEngineConfig::default()
        .with_time_zone(AxisTimeZone::FixedOffsetMinutes { minutes: -300 });
    let json = config.to_json_pretty().expect("config should serialize");
    let restored = AxisEngineConfig::from_json_str(&json).expect("config should deserialize");
    assert_eq!(restored, config);

    let partial = AxisEngineConfig::from_json_str(r#"{ "margins": { "left": 10.0, "right": 5.0 } }"#)
        .expect("partial config");
    assert_eq!(partial.margins, AxisMargins::new(10.0, 5.0));
    assert_eq!(partial.spacing, AxisEngineConfig::default().spacing);
    assert_eq!(partial.season_band_max_span_days, 3650.0);
}

#[test]
fn config_json_errors_are_typed() {
    assert!(matches!(
        AxisEngineConfig::from_json_str("{ not json"),
        Err(AxisError::Serialization(_))
    ));
    assert!(matches!(
        AxisEngineConfig::from_json_str(r#"{ "season_band_max_span_days": -1.0 }"#),
        Err(AxisError::InvalidConfig(_))
    ));
    assert!(matches!(
        AxisEngineConfig::from_json_str(
            r#"{ "time_zone": { "FixedOffsetMinutes": { "minutes": 1440 } } }"#
        ),
        Err(AxisError::InvalidConfig(_))
    ));
}
