mod axis_config;
mod axis_frame_builder;
mod axis_label_format;
mod axis_layout;
pub mod axis_tick_policy;
mod axis_ticks;
mod base_tick_supplier;
mod engine;
mod projection;
mod season_bands;
mod tick_model;

pub use axis_config::{AxisEngineConfig, AxisTimeZone, SeasonPalette, TickSpacingPolicy};
pub use axis_frame_builder::build_axis_frame;
pub use axis_label_format::tooltip_text;
pub use axis_layout::{AxisLayout, AxisSnapshot};
pub use axis_tick_policy::{BaseScales, TICK_RESOLUTIONS, TickResolution, shows_time_of_day};
pub use axis_ticks::{TickGenerator, generate_ticks, generate_ticks_with_config};
pub use base_tick_supplier::nice_base_ticks;
pub use engine::{AxisEngine, BaseTickSource};
pub use projection::{pixel_to_date, pixel_to_date_with_config};
pub use season_bands::{
    Band, Season, generate_season_bands, generate_season_bands_with_config,
};
pub use tick_model::{BaseTick, BaseTickScale, Tick, TickLevel, TickType};
