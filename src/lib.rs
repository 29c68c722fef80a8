//! timeline-axis: adaptive time-axis engine for zoomable timelines.
//!
//! Given a visible time range and a viewport, the engine produces a
//! non-colliding hierarchy of tick marks from years down to minutes,
//! seasonal background bands, and pointer-to-date conversion. Every entry
//! point is a synchronous pure function of its inputs; [`AxisEngine`] adds
//! memoization and callback wiring for hosts.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    AxisEngine, AxisEngineConfig, generate_season_bands, generate_ticks, pixel_to_date,
};
pub use error::{AxisError, AxisResult};
