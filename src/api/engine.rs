use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::core::{Projector, TimeRange, Viewport};
use crate::error::AxisResult;
use crate::interaction::{
    AxisInteractionListener, HoverState, InteractionHandler, NoopListener, PointerEvent,
};
use crate::render::Renderer;

use super::axis_frame_builder::build_axis_frame;
use super::axis_label_format::tooltip_text;
use super::{
    AxisEngineConfig, AxisLayout, AxisSnapshot, BaseTick, TickGenerator,
    generate_season_bands_with_config, nice_base_ticks,
};

/// Where the engine gets its coarse ticks from.
#[derive(Debug, Clone, PartialEq)]
pub enum BaseTickSource {
    /// Ticks supplied by the host's own scale chooser.
    Supplied(Vec<BaseTick>),
    /// Ticks computed by [`nice_base_ticks`] for the current range.
    Nice,
}

/// Orchestration facade consumed by host surfaces.
///
/// Owns the axis inputs and memoizes the tick/band layout; pointer events
/// only touch the hover state and never trigger regeneration.
pub struct AxisEngine<R: Renderer> {
    renderer: R,
    config: AxisEngineConfig,
    range: TimeRange,
    viewport: Viewport,
    base_source: BaseTickSource,
    layout: Option<AxisLayout>,
    layout_generation: u64,
    interaction: InteractionHandler,
    listener: Option<Box<dyn AxisInteractionListener>>,
}

impl<R: Renderer> AxisEngine<R> {
    pub fn new(
        renderer: R,
        config: AxisEngineConfig,
        range: TimeRange,
        viewport: Viewport,
    ) -> AxisResult<Self> {
        let config = config.validate()?;
        if !config.margins.fits(viewport) {
            warn!(
                width = viewport.width,
                left = config.margins.left,
                right = config.margins.right,
                "viewport narrower than axis margins"
            );
        }
        Ok(Self {
            renderer,
            config,
            range,
            viewport,
            base_source: BaseTickSource::Nice,
            layout: None,
            layout_generation: 0,
            interaction: InteractionHandler::default(),
            listener: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> AxisEngineConfig {
        self.config
    }

    pub fn set_config(&mut self, config: AxisEngineConfig) -> AxisResult<()> {
        let config = config.validate()?;
        if config != self.config {
            self.config = config;
            self.invalidate_layout();
        }
        Ok(())
    }

    #[must_use]
    pub fn time_range(&self) -> TimeRange {
        self.range
    }

    pub fn set_time_range(&mut self, range: TimeRange) {
        if range != self.range {
            self.range = range;
            self.invalidate_layout();
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        if !self.config.margins.fits(viewport) {
            warn!(
                width = viewport.width,
                "viewport narrower than axis margins; ticks may overlap"
            );
        }
        self.viewport = viewport;
        self.invalidate_layout();
    }

    #[must_use]
    pub fn base_tick_source(&self) -> &BaseTickSource {
        &self.base_source
    }

    pub fn set_base_ticks(&mut self, base_ticks: Vec<BaseTick>) {
        let source = BaseTickSource::Supplied(base_ticks);
        if source != self.base_source {
            self.base_source = source;
            self.invalidate_layout();
        }
    }

    pub fn use_nice_base_ticks(&mut self) {
        if self.base_source != BaseTickSource::Nice {
            self.base_source = BaseTickSource::Nice;
            self.invalidate_layout();
        }
    }

    pub fn set_listener(&mut self, listener: Box<dyn AxisInteractionListener>) {
        self.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    #[must_use]
    pub fn projector(&self) -> Projector {
        Projector::new(self.range, self.viewport, self.config.margins)
    }

    /// Number of layout recomputations so far.
    #[must_use]
    pub fn layout_generation(&self) -> u64 {
        self.layout_generation
    }

    /// Returns the memoized layout, regenerating it if an input changed.
    pub fn layout(&mut self) -> &AxisLayout {
        let layout = match self.layout.take() {
            Some(layout) => layout,
            None => {
                let layout = self.compute_layout();
                self.layout_generation += 1;
                debug!(
                    generation = self.layout_generation,
                    span_days = layout.span_days,
                    ticks = layout.ticks.len(),
                    bands = layout.bands.len(),
                    "axis layout recomputed"
                );
                layout
            }
        };
        self.layout.insert(layout)
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.interaction.hover_state()
    }

    #[must_use]
    pub fn hover_date(&self) -> Option<DateTime<Utc>> {
        self.interaction.hover_date(&self.projector())
    }

    #[must_use]
    pub fn hover_tooltip(&self) -> Option<String> {
        let span_days = self.range.span_days();
        self.hover_date()
            .map(|date| tooltip_text(date, span_days, self.config.time_zone))
    }

    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<DateTime<Utc>> {
        let projector = self.projector();
        match self.listener.as_deref_mut() {
            Some(listener) => self.interaction.handle(event, &projector, listener),
            None => self.interaction.handle(event, &projector, &mut NoopListener),
        }
    }

    pub fn pointer_move(&mut self, x: f64) -> Option<DateTime<Utc>> {
        self.handle_pointer_event(PointerEvent::Move { x })
    }

    pub fn pointer_leave(&mut self) {
        self.handle_pointer_event(PointerEvent::Leave);
    }

    pub fn click(&mut self, x: f64) -> Option<DateTime<Utc>> {
        self.handle_pointer_event(PointerEvent::Click { x })
    }

    pub fn snapshot(&mut self) -> AxisSnapshot {
        let hover = self.interaction.hover_state();
        let (viewport, range) = (self.viewport, self.range);
        AxisSnapshot {
            viewport,
            range,
            hover,
            layout: self.layout().clone(),
        }
    }

    pub fn snapshot_json_pretty(&mut self) -> AxisResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Builds the axis frame from the memoized layout and hands it to the renderer.
    pub fn render(&mut self) -> AxisResult<()> {
        let hover = match (self.interaction.hover_state().pixel_x, self.hover_tooltip()) {
            (Some(x), Some(tooltip)) => Some((x, tooltip)),
            _ => None,
        };
        let viewport = self.viewport;
        let frame = build_axis_frame(self.layout(), viewport, hover);
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn invalidate_layout(&mut self) {
        self.layout = None;
    }

    fn compute_layout(&self) -> AxisLayout {
        let nice;
        let base_ticks: &[BaseTick] = match &self.base_source {
            BaseTickSource::Supplied(ticks) => ticks,
            BaseTickSource::Nice => {
                nice = nice_base_ticks(self.range, self.viewport, &self.config);
                &nice
            }
        };
        AxisLayout {
            span_days: self.range.span_days(),
            ticks: TickGenerator::new(&self.config, self.projector()).generate(base_ticks),
            bands: generate_season_bands_with_config(&self.config, self.range, self.viewport),
        }
    }
}

impl<R: Renderer + std::fmt::Debug> std::fmt::Debug for AxisEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisEngine")
            .field("renderer", &self.renderer)
            .field("config", &self.config)
            .field("range", &self.range)
            .field("viewport", &self.viewport)
            .field("layout_generation", &self.layout_generation)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}
