use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Projector;

/// Pointer input already translated into the axis's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Move { x: f64 },
    Leave,
    Click { x: f64 },
}

/// Ephemeral hover position; the hovered date is derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub pixel_x: Option<f64>,
}

/// Host-owned callbacks notified by [`InteractionHandler`].
pub trait AxisInteractionListener {
    /// Called on every pointer move with the hovered date, and with `None`
    /// when the pointer leaves the axis.
    fn on_date_hover(&mut self, date: Option<DateTime<Utc>>);
    fn on_timeline_click(&mut self, date: DateTime<Utc>);
}

/// Adapts a pair of closures to [`AxisInteractionListener`].
pub struct AxisCallbacks<H, C>
where
    H: FnMut(Option<DateTime<Utc>>),
    C: FnMut(DateTime<Utc>),
{
    pub on_date_hover: H,
    pub on_timeline_click: C,
}

impl<H, C> AxisInteractionListener for AxisCallbacks<H, C>
where
    H: FnMut(Option<DateTime<Utc>>),
    C: FnMut(DateTime<Utc>),
{
    fn on_date_hover(&mut self, date: Option<DateTime<Utc>>) {
        (self.on_date_hover)(date);
    }

    fn on_timeline_click(&mut self, date: DateTime<Utc>) {
        (self.on_timeline_click)(date);
    }
}

impl<H, C> std::fmt::Debug for AxisCallbacks<H, C>
where
    H: FnMut(Option<DateTime<Utc>>),
    C: FnMut(DateTime<Utc>),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisCallbacks").finish_non_exhaustive()
    }
}

/// Listener that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl AxisInteractionListener for NoopListener {
    fn on_date_hover(&mut self, _date: Option<DateTime<Utc>>) {}

    fn on_timeline_click(&mut self, _date: DateTime<Utc>) {}
}

/// Converts pointer events to dates through the projector's inverse.
///
/// Only the hover pixel is stored; tick and band layout never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionHandler {
    hover: HoverState,
}

impl InteractionHandler {
    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn hover_date(&self, projector: &Projector) -> Option<DateTime<Utc>> {
        self.hover.pixel_x.map(|x| projector.to_instant(x))
    }

    /// Dispatches one event and returns the date it resolved to, if any.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        projector: &Projector,
        listener: &mut dyn AxisInteractionListener,
    ) -> Option<DateTime<Utc>> {
        match event {
            PointerEvent::Move { x } => Some(self.on_pointer_move(x, projector, listener)),
            PointerEvent::Leave => {
                self.on_pointer_leave(listener);
                None
            }
            PointerEvent::Click { x } => Some(self.on_click(x, projector, listener)),
        }
    }

    pub fn on_pointer_move(
        &mut self,
        x: f64,
        projector: &Projector,
        listener: &mut dyn AxisInteractionListener,
    ) -> DateTime<Utc> {
        self.hover.pixel_x = Some(x);
        let date = projector.to_instant(x);
        trace!(x, %date, "axis hover");
        listener.on_date_hover(Some(date));
        date
    }

    pub fn on_pointer_leave(&mut self, listener: &mut dyn AxisInteractionListener) {
        self.hover.pixel_x = None;
        listener.on_date_hover(None);
    }

    pub fn on_click(
        &self,
        x: f64,
        projector: &Projector,
        listener: &mut dyn AxisInteractionListener,
    ) -> DateTime<Utc> {
        let date = projector.to_instant(x);
        trace!(x, %date, "axis click");
        listener.on_timeline_click(date);
        date
    }
}
