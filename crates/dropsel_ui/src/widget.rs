//! Widget trait and related types

use crate::event::Event;
use crate::layout::{Bounds, Size};

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Handle an event, optionally producing a message.
    ///
    /// `bounds` is where the host laid the widget out, in client coordinates.
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        let _ = (event, bounds);
        None
    }

    /// Whether the widget currently has a surface on the overlay layer
    fn has_active_overlay(&self) -> bool {
        false
    }
}
