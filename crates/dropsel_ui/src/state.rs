//! Widget state types for stateful widgets

use crate::document::Subscription;
use crate::layout::{Bounds, Point};
use crate::overlay::{OverlaySlot, SurfaceId};
use crate::placement::Placement;

/// Everything that only exists while a dropdown list is showing.
///
/// Dropping it releases the overlay surface and the page-level pointer
/// listener together.
#[derive(Debug)]
pub(crate) struct OpenList {
    pub(crate) placement: Placement,
    /// Header rectangle in page coordinates, captured at open time
    pub(crate) header: Bounds,
    /// Panel rectangle in page coordinates
    pub(crate) panel: Bounds,
    pub(crate) hovered: Option<usize>,
    pub(crate) slot: OverlaySlot,
    pub(crate) _subscription: Subscription,
}

impl OpenList {
    /// Whether a page position is inside the header or the panel.
    pub(crate) fn contains(&self, page: Point) -> bool {
        self.header.contains_point(page) || self.panel.contains_point(page)
    }
}

#[derive(Debug, Default)]
pub(crate) enum Visibility {
    #[default]
    Closed,
    Open(OpenList),
}

/// State for dropdown widgets
#[derive(Debug, Default)]
pub struct DropdownState {
    /// Selected option, empty when nothing is selected
    pub(crate) selected: String,
    pub(crate) visibility: Visibility,
}

impl DropdownState {
    pub fn new(selected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            visibility: Visibility::Closed,
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.visibility, Visibility::Open(_))
    }

    /// Placement captured when the list was opened. `None` while closed.
    pub fn placement(&self) -> Option<Placement> {
        self.open_list().map(|open| open.placement)
    }

    /// Panel rectangle in page coordinates. `None` while closed.
    pub fn panel_bounds(&self) -> Option<Bounds> {
        self.open_list().map(|open| open.panel)
    }

    /// Overlay surface holding the panel. `None` while closed.
    pub fn surface_id(&self) -> Option<SurfaceId> {
        self.open_list().map(|open| open.slot.id())
    }

    /// Index of the row under the pointer, if the list is open.
    pub fn hovered_option(&self) -> Option<usize> {
        self.open_list().and_then(|open| open.hovered)
    }

    pub(crate) fn open_list(&self) -> Option<&OpenList> {
        match &self.visibility {
            Visibility::Open(open) => Some(open),
            Visibility::Closed => None,
        }
    }

    pub(crate) fn open_list_mut(&mut self) -> Option<&mut OpenList> {
        match &mut self.visibility {
            Visibility::Open(open) => Some(open),
            Visibility::Closed => None,
        }
    }

    /// Close the list. Returns `true` if it was open.
    pub(crate) fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.visibility = Visibility::Closed;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_closed() {
        let state = DropdownState::new("B");
        assert!(!state.is_open());
        assert_eq!(state.selected(), "B");
        assert!(state.has_selection());
        assert_eq!(state.placement(), None);
        assert_eq!(state.panel_bounds(), None);
        assert_eq!(state.surface_id(), None);
    }

    #[test]
    fn test_default_has_no_selection() {
        let mut state = DropdownState::default();
        assert!(!state.has_selection());
        assert!(!state.close());
    }
}
