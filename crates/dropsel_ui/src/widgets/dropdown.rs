//! Dropdown widget for selecting one value from a list of string options.
//!
//! The header shows the current selection (or a placeholder). Pressing it
//! computes a [`Placement`] from the header rectangle and the document's
//! viewport, puts the option panel on the overlay layer and starts listening
//! for page-level presses. The list closes when:
//! - An option is selected
//! - The header is pressed again
//! - A press lands outside the header and the panel
//!
//! All three paths drop the open-list state, which releases the overlay
//! surface and the pointer subscription.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::callback::Callback;
use crate::constants::{
    ARROW_DOWN, ARROW_UP, DEFAULT_PLACEHOLDER, DROPDOWN_HEADER_HEIGHT, DROPDOWN_OPTION_HEIGHT,
    DROPDOWN_WIDTH,
};
use crate::document::Document;
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Point, Size};
use crate::overlay::{OverlaySurface, SurfaceId};
use crate::placement::Placement;
use crate::state::{DropdownState, OpenList, Visibility};
use crate::widget::Widget;
use crate::{builder_field, builder_option, callback_setter};

fn default_width() -> f32 {
    DROPDOWN_WIDTH
}

/// Owner-supplied description of a dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownConfig {
    pub name: String,
    /// Options in display order. Duplicates are allowed.
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default = "default_width")]
    pub width: f32,
}

impl DropdownConfig {
    pub fn new(name: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            name: name.into(),
            options,
            default_value: None,
            placeholder: None,
            width: DROPDOWN_WIDTH,
        }
    }

    builder_option!(default_value, String);
    builder_option!(placeholder, String);
    builder_field!(width, f32);

    fn panel_height(&self) -> f32 {
        self.options.len() as f32 * DROPDOWN_OPTION_HEIGHT
    }
}

/// A dropdown widget for selecting from a list of options.
pub struct Dropdown<Message> {
    config: DropdownConfig,
    document: Document,
    state: Rc<RefCell<DropdownState>>,
    on_change: Callback<String, Message>,
}

impl<Message> Dropdown<Message> {
    /// Create a dropdown on a page. Starts closed, with the default value selected if one is configured.
    pub fn new(document: &Document, config: DropdownConfig) -> Self {
        let selected = config.default_value.clone().unwrap_or_default();
        Self {
            config,
            document: document.clone(),
            state: Rc::new(RefCell::new(DropdownState::new(selected))),
            on_change: Callback::none(),
        }
    }

    callback_setter!(on_change, String);
    builder_field!(width, config.width, f32);

    /// Set the placeholder shown while nothing is selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = Some(placeholder.into());
        self
    }

    /// Set the initially selected value.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.state.borrow_mut().selected = value.clone();
        self.config.default_value = Some(value);
        self
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn options(&self) -> &[String] {
        &self.config.options
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    /// Selected value, empty when nothing is selected.
    pub fn selected(&self) -> String {
        self.state.borrow().selected.clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    /// Placement captured by the last open. `None` while closed.
    pub fn placement(&self) -> Option<Placement> {
        self.state.borrow().placement()
    }

    /// Panel rectangle in page coordinates. `None` while closed.
    pub fn panel_bounds(&self) -> Option<Bounds> {
        self.state.borrow().panel_bounds()
    }

    /// Overlay surface currently showing the panel.
    pub fn surface_id(&self) -> Option<SurfaceId> {
        self.state.borrow().surface_id()
    }

    pub fn hovered_option(&self) -> Option<usize> {
        self.state.borrow().hovered_option()
    }

    /// Text for the header: the selection, else the placeholder, else the built-in placeholder.
    pub fn header_label(&self) -> String {
        let state = self.state.borrow();
        if state.has_selection() {
            return state.selected.clone();
        }
        self.config
            .placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string())
    }

    /// Arrow glyph for the header.
    pub fn arrow(&self) -> &'static str {
        if self.is_open() {
            ARROW_UP
        } else {
            ARROW_DOWN
        }
    }

    /// Open or close the list.
    ///
    /// `header` is the header rectangle in client coordinates right now.
    /// It is only read when opening.
    pub fn toggle(&mut self, header: Bounds) {
        if self.state.borrow_mut().close() {
            log::debug!("Dropdown '{}': closed by toggle", self.config.name);
            return;
        }
        self.open(header);
    }

    /// Select a value and close the list.
    ///
    /// The value is trusted to come from the option list. Returns the owner
    /// message if an `on_change` callback is set.
    pub fn select(&mut self, value: impl Into<String>) -> Option<Message> {
        let value = value.into();
        {
            let mut state = self.state.borrow_mut();
            state.selected = value.clone();
            state.close();
        }
        log::debug!("Dropdown '{}': selected '{}'", self.config.name, value);
        self.on_change.call(value)
    }

    /// Close the list without touching the selection, as an outside press
    /// does. Returns `true` if the list was open.
    pub fn dismiss(&mut self) -> bool {
        let closed = self.state.borrow_mut().close();
        if closed {
            log::debug!("Dropdown '{}': dismissed", self.config.name);
        }
        closed
    }

    /// Replace the option list.
    ///
    /// The current selection is kept even if it is no longer an option. An
    /// open panel is refreshed in place; its placement is not recomputed.
    pub fn set_options(&mut self, options: Vec<String>) {
        self.config.options = options;
        let mut state = self.state.borrow_mut();
        if let Some(open) = state.open_list_mut() {
            let panel = open.placement.list_bounds(self.config.panel_height());
            open.panel = panel;
            open.hovered = None;
            open.slot = self.document.overlay().acquire(self.surface(panel));
        }
        log::debug!(
            "Dropdown '{}': {} option(s), selection '{}' kept",
            self.config.name,
            self.config.options.len(),
            state.selected
        );
    }

    fn surface(&self, panel: Bounds) -> OverlaySurface {
        OverlaySurface {
            owner: self.config.name.clone(),
            bounds: panel,
            rows: self.config.options.clone(),
        }
    }

    fn open(&mut self, header: Bounds) {
        let viewport = self.document.viewport();
        let placement = Placement::compute(header, &viewport);
        let panel = placement.list_bounds(self.config.panel_height());
        let slot = self.document.overlay().acquire(self.surface(panel));

        let weak = Rc::downgrade(&self.state);
        let name = self.config.name.clone();
        let subscription = self.document.subscribe_pointer_down(move |event| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let mut state = state.borrow_mut();
            let outside = state
                .open_list()
                .is_some_and(|open| !open.contains(event.page));
            if outside {
                state.close();
                log::debug!("Dropdown '{}': outside press at {:?}, closed", name, event.page);
            }
        });

        log::debug!(
            "Dropdown '{}': opened {:?} at ({}, {}) width {}",
            self.config.name,
            placement.direction,
            placement.position.x,
            placement.position.y,
            placement.width
        );

        self.state.borrow_mut().visibility = Visibility::Open(OpenList {
            placement,
            header: viewport.bounds_to_page(header),
            panel,
            hovered: None,
            slot,
            _subscription: subscription,
        });
    }

    /// Index of the option row under a client position, if the list is open.
    fn row_at(&self, position: Point) -> Option<usize> {
        let page = self.document.viewport().client_to_page(position);
        let panel = self.state.borrow().panel_bounds()?;
        if !panel.contains_point(page) {
            return None;
        }
        let row = ((page.y - panel.top()) / DROPDOWN_OPTION_HEIGHT) as usize;
        (row < self.config.options.len()).then_some(row)
    }
}

impl<Message> Widget<Message> for Dropdown<Message> {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(
            self.config.width.min(available.width),
            DROPDOWN_HEADER_HEIGHT,
        )
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<Message> {
        match event {
            Event::MousePress {
                button: MouseButton::Left,
                position,
            } => {
                if bounds.contains_point(*position) {
                    self.toggle(bounds);
                    return None;
                }
                let row = self.row_at(*position)?;
                let value = self.config.options.get(row)?.clone();
                self.select(value)
            }
            Event::MouseMove { position } => {
                let row = self.row_at(*position);
                if let Some(open) = self.state.borrow_mut().open_list_mut() {
                    open.hovered = row;
                }
                None
            }
            _ => None,
        }
    }

    fn has_active_overlay(&self) -> bool {
        self.is_open()
    }
}

impl<Message> Drop for Dropdown<Message> {
    fn drop(&mut self) {
        if self.state.borrow_mut().close() {
            log::debug!("Dropdown '{}': dropped while open", self.config.name);
        }
    }
}

impl<Message> std::fmt::Debug for Dropdown<Message> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropdown")
            .field("config", &self.config)
            .field("state", &self.state.borrow())
            .field("on_change", &self.on_change)
            .finish()
    }
}

/// Helper function to create a dropdown.
pub fn dropdown<Message>(
    document: &Document,
    name: impl Into<String>,
    options: Vec<String>,
) -> Dropdown<Message> {
    Dropdown::new(document, DropdownConfig::new(name, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Direction;
    use crate::viewport::Viewport;
    use std::cell::Cell;

    fn abc() -> Vec<String> {
        vec!["A".into(), "B".into(), "C".into()]
    }

    fn page() -> Document {
        Document::new(Viewport::new(1024.0, 800.0))
    }

    fn header_at(y: f32) -> Bounds {
        Bounds::new(100.0, y, 160.0, 24.0)
    }

    fn press(x: f32, y: f32) -> Event {
        Event::MousePress {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_initial_state_without_default() {
        let doc = page();
        let dd: Dropdown<String> = dropdown(&doc, "fruit", abc());
        assert_eq!(dd.selected(), "");
        assert!(!dd.is_open());
        assert_eq!(dd.placement(), None);
        assert_eq!(dd.header_label(), DEFAULT_PLACEHOLDER);
        assert_eq!(dd.arrow(), ARROW_DOWN);
    }

    #[test]
    fn test_initial_state_with_default_and_placeholder() {
        let doc = page();
        let config = DropdownConfig::new("fruit", abc())
            .default_value("C")
            .placeholder("Pick one");
        let dd: Dropdown<String> = Dropdown::new(&doc, config);
        assert_eq!(dd.selected(), "C");
        assert_eq!(dd.header_label(), "C");

        let dd: Dropdown<String> = dropdown(&doc, "fruit", abc()).placeholder("Pick one");
        assert_eq!(dd.header_label(), "Pick one");
    }

    #[test]
    fn test_toggle_opens_with_placement_then_closes() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc()).default_value("A");

        dd.toggle(header_at(100.0));
        assert!(dd.is_open());
        assert_eq!(dd.arrow(), ARROW_UP);
        let placement = dd.placement().unwrap();
        assert_eq!(placement.anchor, header_at(100.0));
        assert_eq!(placement.direction, Direction::Down);
        assert_eq!(placement.position, Point::new(100.0, 124.0));
        assert_eq!(doc.listener_count(), 1);
        assert_eq!(doc.overlay().len(), 1);

        dd.toggle(header_at(100.0));
        assert!(!dd.is_open());
        assert_eq!(dd.placement(), None);
        assert_eq!(dd.selected(), "A");
        assert_eq!(doc.listener_count(), 0);
        assert!(doc.overlay().is_empty());
    }

    #[test]
    fn test_placement_recomputed_on_each_open() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc());

        dd.toggle(header_at(100.0));
        assert_eq!(dd.placement().unwrap().direction, Direction::Down);
        dd.toggle(header_at(100.0));

        // Header moved near the bottom of the viewport between opens.
        doc.scroll_to(0.0, 40.0);
        dd.toggle(header_at(700.0));
        let placement = dd.placement().unwrap();
        assert_eq!(placement.direction, Direction::Up);
        assert_eq!(placement.position.y, 700.0 + 40.0 - 200.0);
    }

    #[test]
    fn test_select_closes_and_fires_callback_once() {
        let doc = page();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let mut dd = dropdown(&doc, "fruit", abc()).on_change(move |v: String| {
            seen.set(seen.get() + 1);
            v
        });

        dd.toggle(header_at(100.0));
        let msg = dd.select("B");
        assert_eq!(msg, Some("B".to_string()));
        assert_eq!(calls.get(), 1);
        assert_eq!(dd.selected(), "B");
        assert!(!dd.is_open());
        assert_eq!(dd.header_label(), "B");
        assert_eq!(doc.listener_count(), 0);
        assert!(doc.overlay().is_empty());
    }

    #[test]
    fn test_select_without_callback() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc());
        dd.toggle(header_at(100.0));
        assert_eq!(dd.select("C"), None);
        assert_eq!(dd.selected(), "C");
    }

    #[test]
    fn test_select_is_not_validated() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc()).on_change(|v| v);
        assert_eq!(dd.select("Z"), Some("Z".to_string()));
        assert_eq!(dd.selected(), "Z");
    }

    #[test]
    fn test_outside_press_closes_without_selection_change() {
        let doc = page();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let mut dd = dropdown(&doc, "fruit", abc())
            .default_value("A")
            .on_change(move |v: String| {
                seen.set(seen.get() + 1);
                v
            });

        dd.toggle(header_at(100.0));
        assert_eq!(doc.pointer_down(MouseButton::Left, Point::new(600.0, 500.0)), 1);
        assert!(!dd.is_open());
        assert_eq!(dd.selected(), "A");
        assert_eq!(calls.get(), 0);
        assert_eq!(doc.listener_count(), 0);
        assert!(doc.overlay().is_empty());
    }

    #[test]
    fn test_press_on_header_or_panel_does_not_dismiss() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc());
        dd.toggle(header_at(100.0));

        doc.pointer_down(MouseButton::Left, Point::new(150.0, 110.0));
        assert!(dd.is_open());
        // Panel spans 124..190 below the header.
        doc.pointer_down(MouseButton::Left, Point::new(150.0, 180.0));
        assert!(dd.is_open());
    }

    #[test]
    fn test_outside_press_while_closed_is_noop() {
        let doc = page();
        let dd: Dropdown<String> = dropdown(&doc, "fruit", abc()).default_value("B");
        assert_eq!(doc.pointer_down(MouseButton::Left, Point::new(5.0, 5.0)), 0);
        assert!(!dd.is_open());
        assert_eq!(dd.selected(), "B");
    }

    #[test]
    fn test_dismiss_while_closed_returns_false() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc());
        assert!(!dd.dismiss());
        assert!(!dd.is_open());
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn test_dismiss_closes_without_selection_change() {
        let doc = page();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let mut dd = dropdown(&doc, "fruit", abc())
            .default_value("B")
            .on_change(move |v: String| {
                seen.set(seen.get() + 1);
                v
            });

        dd.toggle(header_at(100.0));
        assert_eq!(doc.listener_count(), 1);
        assert_eq!(doc.overlay().len(), 1);

        assert!(dd.dismiss());
        assert!(!dd.is_open());
        assert_eq!(dd.selected(), "B");
        assert_eq!(dd.header_label(), "B");
        assert_eq!(calls.get(), 0);
        assert_eq!(doc.listener_count(), 0);
        assert!(doc.overlay().is_empty());
        assert!(!dd.dismiss());
    }

    #[test]
    fn test_has_active_overlay_tracks_visibility() {
        let doc = page();
        let mut dd = dropdown(&doc, "fruit", abc()).on_change(|v: String| v);
        assert!(!dd.has_active_overlay());

        dd.on_event(&press(150.0, 110.0), header_at(100.0));
        assert!(dd.has_active_overlay());

        // First row spans 124..146.
        assert_eq!(dd.on_event(&press(150.0, 130.0), header_at(100.0)), Some("A".into()));
        assert!(!dd.has_active_overlay());

        dd.toggle(header_at(100.0));
        doc.pointer_down(MouseButton::Left, Point::new(900.0, 700.0));
        assert!(!dd.has_active_overlay());
    }

    #[test]
    fn test_outside_detection_uses_page_coordinates() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc());
        doc.scroll_to(0.0, 300.0);
        dd.toggle(header_at(100.0));

        // Scrolling back makes the same client point land on a different page point.
        doc.scroll_to(0.0, 0.0);
        doc.pointer_down(MouseButton::Left, Point::new(150.0, 410.0));
        assert!(dd.is_open());
        doc.pointer_down(MouseButton::Left, Point::new(150.0, 110.0));
        assert!(!dd.is_open());
    }

    #[test]
    fn test_widget_events_toggle_and_select() {
        let doc = page();
        let mut dd = dropdown(&doc, "fruit", abc()).on_change(|v: String| v);
        let bounds = header_at(100.0);

        assert_eq!(dd.on_event(&press(150.0, 110.0), bounds), None);
        assert!(dd.is_open());

        dd.on_event(
            &Event::MouseMove {
                position: Point::new(150.0, 150.0),
            },
            bounds,
        );
        assert_eq!(dd.hovered_option(), Some(1));

        // Second row: 146..168
        let msg = dd.on_event(&press(150.0, 150.0), bounds);
        assert_eq!(msg, Some("B".to_string()));
        assert!(!dd.is_open());
    }

    #[test]
    fn test_widget_ignores_non_left_presses() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc());
        let event = Event::MousePress {
            button: MouseButton::Right,
            position: Point::new(150.0, 110.0),
        };
        assert_eq!(dd.on_event(&event, header_at(100.0)), None);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_empty_options_open_empty_panel() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "empty", Vec::new());
        dd.toggle(header_at(100.0));
        assert!(dd.is_open());
        let panel = dd.panel_bounds().unwrap();
        assert_eq!(panel.height, 0.0);
        assert_eq!(panel.width, 160.0);
        assert_eq!(doc.overlay().surfaces()[0].rows.len(), 0);
    }

    #[test]
    fn test_zero_width_header() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc());
        dd.toggle(Bounds::new(10.0, 10.0, 0.0, 0.0));
        assert_eq!(dd.placement().unwrap().width, 0.0);
        assert_eq!(dd.panel_bounds().unwrap().width, 0.0);
    }

    #[test]
    fn test_drop_while_open_releases_everything() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc());
        dd.toggle(header_at(100.0));
        drop(dd);
        assert_eq!(doc.listener_count(), 0);
        assert!(doc.overlay().is_empty());
        assert_eq!(doc.pointer_down(MouseButton::Left, Point::zero()), 0);
    }

    #[test]
    fn test_many_cycles_leave_no_listeners() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc());
        for i in 0..50 {
            dd.toggle(header_at(100.0));
            match i % 3 {
                0 => dd.toggle(header_at(100.0)),
                1 => {
                    dd.select("A");
                }
                _ => {
                    doc.pointer_down(MouseButton::Left, Point::new(900.0, 700.0));
                }
            }
            assert!(!dd.is_open());
            assert_eq!(doc.listener_count(), 0);
        }
    }

    #[test]
    fn test_two_dropdowns_share_page() {
        let doc = page();
        let mut a: Dropdown<String> = dropdown(&doc, "a", abc());
        let mut b: Dropdown<String> = dropdown(&doc, "b", abc());
        a.toggle(header_at(100.0));
        b.toggle(header_at(400.0));
        assert_eq!(doc.listener_count(), 2);

        // Press on b's header: a closes, b stays open.
        doc.pointer_down(MouseButton::Left, Point::new(150.0, 410.0));
        assert!(!a.is_open());
        assert!(b.is_open());
        assert_eq!(doc.overlay().surfaces()[0].owner, "b");
    }

    #[test]
    fn test_set_options_keeps_stale_selection() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc());
        dd.select("B");
        dd.set_options(vec!["X".into(), "Y".into()]);
        assert_eq!(dd.selected(), "B");
        assert_eq!(dd.header_label(), "B");
    }

    #[test]
    fn test_set_options_refreshes_open_panel() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc());
        dd.toggle(header_at(100.0));
        let before = dd.placement();
        let surface = dd.surface_id();
        dd.set_options(vec!["X".into()]);
        assert_eq!(dd.placement(), before);
        assert_ne!(dd.surface_id(), surface);
        assert_eq!(dd.panel_bounds().unwrap().height, DROPDOWN_OPTION_HEIGHT);
        assert_eq!(doc.overlay().len(), 1);
        assert_eq!(doc.overlay().surfaces()[0].rows, vec!["X".to_string()]);
    }

    #[test]
    fn test_layout_clamps_to_available_width() {
        let doc = page();
        let mut dd: Dropdown<String> = dropdown(&doc, "fruit", abc()).width(300.0);
        assert_eq!(dd.layout(Size::new(200.0, 50.0)), Size::new(200.0, 24.0));
        assert_eq!(dd.layout(Size::new(800.0, 50.0)), Size::new(300.0, 24.0));
    }

    #[test]
    fn test_config_from_json_defaults() {
        let config: DropdownConfig =
            serde_json::from_str(r#"{"name": "fruit", "options": ["A", "B"]}"#).unwrap();
        assert_eq!(config.width, DROPDOWN_WIDTH);
        assert_eq!(config.default_value, None);
        assert_eq!(config.placeholder, None);
    }
}
