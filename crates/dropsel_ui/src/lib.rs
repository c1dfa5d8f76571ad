//! dropsel_ui - a headless dropdown widget with viewport-aware placement
//!
//! This crate provides a callback-based dropdown with a clean builder API.
//! Rendering is left to the host: it reads the header label and arrow from the
//! widget and the floating panels from the document's [`OverlayLayer`].
//!
//! ```
//! use dropsel_ui::prelude::*;
//!
//! let page = Document::new(Viewport::new(1024.0, 800.0));
//! let mut fruit = dropdown(&page, "fruit", vec!["Apple".into(), "Pear".into()])
//!     .on_change(|value: String| value);
//!
//! fruit.toggle(Bounds::new(10.0, 700.0, 160.0, 24.0));
//! assert!(fruit.placement().unwrap().opens_upward());
//!
//! assert_eq!(fruit.select("Pear"), Some("Pear".to_string()));
//! assert_eq!(page.listener_count(), 0);
//! ```

mod macros;

mod callback;
mod constants;
mod document;
mod event;
mod layout;
mod overlay;
mod placement;
mod state;
mod viewport;
mod widget;
mod widgets;

pub use callback::Callback;
pub use constants::*;
pub use document::{Document, ListenerId, Subscription};
pub use event::{Event, MouseButton, PointerDown};
pub use layout::{Bounds, Point, Size};
pub use overlay::{OverlayLayer, OverlaySlot, OverlaySurface, SurfaceId};
pub use placement::{Direction, Placement};
pub use state::DropdownState;
pub use viewport::Viewport;
pub use widget::Widget;

// Re-export widgets
pub use widgets::{dropdown, Dropdown, DropdownConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::document::Document;
    pub use crate::event::{Event, MouseButton};
    pub use crate::layout::{Bounds, Point, Size};
    pub use crate::placement::{Direction, Placement};
    pub use crate::viewport::Viewport;
    pub use crate::widget::Widget;
    pub use crate::widgets::{dropdown, Dropdown, DropdownConfig};
}
