use serde::{Deserialize, Serialize};

use crate::layout::Point;

/// Events that widgets can respond to.
///
/// Positions are in client (viewport) coordinates.
#[derive(Debug, Clone)]
pub enum Event {
    /// Mouse button pressed.
    MousePress { button: MouseButton, position: Point },
    /// Mouse moved.
    MouseMove { position: Point },
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
    Other(u16),
}

/// A pointer-down observed at page level, delivered to every document listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDown {
    pub button: MouseButton,
    /// Position relative to the viewport
    pub client: Point,
    /// Position relative to the document (client + scroll)
    pub page: Point,
}
