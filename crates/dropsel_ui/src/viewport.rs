//! The visible, scrollable area of the page.

use serde::{Deserialize, Serialize};

use crate::layout::{Bounds, Point};

/// Viewport dimensions plus the page scroll offsets.
///
/// Client (viewport) coordinates are relative to the visible area; page
/// (document) coordinates add the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub scroll_x: f32,
    #[serde(default)]
    pub scroll_y: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

impl Viewport {
    /// A viewport scrolled to the top-left of the page.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    /// Builder: set the scroll offsets.
    pub fn scrolled(mut self, scroll_x: f32, scroll_y: f32) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }

    pub fn client_to_page(&self, point: Point) -> Point {
        point.offset(self.scroll_x, self.scroll_y)
    }

    pub fn page_to_client(&self, point: Point) -> Point {
        point.offset(-self.scroll_x, -self.scroll_y)
    }

    pub fn bounds_to_page(&self, bounds: Bounds) -> Bounds {
        bounds.offset(self.scroll_x, self.scroll_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_page_conversion() {
        let vp = Viewport::new(800.0, 600.0).scrolled(10.0, 250.0);
        let client = Point::new(5.0, 5.0);
        let page = vp.client_to_page(client);
        assert_eq!(page, Point::new(15.0, 255.0));
        assert_eq!(vp.page_to_client(page), client);
    }

    #[test]
    fn test_scroll_defaults_when_deserialized() {
        let vp: Viewport = serde_json::from_str(r#"{"width": 1024, "height": 768}"#).unwrap();
        assert_eq!(vp, Viewport::new(1024.0, 768.0));
    }
}
