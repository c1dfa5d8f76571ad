//! Viewport-aware placement of a floating list relative to its header.
//!
//! The list opens below the header unless the space below is short of
//! [`ASSUMED_LIST_HEIGHT`] and there is more room above. The computed
//! position is in page coordinates so it can be handed straight to the
//! [`OverlayLayer`](crate::OverlayLayer).

use crate::constants::ASSUMED_LIST_HEIGHT;
use crate::layout::{Bounds, Point, Size};
use crate::viewport::Viewport;

/// Which side of the header the list is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// List top edge sits on the header bottom edge
    #[default]
    Down,
    /// List is shifted up by the assumed list height from the header top
    Up,
}

/// The result of a placement pass, captured at the moment the list opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Header rectangle in client coordinates at open time
    pub anchor: Bounds,
    pub direction: Direction,
    /// Top-left of the list in page coordinates
    pub position: Point,
    /// Always the header width
    pub width: f32,
}

impl Placement {
    /// Compute the list placement for a header rectangle.
    ///
    /// `anchor` is in client coordinates. Degenerate rectangles go through
    /// the same arithmetic.
    pub fn compute(anchor: Bounds, viewport: &Viewport) -> Self {
        let space_below = viewport.height - anchor.bottom();
        let space_above = anchor.top();

        let direction = if space_below < ASSUMED_LIST_HEIGHT && space_above > space_below {
            Direction::Up
        } else {
            Direction::Down
        };

        let top = match direction {
            Direction::Down => anchor.bottom() + viewport.scroll_y,
            Direction::Up => anchor.top() + viewport.scroll_y - ASSUMED_LIST_HEIGHT,
        };
        let left = anchor.left() + viewport.scroll_x;

        log::trace!(
            "placement: below={space_below} above={space_above} -> {direction:?} at ({left}, {top})"
        );

        Self {
            anchor,
            direction,
            position: Point::new(left, top),
            width: anchor.width,
        }
    }

    pub fn opens_upward(&self) -> bool {
        self.direction == Direction::Up
    }

    /// Page-coordinate rectangle of a list with the given content height.
    pub fn list_bounds(&self, content_height: f32) -> Bounds {
        Bounds::from_origin(self.position, Size::new(self.width, content_height))
    }
}
