//! Overlay layer for floating surfaces (dropdown panels, popups).
//!
//! Surfaces placed here render above the regular widget tree at absolute page
//! coordinates, independent of the layout they were opened from. A widget
//! acquires an [`OverlaySlot`] and the surface stays on the layer for as long
//! as the slot is alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::layout::Bounds;

/// Identifier of a surface on the layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceId(u64);

/// A floating surface as seen by a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySurface {
    /// Name of the widget that placed the surface
    pub owner: String,
    /// Absolute position and size in page coordinates
    pub bounds: Bounds,
    /// One label per row, top to bottom
    pub rows: Vec<String>,
}

#[derive(Debug, Default)]
struct LayerInner {
    next_id: u64,
    surfaces: Vec<(SurfaceId, OverlaySurface)>,
}

/// Shared overlay layer. Cloning yields another handle to the same layer.
#[derive(Debug, Clone, Default)]
pub struct OverlayLayer {
    inner: Rc<RefCell<LayerInner>>,
}

impl OverlayLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a surface on top of the layer.
    pub fn acquire(&self, surface: OverlaySurface) -> OverlaySlot {
        let mut inner = self.inner.borrow_mut();
        let id = SurfaceId(inner.next_id);
        inner.next_id += 1;
        log::trace!("overlay: acquire {:?} for '{}'", id, surface.owner);
        inner.surfaces.push((id, surface));
        OverlaySlot {
            id,
            layer: Rc::downgrade(&self.inner),
        }
    }

    /// Surfaces in stacking order (first acquired is drawn first).
    pub fn surfaces(&self) -> Vec<OverlaySurface> {
        self.inner
            .borrow()
            .surfaces
            .iter()
            .map(|(_, s)| s.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ownership of one surface on an [`OverlayLayer`]. Dropping it removes the surface.
#[derive(Debug)]
pub struct OverlaySlot {
    id: SurfaceId,
    layer: Weak<RefCell<LayerInner>>,
}

impl OverlaySlot {
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Current page-coordinate bounds of the surface.
    pub fn bounds(&self) -> Option<Bounds> {
        let layer = self.layer.upgrade()?;
        let inner = layer.borrow();
        inner
            .surfaces
            .iter()
            .find(|(id, _)| *id == self.id)
            .map(|(_, s)| s.bounds)
    }
}

impl Drop for OverlaySlot {
    fn drop(&mut self) {
        if let Some(layer) = self.layer.upgrade() {
            log::trace!("overlay: release {:?}", self.id);
            layer.borrow_mut().surfaces.retain(|(id, _)| *id != self.id);
        }
    }
}
