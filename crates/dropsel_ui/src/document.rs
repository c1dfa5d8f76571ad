//! Page-level shared state: viewport, pointer listeners and the overlay layer.
//!
//! Widgets that need to observe presses anywhere on the page subscribe with
//! [`Document::subscribe_pointer_down`] and keep the returned [`Subscription`]
//! for as long as they want to listen. Dropping the subscription deregisters
//! the listener immediately, even in the middle of a dispatch.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::event::{MouseButton, PointerDown};
use crate::layout::Point;
use crate::overlay::OverlayLayer;
use crate::viewport::Viewport;

/// Identifier of a registered pointer listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(&PointerDown)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<ListenerId, Listener>,
}

struct DocumentInner {
    viewport: Cell<Viewport>,
    registry: Rc<RefCell<Registry>>,
    overlay: OverlayLayer,
}

/// Handle to the page. Cloning yields another handle to the same page.
#[derive(Clone)]
pub struct Document {
    inner: Rc<DocumentInner>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("viewport", &self.viewport())
            .field("listeners", &self.listener_count())
            .field("overlay", &self.inner.overlay.len())
            .finish()
    }
}

impl Document {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            inner: Rc::new(DocumentInner {
                viewport: Cell::new(viewport),
                registry: Rc::new(RefCell::new(Registry::default())),
                overlay: OverlayLayer::new(),
            }),
        }
    }

    /// The viewport as it is right now.
    pub fn viewport(&self) -> Viewport {
        self.inner.viewport.get()
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.inner.viewport.set(viewport);
    }

    /// Change the viewport size, keeping the scroll offsets.
    pub fn resize(&self, width: f32, height: f32) {
        let mut vp = self.viewport();
        vp.width = width;
        vp.height = height;
        self.set_viewport(vp);
    }

    pub fn scroll_to(&self, x: f32, y: f32) {
        self.set_viewport(self.viewport().scrolled(x, y));
    }

    /// Scroll by a delta. Offsets never go below zero.
    pub fn scroll_by(&self, dx: f32, dy: f32) {
        let vp = self.viewport();
        self.scroll_to((vp.scroll_x + dx).max(0.0), (vp.scroll_y + dy).max(0.0));
    }

    pub fn overlay(&self) -> &OverlayLayer {
        &self.inner.overlay
    }

    /// Register a listener for every pointer-down on the page.
    pub fn subscribe_pointer_down<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&PointerDown) + 'static,
    {
        let mut registry = self.inner.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.insert(id, Rc::new(listener));
        log::trace!("document: subscribe {:?} ({} active)", id, registry.listeners.len());
        Subscription {
            id,
            registry: Rc::downgrade(&self.inner.registry),
        }
    }

    /// Number of listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.inner.registry.borrow().listeners.len()
    }

    /// Deliver a pointer-down at a client position to every listener.
    ///
    /// Listeners may subscribe or unsubscribe while the dispatch runs. A
    /// listener removed by an earlier one is skipped; one added during the
    /// dispatch is not called until the next press. Returns how many
    /// listeners were called.
    pub fn pointer_down(&self, button: MouseButton, client: Point) -> usize {
        let event = PointerDown {
            button,
            client,
            page: self.viewport().client_to_page(client),
        };

        let snapshot: Vec<(ListenerId, Listener)> = self
            .inner
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, l)| (*id, l.clone()))
            .collect();

        let mut fired = 0;
        for (id, listener) in snapshot {
            let still_registered = self.inner.registry.borrow().listeners.contains_key(&id);
            if !still_registered {
                continue;
            }
            listener(&event);
            fired += 1;
        }
        log::trace!("document: pointer down at {:?}, {} listener(s)", event.page, fired);
        fired
    }
}

/// Scoped registration of a pointer listener. Dropping it deregisters.
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|r| r.borrow().listeners.contains_key(&self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            // Detach the listener before it is dropped, in case it owns another subscription.
            let removed = registry.borrow_mut().listeners.remove(&self.id);
            log::trace!("document: unsubscribe {:?}", self.id);
            drop(removed);
        }
    }
}
