//! Callback abstraction for widget event handlers
//!
//! Instead of writing `Option<Box<dyn Fn(T) -> M>>` by hand, widgets store a
//! `Callback<T, M>` and call it when the owner should be told something.
//!
//! # Examples
//!
//! ```
//! use dropsel_ui::Callback;
//!
//! let on_change: Callback<String, usize> = Callback::new(|value: String| value.len());
//! assert_eq!(on_change.call("abc".to_string()), Some(3));
//!
//! let unset: Callback<String, usize> = Callback::none();
//! assert_eq!(unset.call("abc".to_string()), None);
//! ```

use std::fmt;

/// A callback wrapper that encapsulates an optional event handler.
///
/// - `T`: the value handed to the callback (e.g. the selected option)
/// - `M`: the message type returned to the owner
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(message)` if the callback is set, or `None` otherwise.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("is_set", &self.is_some())
            .finish()
    }
}
