//! Reactive properties with change detection.
//!
//! A [`Property<T>`] wraps a value and reports whether a write actually
//! changed it. Owners pair a property with a [`Signal`](crate::Signal) and
//! emit only when the value changed:
//!
//! ```
//! use horizon_segments_core::{Property, Signal};
//!
//! struct Selection {
//!     index: Property<i32>,
//!     index_changed: Signal<(i32, i32)>,
//! }
//!
//! impl Selection {
//!     fn select(&self, new_index: i32) {
//!         if let Some(old_index) = self.index.replace(new_index) {
//!             self.index_changed.emit((new_index, old_index));
//!         }
//!     }
//! }
//!
//! let selection = Selection { index: Property::new(-1), index_changed: Signal::new() };
//! selection.select(2);
//! assert_eq!(selection.index.get(), 2);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// when `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
