//! Core systems for Horizon Segments.
//!
//! This crate provides the foundational pieces shared by the render and
//! widget crates:
//!
//! - **Signal/Slot System**: [`Signal`] for multi-listener notifications
//! - **Property System**: [`Property`] with change detection
//! - **Logging**: `tracing` target names in [`logging::targets`]
//!
//! # Example
//!
//! ```
//! use horizon_segments_core::{Property, Signal};
//!
//! let selected = Property::new(-1);
//! let value_changed = Signal::<i32>::new();
//! value_changed.connect(|index| println!("now at {index}"));
//!
//! if selected.set(1) {
//!     value_changed.emit(1);
//! }
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::SignalError;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
